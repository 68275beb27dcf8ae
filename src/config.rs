//! # Load Configuration
//!
//! Configuration read once by the load hook. The host may override the
//! defaults with a JSON document in `PARTICLE_NATIVE_CONFIG`.

use jni::sys::{
    jint, JNI_VERSION_1_1, JNI_VERSION_1_2, JNI_VERSION_1_4, JNI_VERSION_1_6, JNI_VERSION_1_8,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding a JSON config document
pub const CONFIG_ENV: &str = "PARTICLE_NATIVE_CONFIG";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("PARTICLE_NATIVE_CONFIG is not valid unicode")]
    NotUnicode,
}

/// JNI interface versions the hook can negotiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum InterfaceVersion {
    #[serde(rename = "1.1")]
    V1_1,
    #[serde(rename = "1.2")]
    V1_2,
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.6")]
    V1_6,
    #[serde(rename = "1.8")]
    V1_8,
}

impl Default for InterfaceVersion {
    fn default() -> Self {
        InterfaceVersion::V1_6
    }
}

impl InterfaceVersion {
    /// Version sentinel as passed to `GetEnv` and returned from `JNI_OnLoad`
    pub fn as_raw(self) -> jint {
        match self {
            InterfaceVersion::V1_1 => JNI_VERSION_1_1,
            InterfaceVersion::V1_2 => JNI_VERSION_1_2,
            InterfaceVersion::V1_4 => JNI_VERSION_1_4,
            InterfaceVersion::V1_6 => JNI_VERSION_1_6,
            InterfaceVersion::V1_8 => JNI_VERSION_1_8,
        }
    }
}

/// Log verbosity, mirrored onto `log::LevelFilter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Load hook configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Fully-qualified class name, slash separated
    #[serde(rename = "className")]
    pub class_name: String,

    /// Minimum interface version required from the VM
    #[serde(rename = "jniVersion")]
    pub jni_version: InterfaceVersion,

    /// Log verbosity
    #[serde(rename = "logLevel")]
    pub log_level: LogLevel,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            class_name: crate::TARGET_CLASS.to_owned(),
            jni_version: InterfaceVersion::V1_6,
            log_level: LogLevel::Info,
        }
    }
}

impl LoadConfig {
    /// Parse config from bytes (JSON)
    pub fn from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        Ok(serde_json::from_slice(data)?)
    }

    /// Read config from `PARTICLE_NATIVE_CONFIG`, defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(value) => Self::from_bytes(value.as_bytes()),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

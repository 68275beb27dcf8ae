//! # JNI Types
//!
//! Load-hook sentinels and the error type.

use jni::sys::{jint, JNI_ERR};
use thiserror::Error;

/// Returned from `JNI_OnLoad` when loading must abort
pub const ERROR_SENTINEL: jint = JNI_ERR;

/// Load hook errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JavaVM pointer: {0}")]
    InvalidVm(#[source] jni::errors::Error),

    #[error("JavaVM invoke interface has no {0}")]
    MissingFunction(&'static str),

    #[error("JNI version {requested:#x} unavailable (GetEnv returned {code})")]
    VersionUnsupported { requested: jint, code: jint },

    #[error("class not found: {name}")]
    ClassNotFound { name: String },

    #[error(transparent)]
    Jni(#[from] jni::errors::Error),
}

impl LoadError {
    /// Sentinel handed back to the host. Every failure aborts the load.
    pub fn sentinel(&self) -> jint {
        ERROR_SENTINEL
    }
}

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

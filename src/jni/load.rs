//! # Library Load Hook
//!
//! `JNI_OnLoad` runs once, from the class loader that loaded the
//! library, so `FindClass` sees the application's classes.

use std::ffi::c_void;

use jni::sys::{self, jint};
use jni::JavaVM;

use super::host::HostRuntime;
use super::symbol::NATIVE_METHODS;
use super::types::{LoadError, LoadResult, ERROR_SENTINEL};
use crate::config::LoadConfig;

/// Negotiate the interface version and resolve the target class.
///
/// Returns the negotiated version sentinel. A failed negotiation never
/// reaches the class lookup.
pub fn try_load<H: HostRuntime + ?Sized>(host: &H, config: &LoadConfig) -> LoadResult<jint> {
    let version = config.jni_version.as_raw();

    let mut env = host.env(version)?;
    env.lookup_class(&config.class_name)?;

    for method in NATIVE_METHODS {
        log::debug!(
            "{}.{}{} bound by symbol {}",
            config.class_name,
            method.name,
            method.signature,
            method.symbol(&config.class_name)
        );
    }

    Ok(version)
}

/// `try_load` with failures mapped to `JNI_ERR`
pub fn on_load<H: HostRuntime + ?Sized>(host: &H, config: &LoadConfig) -> jint {
    match try_load(host, config) {
        Ok(version) => {
            log::info!("{} v{} loaded for {}", crate::NAME, crate::VERSION, config.class_name);
            version
        }
        Err(e) => {
            log::error!("Library load failed: {}", e);
            e.sentinel()
        }
    }
}

/// Called by the JVM when the library is loaded
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn JNI_OnLoad(vm: *mut sys::JavaVM, _reserved: *mut c_void) -> jint {
    let (config, config_error) = match LoadConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (LoadConfig::default(), Some(e)),
    };

    crate::init_logging(config.log_level.into());
    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }

    let vm = match JavaVM::from_raw(vm) {
        Ok(vm) => vm,
        Err(e) => {
            let e = LoadError::InvalidVm(e);
            log::error!("Library load failed: {}", e);
            return ERROR_SENTINEL;
        }
    };

    on_load(&vm, &config)
}

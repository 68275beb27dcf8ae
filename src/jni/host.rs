//! # Host Runtime Seam
//!
//! The two operations the load hook needs from the JVM, behind traits so
//! the hook's contract can be exercised without a running VM.

use std::ffi::c_void;
use std::ptr;

use jni::sys::{self, jint, JNI_OK};
use jni::{JNIEnv, JavaVM};

use super::types::{LoadError, LoadResult};

/// Resolves managed classes by their slash-separated name
pub trait ClassLookup {
    /// Succeeds when the class is visible to the current class loader.
    /// The resolved handle is not kept.
    fn lookup_class(&mut self, name: &str) -> LoadResult<()>;
}

/// The process-wide VM handed to the load hook
pub trait HostRuntime {
    /// Obtain an environment for the current thread that supports
    /// `version`, or fail with `LoadError::VersionUnsupported`.
    fn env(&self, version: jint) -> LoadResult<Box<dyn ClassLookup + '_>>;
}

impl HostRuntime for JavaVM {
    fn env(&self, version: jint) -> LoadResult<Box<dyn ClassLookup + '_>> {
        // `JavaVM::get_env` always asks for 1.1, so call GetEnv directly.
        let vm = self.get_java_vm_pointer();
        let mut env_ptr: *mut c_void = ptr::null_mut();

        let code = unsafe {
            let get_env = (**vm).GetEnv.ok_or(LoadError::MissingFunction("GetEnv"))?;
            get_env(vm, &mut env_ptr, version)
        };

        if code != JNI_OK {
            return Err(LoadError::VersionUnsupported { requested: version, code });
        }

        let env = unsafe { JNIEnv::from_raw(env_ptr as *mut sys::JNIEnv)? };
        Ok(Box::new(env))
    }
}

impl<'local> ClassLookup for JNIEnv<'local> {
    fn lookup_class(&mut self, name: &str) -> LoadResult<()> {
        match JNIEnv::find_class(self, name) {
            Ok(class) => {
                let _ = self.delete_local_ref(class);
                Ok(())
            }
            Err(err) => {
                log::debug!("FindClass({}) failed: {}", name, err);
                // Leave no NoClassDefFoundError pending for the host.
                if self.exception_check().unwrap_or(false) {
                    let _ = self.exception_clear();
                }
                Err(LoadError::ClassNotFound { name: name.to_owned() })
            }
        }
    }
}

//! # JNI Bridge Implementation
//!
//! Native methods of `net.kaedenn.debugtoy.SurfaceAnimation`.
//!
//! ## Function Naming Convention
//!
//! JNI functions must follow this pattern:
//! `Java_<package>_<class>_<method>`
//!
//! The names here must match `symbol::NATIVE_METHODS` mangled against
//! `TARGET_CLASS`.

use std::io::{self, Write};

use jni::objects::{JFloatArray, JObject, JObjectArray};
use jni::JNIEnv;

use crate::diagnostics::{self, FUNC_DIAGNOSTIC};

// ============================================================================
// SAFE BODIES
// ============================================================================

/// Body of `animateNative`. Does nothing with the particle records, the
/// `[width, height]` buffer or the `[ddx, ddy]` buffer.
#[inline]
pub fn animate<'local>(
    _particles: &JObjectArray<'local>,
    _dimensions: &JFloatArray<'local>,
    _deltas: &JFloatArray<'local>,
) {
}

/// Body of `funcNative`: one diagnostic line on `out`. Write failures
/// are ignored.
pub fn func<W: Write + ?Sized>(out: &mut W) {
    let _ = diagnostics::emit_line(out, FUNC_DIAGNOSTIC);
}

// ============================================================================
// EXPORTED ENTRY POINTS
// ============================================================================

#[no_mangle]
pub extern "system" fn Java_net_kaedenn_debugtoy_SurfaceAnimation_animateNative<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    particles: JObjectArray<'local>,
    wh: JFloatArray<'local>,
    ddxy: JFloatArray<'local>,
) {
    animate(&particles, &wh, &ddxy);
}

#[no_mangle]
pub extern "system" fn Java_net_kaedenn_debugtoy_SurfaceAnimation_funcNative<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    func(&mut io::stderr().lock());
}

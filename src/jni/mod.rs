//! # JNI Bindings
//!
//! Everything the host JVM calls: the `JNI_OnLoad` hook and the
//! `SurfaceAnimation` native methods.
//!
//! ## Safety
//!
//! The exported functions receive raw pointers from the JVM. The safe
//! bodies they forward to only ever borrow host references for the
//! duration of the call.

pub mod bridge;
pub mod host;
pub mod load;
pub mod symbol;
pub mod types;

pub use bridge::*;
pub use load::JNI_OnLoad;

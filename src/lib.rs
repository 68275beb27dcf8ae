//! # Particle Native
//!
//! Native entry points for the DebugToy `SurfaceAnimation` class.
//!
//! ## Modules
//!
//! - **JNI**: load hook, exported `Java_*` entry points, symbol mangling
//! - **Config**: load-time configuration read from the environment
//! - **Diagnostics**: the fixed diagnostic line written by `funcNative`
//!
//! Methods are bound by JNI short-name symbol resolution; nothing is
//! registered through `RegisterNatives`.

pub mod config;
pub mod diagnostics;
pub mod jni;

pub use config::{ConfigError, InterfaceVersion, LoadConfig};
pub use crate::jni::host::{ClassLookup, HostRuntime};
pub use crate::jni::load::{on_load, try_load};
pub use crate::jni::types::LoadError;

use std::sync::Once;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "particle_native";

/// Managed class whose native methods live here
pub const TARGET_CLASS: &str = "net/kaedenn/debugtoy/SurfaceAnimation";

/// Logging guard
static LOGGING: Once = Once::new();

/// Install the log subscriber. Only the first call has an effect.
pub fn init_logging(level: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    LOGGING.call_once(|| {
        let filter = match level {
            log::LevelFilter::Off => LevelFilter::OFF,
            log::LevelFilter::Error => LevelFilter::ERROR,
            log::LevelFilter::Warn => LevelFilter::WARN,
            log::LevelFilter::Info => LevelFilter::INFO,
            log::LevelFilter::Debug => LevelFilter::DEBUG,
            log::LevelFilter::Trace => LevelFilter::TRACE,
        };

        // A host that already installed a logger keeps its own level.
        if tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init()
            .is_ok()
        {
            log::set_max_level(level);
        }
    });
}

//! Logging utilities
//!
//! The crate reports degraded renderable units and traversal anomalies through
//! the `log` facade; hosts pick the backend. This helper wires up `env_logger`
//! for executables and tests that want one.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}

//! Logging setup
//!
//! The library logs through the `log` facade. Binaries call [`init`] once to
//! install `env_logger`, writing to standard output so shader diagnostics
//! end up there. `RUST_LOG` overrides the default `info` filter.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Returns `false` if a logger was already installed, which is harmless.
pub fn init() -> bool {
    init_with_default_filter("info")
}

/// Initialize the logging system with a fallback filter for when `RUST_LOG`
/// is unset
pub fn init_with_default_filter(default_filter: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .try_init()
        .is_ok()
}

// src/utils/log.rs

//! Logger setup for the table generator.
//!
//! Library code logs through the `log` facade (`trace!`, `debug!`,
//! `info!`, `error!`). The binary installs an `env_logger`
//! backend that writes to standard error, so log records never mix with
//! the listing on standard output.
//!
//! The filter defaults to `warn` and can be raised with `RUST_LOG`:
//!
//! ```text
//! RUST_LOG=debug gen-paddle-tables > tables.bas
//! ```

use env_logger::{Builder, Env, Target};

pub use ::log::{debug, error, info, trace};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger.
///
/// Safe to call more than once; later calls are ignored. Returns `true`
/// if this call installed the logger.
pub fn init_logger() -> bool {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_target(false) // Don't print the module path
        .try_init()
        .is_ok()
}

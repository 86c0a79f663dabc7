//! Configuration model and JSON5 config loading for Roster.
//!
//! This crate owns the config schema, validation, and the defaults used by
//! the server and the `roster` binary.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Default config filename.
pub use loader::DEFAULT_CONFIG_FILE;
/// Configuration schema models.
pub use model::*;

//! Configuration module for Shotpack
//!
//! Implements the filter policy hierarchy:
//! 1. `--config` flag (highest priority)
//! 2. `SHOTPACK_CONFIG` environment variable
//! 3. User config (`$XDG_CONFIG_HOME/shotpack/filters.yaml`)
//! 4. Built-in defaults (lowest priority)
//!
//! `SHOTPACK_MAX_VERSIONS` is applied on top of whichever source won.

mod loader;
mod types;

pub use loader::{resolve_config_path, ConfigWarning, CONFIG_ENV, MAX_VERSIONS_ENV};
pub use types::FilterConfig;

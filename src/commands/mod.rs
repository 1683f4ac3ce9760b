//! Command handlers for the `shotpack` binary.

pub mod build;
pub mod config;
pub mod seed;

pub use build::cmd_build;
pub use config::cmd_config;
pub use seed::cmd_seed;

//! Configuration provider implementations.

mod file_config;

pub use file_config::FileConfigProvider;

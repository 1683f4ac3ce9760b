//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_provider;
pub mod record_source;
pub mod scene_loader;

pub use config_provider::ConfigProvider;
pub use record_source::RecordSource;
pub use scene_loader::{LoadMode, LoadStatus, SceneLoader};

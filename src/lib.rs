//! Shotpack - lighting package builder
//!
//! Shotpack turns a shot context and an asset selection into a validated
//! lighting package: one compound per (asset, variant) holding the resolved
//! geometry, material and rig publishes, ready for a scene loader.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildPackageUseCase, BuildResult};
pub use config::FilterConfig;
pub use domain::entities::{Compound, LightingPackage, PublishRecord, ShotContext};
pub use error::{ContextError, ShotpackError, ShotpackResult, ValidationError};

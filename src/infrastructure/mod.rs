//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file access (atomic writes, not-found mapping)
//! - `config/` - File-backed filter config provider
//! - `records/` - Record sources (JSON tables, in-memory, demo data)
//! - `loaders/` - Scene loaders (dry run, manifest)

pub mod config;
pub mod fs;
pub mod loaders;
pub mod records;

// Re-export for convenience
pub use config::FileConfigProvider;
pub use fs::LocalFs;
pub use loaders::{DryRunSceneLoader, ManifestSceneLoader};
pub use records::{FsRecordSource, InMemoryRecordSource};

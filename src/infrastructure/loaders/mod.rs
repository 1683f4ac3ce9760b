//! Scene loader implementations.

mod dry_run;
mod manifest;

pub use dry_run::DryRunSceneLoader;
pub use manifest::ManifestSceneLoader;

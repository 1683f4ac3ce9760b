//! Dry-run scene loader, used when no interactive host is available.

use serde_json::Value;

use crate::domain::entities::LightingPackage;
use crate::domain::ports::{LoadMode, LoadStatus, SceneLoader};
use crate::error::ShotpackResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSceneLoader;

impl DryRunSceneLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SceneLoader for DryRunSceneLoader {
    fn load(&self, package: &LightingPackage) -> ShotpackResult<LoadStatus> {
        let compounds: Vec<Value> = package
            .compounds
            .iter()
            .map(|c| Value::String(c.label()))
            .collect();

        tracing::info!(
            context = %package.context,
            compounds = package.compounds.len(),
            "dry run: no scene host, package not loaded"
        );

        Ok(LoadStatus::new(LoadMode::DryRun)
            .with_detail("message", "no interactive host available; package not loaded")
            .with_detail("compound_count", package.compounds.len())
            .with_detail("component_count", package.component_count())
            .with_detail("compounds", compounds))
    }
}

//! SceneLoader port - hands an assembled package to the downstream scene.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::LightingPackage;
use crate::error::ShotpackResult;

/// How the package was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// No interactive host available; nothing was loaded
    DryRun,
    /// Package written as a manifest for a host to pick up
    Manifest,
}

impl LoadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DryRun => "dry_run",
            Self::Manifest => "manifest",
        }
    }
}

/// Status record returned by a scene loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStatus {
    pub mode: LoadMode,
    /// Loader-specific detail fields
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

impl LoadStatus {
    pub fn new(mode: LoadMode) -> Self {
        Self {
            mode,
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

pub trait SceneLoader {
    /// Load exactly one package; called only after every stage succeeded.
    fn load(&self, package: &LightingPackage) -> ShotpackResult<LoadStatus>;
}

impl<T: SceneLoader + ?Sized> SceneLoader for &T {
    fn load(&self, package: &LightingPackage) -> ShotpackResult<LoadStatus> {
        (**self).load(package)
    }
}

impl<T: SceneLoader + ?Sized> SceneLoader for Box<T> {
    fn load(&self, package: &LightingPackage) -> ShotpackResult<LoadStatus> {
        (**self).load(package)
    }
}

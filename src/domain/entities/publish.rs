//! Publish-side entities: asset tasks and versioned publish records.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A declared unit of work for an asset within a shot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTask {
    pub asset_name: String,
    pub task_name: String,
    /// Component/step label (geo, material, rig, ...)
    pub step: String,
}

impl AssetTask {
    pub fn new(
        asset_name: impl Into<String>,
        task_name: impl Into<String>,
        step: impl Into<String>,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            task_name: task_name.into(),
            step: step.into(),
        }
    }
}

/// One versioned deliverable for an asset component.
///
/// Several records may share `(asset_name, step)` and differ only by
/// `variant` and `version`; variant resolution collapses them to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRecord {
    pub asset_name: String,
    /// Component/step label (geo, material, rig, ...)
    pub step: String,
    /// Format family (bgeo, usd, abc, ass, ...)
    pub publish_type: String,
    /// Quality/appearance tag (high, medium, low, ...)
    pub variant: String,
    /// Higher is newer; unique within an (asset, step, variant) group
    pub version: u32,
    pub file_path: PathBuf,
}

impl PublishRecord {
    pub fn new(
        asset_name: impl Into<String>,
        step: impl Into<String>,
        publish_type: impl Into<String>,
        variant: impl Into<String>,
        version: u32,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            step: step.into(),
            publish_type: publish_type.into(),
            variant: variant.into(),
            version,
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// `v003`-style label used in listings
    pub fn version_label(&self) -> String {
        format!("v{:03}", self.version)
    }
}

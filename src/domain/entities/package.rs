//! LightingPackage entity - terminal artifact of the build pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Compound, ShotContext};

/// Run metadata stamped by the package assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub created_at_utc: DateTime<Utc>,
    pub compound_count: usize,
}

/// Resolved context plus the sorted compound list, ready for a scene loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingPackage {
    pub context: ShotContext,
    pub compounds: Vec<Compound>,
    pub metadata: PackageMetadata,
}

impl LightingPackage {
    /// Find the compound for an asset, if any variant of it was resolved.
    pub fn compound_for(&self, asset_name: &str) -> Option<&Compound> {
        self.compounds.iter().find(|c| c.asset_name == asset_name)
    }

    /// Total number of component records across all compounds.
    pub fn component_count(&self) -> usize {
        self.compounds.iter().map(|c| c.components.len()).sum()
    }
}

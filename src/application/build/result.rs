//! Build Result

use serde::Serialize;

use crate::domain::entities::LightingPackage;
use crate::domain::ports::LoadStatus;
use crate::domain::services::VariantFallback;

/// Outcome of a successful build: the package and what the loader did with it.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    pub package: LightingPackage,
    pub load_result: LoadStatus,
    /// Groups where the desired quality was missing and another was used
    #[serde(skip)]
    pub fallbacks: Vec<VariantFallback>,
}

impl BuildResult {
    pub fn has_fallbacks(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

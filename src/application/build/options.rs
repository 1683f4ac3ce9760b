//! Build Options

use std::collections::BTreeMap;

use crate::domain::services::LIGHTING_STEP;

/// What to build a package for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub project: String,
    pub sequence: String,
    pub shot: String,
    pub step: String,
    /// Requested asset names (duplicates collapse)
    pub assets: Vec<String>,
    /// Variant axis → value, winning over the configured defaults
    pub variant_overrides: BTreeMap<String, String>,
}

impl BuildOptions {
    pub fn new(
        project: impl Into<String>,
        sequence: impl Into<String>,
        shot: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            sequence: sequence.into(),
            shot: shot.into(),
            step: LIGHTING_STEP.to_string(),
            assets: Vec::new(),
            variant_overrides: BTreeMap::new(),
        }
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.step = step.into();
        self
    }

    pub fn with_assets<I, S>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = assets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.variant_overrides.insert(axis.into(), value.into());
        self
    }
}

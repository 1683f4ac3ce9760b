//! Compound entity - the resolved bundle for one (asset, variant) pair.

use serde::{Deserialize, Serialize};

use super::PublishRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compound {
    pub asset_name: String,
    pub variant: String,
    /// One record per distinct component, in resolution order
    pub components: Vec<PublishRecord>,
}

impl Compound {
    pub fn new(
        asset_name: impl Into<String>,
        variant: impl Into<String>,
        components: Vec<PublishRecord>,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            variant: variant.into(),
            components,
        }
    }

    /// Look up the record for a component (e.g. `"geo"`)
    pub fn component(&self, step: &str) -> Option<&PublishRecord> {
        self.components.iter().find(|c| c.step == step)
    }

    /// `asset:variant` label
    pub fn label(&self) -> String {
        format!("{}:{}", self.asset_name, self.variant)
    }
}

//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ShotpackError, ShotpackResult};

use super::loader::{self, ConfigWarning};

/// Declarative filter/variant policy for the build pipeline.
///
/// Every key is optional in the file; missing keys take the built-in
/// defaults from [`FilterConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// The only step code a package may be built for
    pub allowed_step: String,

    /// Components every selected asset must have a publish for
    pub required_components: Vec<String>,

    /// component → publish types allowed for it
    pub allowed_publish_types: BTreeMap<String, Vec<String>>,

    /// publish type → file extensions allowed for it
    pub allowed_extensions: BTreeMap<String, Vec<String>>,

    /// variant axis → allowed values
    pub variants: BTreeMap<String, Vec<String>>,

    /// variant axis → value used when no override is given
    pub default_variant: BTreeMap<String, String>,

    /// Cap on versions fetched per (asset, component, type, variant) group
    pub max_versions_per_component: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            allowed_step: "light".to_string(),
            required_components: strings(&["geo", "material", "rig"]),
            allowed_publish_types: BTreeMap::from([
                ("geo".to_string(), strings(&["bgeo", "usd"])),
                ("material".to_string(), strings(&["usd", "ass"])),
                ("rig".to_string(), strings(&["abc", "usd"])),
            ]),
            allowed_extensions: BTreeMap::from([
                ("bgeo".to_string(), strings(&[".bgeo.sc", ".bgeo"])),
                ("usd".to_string(), strings(&[".usd", ".usda", ".usdc"])),
                ("ass".to_string(), strings(&[".ass"])),
                ("abc".to_string(), strings(&[".abc"])),
            ]),
            variants: BTreeMap::from([
                ("quality".to_string(), strings(&["low", "medium", "high"])),
                ("lod".to_string(), strings(&["lodA", "lodB"])),
            ]),
            default_variant: BTreeMap::from([
                ("quality".to_string(), "high".to_string()),
                ("lod".to_string(), "lodA".to_string()),
            ]),
            max_versions_per_component: 3,
        }
    }
}

impl FilterConfig {
    /// Load configuration from a YAML or TOML file
    pub fn load(path: &Path) -> ShotpackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShotpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, `SHOTPACK_CONFIG`, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> ShotpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (SHOTPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Publish types allowed for a component; empty when the component is unknown.
    pub fn publish_types_for(&self, component: &str) -> &[String] {
        self.allowed_publish_types
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Extensions allowed for a publish type; empty when the type is unknown.
    pub fn extensions_for(&self, publish_type: &str) -> &[String] {
        self.allowed_extensions
            .get(publish_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Allowed values for a variant axis, `None` if the axis is not configured.
    pub fn variant_values(&self, axis: &str) -> Option<&[String]> {
        self.variants.get(axis).map(Vec::as_slice)
    }

    /// Reject settings no run could succeed with.
    pub(crate) fn check(&self, file: &Path) -> ShotpackResult<()> {
        if self.allowed_step.trim().is_empty() {
            return Err(invalid(file, "allowed_step must not be empty"));
        }
        if self.max_versions_per_component == 0 {
            return Err(invalid(file, "max_versions_per_component must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(file: &Path, message: &str) -> ShotpackError {
    ShotpackError::InvalidConfig {
        file: PathBuf::from(file),
        message: message.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

//! File-based configuration provider.

use std::path::{Path, PathBuf};

use crate::config::{resolve_config_path, FilterConfig};
use crate::domain::ports::ConfigProvider;
use crate::error::ShotpackResult;

/// Loads the filter policy from YAML/TOML, falling back to built-in defaults.
///
/// Unknown keys are reported as warnings, not errors.
#[derive(Debug, Clone, Default)]
pub struct FileConfigProvider {
    explicit: Option<PathBuf>,
}

impl FileConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this file instead of the env/user lookup; it must exist.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }

    pub fn from_option(path: Option<&Path>) -> Self {
        Self {
            explicit: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> ShotpackResult<FilterConfig> {
        let (config, warnings) = FilterConfig::load_or_default(self.explicit.as_deref())?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        match self.source_path() {
            Some(path) => tracing::debug!(path = %path.display(), "loaded filter config"),
            None => tracing::debug!("using built-in filter config"),
        }
        Ok(config)
    }

    fn source_path(&self) -> Option<PathBuf> {
        resolve_config_path(self.explicit.as_deref())
    }
}

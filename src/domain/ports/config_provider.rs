//! ConfigProvider port - supplies the filter policy for a run.

use std::path::PathBuf;

use crate::config::FilterConfig;
use crate::error::ShotpackResult;

/// Abstracts where the filter policy comes from (file, env, built-ins).
///
/// Called once at the start of a run; the returned policy is immutable.
pub trait ConfigProvider {
    fn load(&self) -> ShotpackResult<FilterConfig>;

    /// File the policy was read from, if any (for diagnostics).
    fn source_path(&self) -> Option<PathBuf> {
        None
    }
}

/// A fixed, already-built policy.
impl ConfigProvider for FilterConfig {
    fn load(&self) -> ShotpackResult<FilterConfig> {
        Ok(self.clone())
    }
}

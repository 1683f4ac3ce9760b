//! Manifest scene loader
//!
//! Writes the package as JSON for a scene host to pick up.

use std::path::{Path, PathBuf};

use crate::domain::entities::LightingPackage;
use crate::domain::ports::{LoadMode, LoadStatus, SceneLoader};
use crate::error::ShotpackResult;
use crate::infrastructure::fs::LocalFs;

#[derive(Debug, Clone)]
pub struct ManifestSceneLoader {
    path: PathBuf,
    fs: LocalFs,
}

impl ManifestSceneLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SceneLoader for ManifestSceneLoader {
    fn load(&self, package: &LightingPackage) -> ShotpackResult<LoadStatus> {
        let mut content = serde_json::to_string_pretty(package)?;
        content.push('\n');
        self.fs.write_atomic(&self.path, &content)?;

        tracing::info!(path = %self.path.display(), "wrote package manifest");

        Ok(LoadStatus::new(LoadMode::Manifest)
            .with_detail("path", self.path.display().to_string())
            .with_detail("compound_count", package.compounds.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Compound, PublishRecord};
    use crate::domain::services::{assemble_package, resolve_shot_context};
    use tempfile::tempdir;

    #[test]
    fn writes_package_that_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/package.json");
        let context = resolve_shot_context("PRJ", "SQ010", "SH010", "light").unwrap();
        let record = PublishRecord::new("carA", "geo", "usd", "high", 3, "/show/model.usd");
        let package = assemble_package(context, vec![Compound::new("carA", "high", vec![record])]);

        let status = ManifestSceneLoader::new(&path).load(&package).unwrap();

        assert_eq!(status.mode, LoadMode::Manifest);
        assert_eq!(status.details["path"], path.display().to_string());

        let written: LightingPackage =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, package);
    }
}

//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::BuildPackageUseCase;
use crate::domain::ports::SceneLoader;
use crate::error::ShotpackResult;
use crate::infrastructure::{
    DryRunSceneLoader, FileConfigProvider, FsRecordSource, ManifestSceneLoader,
};

/// Scene loader chosen at runtime (dry run or manifest file)
pub type BoxedSceneLoader = Box<dyn SceneLoader>;

/// Type alias for the concrete BuildPackageUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildPackageUseCase<FsRecordSource, BoxedSceneLoader>;

/// Pick the scene loader: a manifest writer when a path is given, else a dry run.
pub fn create_scene_loader(manifest: Option<PathBuf>) -> BoxedSceneLoader {
    match manifest {
        Some(path) => Box::new(ManifestSceneLoader::new(path)),
        None => Box::new(DryRunSceneLoader::new()),
    }
}

/// Create a build use case reading records from `data_dir`.
///
/// The filter policy is loaded once here, from `config` when given, else
/// from `SHOTPACK_CONFIG`, the user config file, or the built-in defaults.
pub fn create_build_use_case(
    data_dir: &Path,
    config: Option<&Path>,
    manifest: Option<PathBuf>,
) -> ShotpackResult<ConcreteBuildUseCase> {
    let provider = FileConfigProvider::from_option(config);
    let records = FsRecordSource::new(data_dir);
    let loader = create_scene_loader(manifest);

    BuildPackageUseCase::from_provider(&provider, records, loader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::BuildOptions;
    use crate::domain::ports::LoadMode;
    use crate::infrastructure::records::sample::write_sample_dataset;
    use tempfile::tempdir;

    #[test]
    fn wires_fs_records_and_manifest_loader() {
        let dir = tempdir().unwrap();
        write_sample_dataset(dir.path(), "PRJ").unwrap();
        let config = dir.path().join("filters.yaml");
        std::fs::write(&config, "max_versions_per_component: 2\n").unwrap();
        let manifest = dir.path().join("out/package.json");

        let use_case =
            create_build_use_case(dir.path(), Some(config.as_path()), Some(manifest.clone()))
                .unwrap();
        assert_eq!(use_case.config().max_versions_per_component, 2);

        let options = BuildOptions::new("PRJ", "SQ010", "SH010").with_assets(["carA"]);
        let result = use_case.execute(&options).unwrap();

        assert_eq!(result.load_result.mode, LoadMode::Manifest);
        assert!(manifest.exists());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        assert!(create_build_use_case(dir.path(), Some(missing.as_path()), None).is_err());
    }
}

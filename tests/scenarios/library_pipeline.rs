//! Scenario: Pipeline tool drives the library directly
//!
//! Journey: A studio tool embeds shotpack, feeds it tracker rows it already
//! holds in memory, and collects the package without touching disk.
//!
//! Success Criteria:
//! - A missing publish stops the run before the loader is called
//! - A complete selection yields one compound per asset

use std::cell::Cell;

use shotpack::domain::ports::{LoadMode, LoadStatus, SceneLoader};
use shotpack::infrastructure::InMemoryRecordSource;
use shotpack::{
    BuildOptions, BuildPackageUseCase, FilterConfig, LightingPackage, ShotpackError,
    ShotpackResult, ValidationError,
};

#[derive(Default)]
struct CountingLoader {
    calls: Cell<usize>,
}

impl SceneLoader for CountingLoader {
    fn load(&self, _package: &LightingPackage) -> ShotpackResult<LoadStatus> {
        self.calls.set(self.calls.get() + 1);
        Ok(LoadStatus::new(LoadMode::DryRun))
    }
}

#[test]
fn scenario_embedded_build_stops_before_loader_on_gap() {
    let source = InMemoryRecordSource::sample("PRJ")
        .without_publishes(|row| row.asset_name == "carA" && row.step == "material");
    let loader = CountingLoader::default();
    let use_case = BuildPackageUseCase::new(FilterConfig::default(), &source, &loader);
    let options = BuildOptions::new("PRJ", "SQ010", "SH010").with_assets(["carA", "treeA"]);

    let err = use_case.execute(&options).unwrap_err();

    match err {
        ShotpackError::Validation(ValidationError::MissingComponents { asset, missing }) => {
            assert_eq!(asset, "carA");
            assert_eq!(missing, vec!["material"]);
        }
        other => panic!("expected MissingComponents, got {other:?}"),
    }
    assert_eq!(loader.calls.get(), 0);
    assert_eq!(source.publish_queries(), 1);
}

#[test]
fn scenario_embedded_build_complete_selection() {
    let source = InMemoryRecordSource::sample("PRJ");
    let loader = CountingLoader::default();
    let use_case = BuildPackageUseCase::new(FilterConfig::default(), &source, &loader);
    let options = BuildOptions::new("PRJ", "SQ010", "SH010").with_assets(["treeA", "carA"]);

    let result = use_case.execute(&options).unwrap();

    assert_eq!(loader.calls.get(), 1);
    assert_eq!(result.package.compounds.len(), 2);
    assert!(result.package.compound_for("carA").is_some());
    assert!(result.package.compound_for("treeA").is_some());
}

//! Build Package Use Case
//!
//! Orchestrates the build flow:
//! 1. Resolve the shot context and enforce the allowed step
//! 2. Validate the asset selection against the shot's tasks
//! 3. Fetch publishes for the selected assets (version-capped)
//! 4. Validate publish types, extensions and completeness
//! 5. Resolve variants to one record per asset component
//! 6. Build compounds and assemble the package
//! 7. Hand the package to the scene loader
//!
//! Any failure stops the run; the loader only ever sees a complete package.

use std::collections::BTreeSet;

use crate::config::FilterConfig;
use crate::domain::entities::LightingPackage;
use crate::domain::ports::{ConfigProvider, RecordSource, SceneLoader};
use crate::domain::services::{
    assemble_package, build_compounds, ensure_allowed_step, resolve_shot_context,
    resolve_variants_detailed, validate_asset_selection, validate_publishes_for, VariantFallback,
};
use crate::error::ShotpackResult;

use super::options::BuildOptions;
use super::result::BuildResult;

/// Build use case, parameterized by its ports.
pub struct BuildPackageUseCase<RS, SL>
where
    RS: RecordSource,
    SL: SceneLoader,
{
    config: FilterConfig,
    records: RS,
    loader: SL,
}

impl<RS, SL> BuildPackageUseCase<RS, SL>
where
    RS: RecordSource,
    SL: SceneLoader,
{
    pub fn new(config: FilterConfig, records: RS, loader: SL) -> Self {
        Self {
            config,
            records,
            loader,
        }
    }

    /// Load the policy once from `provider` and build the use case around it.
    pub fn from_provider(
        provider: &dyn ConfigProvider,
        records: RS,
        loader: SL,
    ) -> ShotpackResult<Self> {
        Ok(Self::new(provider.load()?, records, loader))
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Run every stage and hand the package to the scene loader.
    pub fn execute(&self, options: &BuildOptions) -> ShotpackResult<BuildResult> {
        let (package, fallbacks) = self.assemble(options)?;
        let load_result = self.loader.load(&package)?;
        tracing::info!(mode = load_result.mode.as_str(), "scene loader finished");

        Ok(BuildResult {
            package,
            load_result,
            fallbacks,
        })
    }

    /// Run every stage up to package assembly, without loading.
    pub fn assemble(
        &self,
        options: &BuildOptions,
    ) -> ShotpackResult<(LightingPackage, Vec<VariantFallback>)> {
        let context = resolve_shot_context(
            &options.project,
            &options.sequence,
            &options.shot,
            &options.step,
        )?;
        ensure_allowed_step(&context, &self.config.allowed_step)?;
        tracing::debug!(context = %context, "resolved shot context");

        let available: BTreeSet<String> = self
            .records
            .load_shot_assets(&context)?
            .into_iter()
            .map(|task| task.asset_name)
            .collect();
        let requested: BTreeSet<String> = options.assets.iter().cloned().collect();
        validate_asset_selection(&requested, &available)?;
        tracing::debug!(
            requested = requested.len(),
            available = available.len(),
            "asset selection valid"
        );

        let publishes = self.records.load_publishes_for_assets(
            &context,
            &requested,
            self.config.max_versions_per_component,
        )?;
        validate_publishes_for(&publishes, &requested, &self.config)?;
        tracing::debug!(publishes = publishes.len(), "publishes valid");

        let resolution =
            resolve_variants_detailed(&publishes, &options.variant_overrides, &self.config)?;
        let compounds = build_compounds(resolution.records);
        let package = assemble_package(context, compounds);
        tracing::info!(
            compounds = package.metadata.compound_count,
            components = package.component_count(),
            "assembled lighting package"
        );

        Ok((package, resolution.fallbacks))
    }
}

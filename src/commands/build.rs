//! Build command handler
//!
//! Runs the package pipeline against the record tables in `--data-dir` and
//! prints the package plus the loader status.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use shotpack::application::BuildOptions;
use shotpack::presentation::{create_build_use_case, create_renderer, OutputFormat};

/// Arguments of `shotpack build`, gathered from the CLI.
#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub project: String,
    pub sequence: String,
    pub shot: String,
    pub step: String,
    pub data_dir: PathBuf,
    pub assets: Vec<String>,
    pub variant_quality: Option<String>,
    pub variant_lod: Option<String>,
    pub variants: Vec<(String, String)>,
    pub config: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub json: bool,
}

impl BuildArgs {
    /// Variant overrides; the dedicated quality/lod flags win over `--variant`.
    fn variant_overrides(&self) -> BTreeMap<String, String> {
        let mut overrides: BTreeMap<String, String> = self.variants.iter().cloned().collect();
        if let Some(quality) = &self.variant_quality {
            overrides.insert("quality".to_string(), quality.clone());
        }
        if let Some(lod) = &self.variant_lod {
            overrides.insert("lod".to_string(), lod.clone());
        }
        overrides
    }

    fn options(&self) -> BuildOptions {
        let mut options = BuildOptions::new(&self.project, &self.sequence, &self.shot)
            .with_step(&self.step)
            .with_assets(self.assets.iter().cloned());
        options.variant_overrides = self.variant_overrides();
        options
    }
}

pub fn cmd_build(args: BuildArgs, verbose: u8) -> Result<()> {
    let use_case =
        create_build_use_case(&args.data_dir, args.config.as_deref(), args.manifest.clone())?;
    let result = use_case.execute(&args.options())?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let renderer = create_renderer(format, true, verbose);
    println!("{}", renderer.render(&result).trim_end());
    Ok(())
}

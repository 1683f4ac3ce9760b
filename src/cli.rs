use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shotpack - build validated lighting packages for a shot
#[derive(Parser, Debug)]
#[command(name = "shotpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a lighting package for a shot and hand it to the scene loader
    Build {
        #[arg(long)]
        project: String,

        #[arg(long)]
        sequence: String,

        #[arg(long)]
        shot: String,

        /// Task step code
        #[arg(long, default_value = "light")]
        step: String,

        /// Directory holding the `<project>_*.json` record tables
        #[arg(long)]
        data_dir: PathBuf,

        /// Assets to include in the package
        #[arg(long, num_args = 1.., required = true)]
        assets: Vec<String>,

        /// Quality variant (low, medium, high)
        #[arg(long)]
        variant_quality: Option<String>,

        /// Level-of-detail variant (lodA, lodB)
        #[arg(long)]
        variant_lod: Option<String>,

        /// Extra variant override (repeatable)
        #[arg(long = "variant", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        variants: Vec<(String, String)>,

        /// Filter config file (YAML or TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the package manifest here instead of a dry run
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the demo record tables
    Seed {
        /// Directory to write the tables into
        #[arg(long)]
        out_dir: PathBuf,

        #[arg(long, default_value = "PRJ")]
        project: String,
    },

    /// Print the effective filter configuration
    Config {
        /// Filter config file (YAML or TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

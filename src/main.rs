//! Shotpack CLI - lighting package builder
//!
//! Usage: shotpack <COMMAND>
//!
//! Commands:
//!   build   Build a lighting package for a shot
//!   seed    Write the demo record tables
//!   config  Print the effective filter configuration

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::build::BuildArgs;
use shotpack::ShotpackError;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "SHOTPACK_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        eprintln!("✗ Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Build {
            project,
            sequence,
            shot,
            step,
            data_dir,
            assets,
            variant_quality,
            variant_lod,
            variants,
            config,
            manifest,
            json,
        } => commands::cmd_build(
            BuildArgs {
                project,
                sequence,
                shot,
                step,
                data_dir,
                assets,
                variant_quality,
                variant_lod,
                variants,
                config,
                manifest,
                json,
            },
            cli.verbose,
        ),
        Commands::Seed { out_dir, project } => commands::cmd_seed(&out_dir, &project),
        Commands::Config { config } => commands::cmd_config(config.as_deref()),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 2 for bad input, 3 for a missing resource, 1 for anything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ShotpackError>() {
        Some(e) if e.is_user_error() => 2,
        Some(ShotpackError::NotFound { .. }) => 3,
        _ => 1,
    }
}

//! Config command handler - prints the effective filter policy as YAML.

use std::path::Path;

use anyhow::Result;

use shotpack::domain::ports::ConfigProvider;
use shotpack::infrastructure::FileConfigProvider;

pub fn cmd_config(config: Option<&Path>) -> Result<()> {
    let provider = FileConfigProvider::from_option(config);
    let policy = provider.load()?;

    match provider.source_path() {
        Some(path) => println!("# source: {}", path.display()),
        None => println!("# source: built-in defaults"),
    }
    print!("{}", serde_yaml_ng::to_string(&policy)?);
    Ok(())
}

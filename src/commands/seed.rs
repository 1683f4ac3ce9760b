//! Seed command handler - writes the demo record tables.

use std::path::Path;

use anyhow::Result;

use shotpack::infrastructure::records::sample::write_sample_dataset;

pub fn cmd_seed(out_dir: &Path, project: &str) -> Result<()> {
    let paths = write_sample_dataset(out_dir, project)?;
    println!("✓ Seeded {}", project);
    println!("  {}", paths.tasks.display());
    println!("  {}", paths.publishes.display());
    Ok(())
}

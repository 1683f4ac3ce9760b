//! Demo dataset
//!
//! Two assets (`carA`, `treeA`) in `SQ010/SH010`, each with geo, material
//! and rig publishes. High-quality versions are geo v3, material v5, rig v1;
//! geo and material also have an older medium-quality publish.

use std::path::{Path, PathBuf};

use crate::error::ShotpackResult;
use crate::infrastructure::fs::LocalFs;

use super::{FsRecordSource, PublishRow, TaskRow};

pub const SAMPLE_SEQUENCE: &str = "SQ010";
pub const SAMPLE_SHOT: &str = "SH010";
pub const SAMPLE_ASSETS: [&str; 2] = ["carA", "treeA"];

/// Files written by [`write_sample_dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePaths {
    pub tasks: PathBuf,
    pub publishes: PathBuf,
}

pub fn sample_tasks(project: &str) -> Vec<TaskRow> {
    let prefixes = [("carA", "car"), ("treeA", "tree")];
    prefixes
        .iter()
        .flat_map(|(asset, prefix)| {
            [
                (format!("{prefix}_model"), "geo"),
                (format!("{prefix}_lookdev"), "material"),
                (format!("{prefix}_rig"), "rig"),
            ]
            .into_iter()
            .map(move |(task_name, step)| TaskRow {
                project: project.to_string(),
                sequence: SAMPLE_SEQUENCE.to_string(),
                shot: SAMPLE_SHOT.to_string(),
                asset_name: asset.to_string(),
                task_name,
                step: step.to_string(),
            })
        })
        .collect()
}

pub fn sample_publishes(project: &str) -> Vec<PublishRow> {
    static LAYOUT: [(&str, &str, &str, u32, &str, &str); 5] = [
        ("geo", "usd", "high", 3, "geo", "model.usd"),
        ("geo", "usd", "medium", 2, "geo", "model.usd"),
        ("material", "usd", "high", 5, "look", "look.usd"),
        ("material", "usd", "medium", 4, "look", "look.usd"),
        ("rig", "abc", "high", 1, "rig", "rig.abc"),
    ];

    SAMPLE_ASSETS
        .iter()
        .flat_map(|asset| {
            LAYOUT
                .iter()
                .map(move |(step, publish_type, variant, version, dir, file)| PublishRow {
                    project: project.to_string(),
                    sequence: SAMPLE_SEQUENCE.to_string(),
                    shot: SAMPLE_SHOT.to_string(),
                    asset_name: asset.to_string(),
                    step: step.to_string(),
                    publish_type: publish_type.to_string(),
                    variant: variant.to_string(),
                    version: *version,
                    file_path: PathBuf::from(format!(
                        "/show/{project}/assets/{asset}/{dir}/{variant}/v{version:03}/{file}"
                    )),
                })
        })
        .collect()
}

/// Write the demo tables into `out_dir` in the layout `FsRecordSource` reads.
pub fn write_sample_dataset(out_dir: &Path, project: &str) -> ShotpackResult<SamplePaths> {
    let source = FsRecordSource::new(out_dir);
    let paths = SamplePaths {
        tasks: source.tasks_path(project),
        publishes: source.publishes_path(project),
    };

    let fs = LocalFs::new();
    fs.write_atomic(
        &paths.tasks,
        &serde_json::to_string_pretty(&sample_tasks(project))?,
    )?;
    fs.write_atomic(
        &paths.publishes,
        &serde_json::to_string_pretty(&sample_publishes(project))?,
    )?;

    tracing::info!(
        tasks = %paths.tasks.display(),
        publishes = %paths.publishes.display(),
        "wrote sample dataset"
    );
    Ok(paths)
}

//! Record Source Implementations
//!
//! - `FsRecordSource` - JSON table exports on disk
//! - `InMemoryRecordSource` - rows held in memory
//! - `sample` - the demo dataset written by `shotpack seed`

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{AssetTask, PublishRecord, ShotContext};

mod fs_source;
mod memory;
mod rows;
pub mod sample;

pub use fs_source::{FsRecordSource, PUBLISHES_FILE_SUFFIX, TASKS_FILE_SUFFIX};
pub use memory::InMemoryRecordSource;
pub use rows::{PublishRow, TaskRow};

/// Tasks of the shot, ordered by asset name.
pub(crate) fn select_tasks<'a>(
    rows: impl IntoIterator<Item = &'a TaskRow>,
    context: &ShotContext,
) -> Vec<AssetTask> {
    let mut tasks: Vec<AssetTask> = rows
        .into_iter()
        .filter(|row| row.matches(context))
        .map(TaskRow::to_task)
        .collect();
    tasks.sort_by(|a, b| a.asset_name.cmp(&b.asset_name));
    tasks
}

/// Publishes of the shot for `assets`, keeping the `max_versions` newest per
/// (asset, step, publish_type, variant) group, newest first.
pub(crate) fn select_publishes<'a>(
    rows: impl IntoIterator<Item = &'a PublishRow>,
    context: &ShotContext,
    assets: &BTreeSet<String>,
    max_versions: usize,
) -> Vec<PublishRecord> {
    if assets.is_empty() {
        return Vec::new();
    }

    type GroupKey = (String, String, String, String);
    let mut grouped: BTreeMap<GroupKey, Vec<PublishRecord>> = BTreeMap::new();
    for row in rows {
        if !row.matches(context) || !assets.contains(&row.asset_name) {
            continue;
        }
        let key = (
            row.asset_name.clone(),
            row.step.clone(),
            row.publish_type.clone(),
            row.variant.clone(),
        );
        grouped.entry(key).or_default().push(row.to_record());
    }

    grouped
        .into_values()
        .flat_map(|mut group| {
            group.sort_by(|a, b| b.version.cmp(&a.version));
            group.truncate(max_versions);
            group
        })
        .collect()
}

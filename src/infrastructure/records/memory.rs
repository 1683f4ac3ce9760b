//! In-memory record source

use std::cell::Cell;
use std::collections::BTreeSet;

use crate::domain::entities::{AssetTask, PublishRecord, ShotContext};
use crate::domain::ports::RecordSource;
use crate::error::ShotpackResult;

use super::{sample, select_publishes, select_tasks, PublishRow, TaskRow};

/// Record source over rows held in memory.
///
/// Counts publish queries so callers can check that a run stopped before
/// fetching publish data.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    tasks: Vec<TaskRow>,
    publishes: Vec<PublishRow>,
    publish_queries: Cell<usize>,
}

impl InMemoryRecordSource {
    pub fn new(tasks: Vec<TaskRow>, publishes: Vec<PublishRow>) -> Self {
        Self {
            tasks,
            publishes,
            publish_queries: Cell::new(0),
        }
    }

    /// The demo dataset for `project` (see [`sample`]).
    pub fn sample(project: &str) -> Self {
        Self::new(sample::sample_tasks(project), sample::sample_publishes(project))
    }

    pub fn with_task(mut self, row: TaskRow) -> Self {
        self.tasks.push(row);
        self
    }

    pub fn with_publish(mut self, row: PublishRow) -> Self {
        self.publishes.push(row);
        self
    }

    /// Drop publish rows matching a predicate.
    pub fn without_publishes(mut self, predicate: impl Fn(&PublishRow) -> bool) -> Self {
        self.publishes.retain(|row| !predicate(row));
        self
    }

    /// Number of `load_publishes_for_assets` calls so far.
    pub fn publish_queries(&self) -> usize {
        self.publish_queries.get()
    }
}

impl RecordSource for InMemoryRecordSource {
    fn load_shot_assets(&self, context: &ShotContext) -> ShotpackResult<Vec<AssetTask>> {
        Ok(select_tasks(&self.tasks, context))
    }

    fn load_publishes_for_assets(
        &self,
        context: &ShotContext,
        assets: &BTreeSet<String>,
        max_versions: usize,
    ) -> ShotpackResult<Vec<PublishRecord>> {
        self.publish_queries.set(self.publish_queries.get() + 1);
        Ok(select_publishes(
            &self.publishes,
            context,
            assets,
            max_versions,
        ))
    }
}

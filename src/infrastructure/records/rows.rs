//! Row shapes stored by record sources.
//!
//! Rows carry the shot identity next to the entity fields, like the
//! tracker tables they are exported from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AssetTask, PublishRecord, ShotContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub project: String,
    pub sequence: String,
    pub shot: String,
    pub asset_name: String,
    pub task_name: String,
    pub step: String,
}

impl TaskRow {
    pub fn matches(&self, context: &ShotContext) -> bool {
        self.project == context.project()
            && self.sequence == context.sequence()
            && self.shot == context.shot()
    }

    pub fn to_task(&self) -> AssetTask {
        AssetTask::new(&self.asset_name, &self.task_name, &self.step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRow {
    pub project: String,
    pub sequence: String,
    pub shot: String,
    pub asset_name: String,
    pub step: String,
    pub publish_type: String,
    pub variant: String,
    pub version: u32,
    pub file_path: PathBuf,
}

impl PublishRow {
    pub fn matches(&self, context: &ShotContext) -> bool {
        self.project == context.project()
            && self.sequence == context.sequence()
            && self.shot == context.shot()
    }

    pub fn to_record(&self) -> PublishRecord {
        PublishRecord::new(
            &self.asset_name,
            &self.step,
            &self.publish_type,
            &self.variant,
            self.version,
            self.file_path.clone(),
        )
    }
}

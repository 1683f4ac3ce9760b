//! File-backed record source
//!
//! Reads `<data_dir>/<project>_tasks.json` and
//! `<data_dir>/<project>_published_files.json`, each a JSON array of rows.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetTask, PublishRecord, ShotContext};
use crate::domain::ports::RecordSource;
use crate::error::ShotpackResult;
use crate::infrastructure::fs::LocalFs;

use super::{select_publishes, select_tasks, PublishRow, TaskRow};

pub const TASKS_FILE_SUFFIX: &str = "_tasks.json";
pub const PUBLISHES_FILE_SUFFIX: &str = "_published_files.json";

#[derive(Debug, Clone)]
pub struct FsRecordSource {
    data_dir: PathBuf,
    fs: LocalFs,
}

impl FsRecordSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_path(&self, project: &str) -> PathBuf {
        self.data_dir.join(format!("{project}{TASKS_FILE_SUFFIX}"))
    }

    pub fn publishes_path(&self, project: &str) -> PathBuf {
        self.data_dir.join(format!("{project}{PUBLISHES_FILE_SUFFIX}"))
    }

    fn read_rows<T: serde::de::DeserializeOwned>(&self, path: &Path) -> ShotpackResult<Vec<T>> {
        let content = self.fs.read(path)?;
        let rows: Vec<T> = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "read record table");
        Ok(rows)
    }
}

impl RecordSource for FsRecordSource {
    fn load_shot_assets(&self, context: &ShotContext) -> ShotpackResult<Vec<AssetTask>> {
        let rows: Vec<TaskRow> = self.read_rows(&self.tasks_path(context.project()))?;
        Ok(select_tasks(&rows, context))
    }

    fn load_publishes_for_assets(
        &self,
        context: &ShotContext,
        assets: &BTreeSet<String>,
        max_versions: usize,
    ) -> ShotpackResult<Vec<PublishRecord>> {
        if assets.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<PublishRow> = self.read_rows(&self.publishes_path(context.project()))?;
        Ok(select_publishes(&rows, context, assets, max_versions))
    }
}

//! Local File System Implementation
//!
//! Reads backing files for the record source and config, and writes
//! manifests and sample data atomically.

use std::io::Write;
use std::path::Path;

use crate::error::{ShotpackError, ShotpackResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Read a file, mapping a missing file to [`ShotpackError::NotFound`].
    pub fn read(&self, path: &Path) -> ShotpackResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ShotpackError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ShotpackError::Io(e),
        })
    }

    /// Write content atomically (temp file in the same directory + rename).
    ///
    /// Parent directories are created as needed.
    pub fn write_atomic(&self, path: &Path, content: &str) -> ShotpackResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| ShotpackError::Io(e.error))?;
        Ok(())
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

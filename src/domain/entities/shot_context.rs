//! ShotContext entity - identity of the unit of work a package is built for.

use serde::{Deserialize, Serialize};

/// Project/sequence/shot identity plus the normalized step code.
///
/// Only the context resolver constructs a `ShotContext`, so every instance
/// carries non-empty fields and a lower-cased step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotContext {
    project: String,
    sequence: String,
    shot: String,
    step_code: String,
}

impl ShotContext {
    pub(crate) fn new(
        project: impl Into<String>,
        sequence: impl Into<String>,
        shot: impl Into<String>,
        step_code: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            sequence: sequence.into(),
            shot: shot.into(),
            step_code: step_code.into(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn shot(&self) -> &str {
        &self.shot
    }

    /// Lower-cased step code (always `light` for a resolved context)
    pub fn step_code(&self) -> &str {
        &self.step_code
    }
}

impl std::fmt::Display for ShotContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{} ({})",
            self.project, self.sequence, self.shot, self.step_code
        )
    }
}

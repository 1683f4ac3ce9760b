//! Error types for Shotpack
//!
//! Uses `thiserror` for library errors. The taxonomy is closed: a run fails
//! either because the shot context is wrong, because the selected data
//! violates the filter policy, or because a backing resource is missing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Shotpack operations
pub type ShotpackResult<T> = Result<T, ShotpackError>;

/// Malformed or disallowed shot/task identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// One or more identity fields were empty
    #[error("missing required context keys: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// Step code is not a lighting step
    #[error("tool is restricted to lighting tasks, received step_code '{step}'")]
    NotLighting { step: String },

    /// Step code differs from the configured allowed step
    #[error("configured allowed step is '{allowed}', got '{step}'")]
    StepNotAllowed { allowed: String, step: String },
}

/// Integrity violations found while selecting and resolving publishes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("selected assets do not exist in shot context: {}", format_list(.missing))]
    UnknownAssets { missing: Vec<String> },

    #[error(
        "invalid publish type for {asset}:{component}. Got {publish_type}, allowed={}",
        format_list(.allowed)
    )]
    PublishTypeNotAllowed {
        asset: String,
        component: String,
        publish_type: String,
        allowed: Vec<String>,
    },

    #[error(
        "invalid file extension for publish {}. Expected one of {}",
        .path.display(),
        format_list(.allowed)
    )]
    ExtensionNotAllowed { path: PathBuf, allowed: Vec<String> },

    #[error("asset {asset} missing required components: {}", format_list(.missing))]
    MissingComponents { asset: String, missing: Vec<String> },

    #[error("unknown variant key: {key}")]
    UnknownVariantKey { key: String },

    #[error(
        "invalid variant value '{value}' for key={key}. Allowed={}",
        format_list(.allowed)
    )]
    InvalidVariantValue {
        key: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Main error type for Shotpack operations
#[derive(Error, Debug)]
pub enum ShotpackError {
    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A backing file (database export, config) does not exist
    #[error("resource not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShotpackError {
    /// Whether this failure was caused by bad input rather than infrastructure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Context(_) | Self::Validation(_))
    }
}

fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

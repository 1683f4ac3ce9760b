//! Context resolver
//!
//! Validates and normalizes the (project, sequence, shot, step) identity.

use crate::domain::entities::ShotContext;
use crate::error::ContextError;

/// The only step code this tool builds packages for.
pub const LIGHTING_STEP: &str = "light";

/// Build a [`ShotContext`], rejecting empty fields and non-lighting steps.
///
/// All empty fields are reported at once. The step is compared
/// case-insensitively and stored lower-cased.
pub fn resolve_shot_context(
    project: &str,
    sequence: &str,
    shot: &str,
    step_code: &str,
) -> Result<ShotContext, ContextError> {
    let fields = [
        ("project", project),
        ("sequence", sequence),
        ("shot", shot),
        ("step_code", step_code),
    ];
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ContextError::MissingFields { fields: missing });
    }

    let step = step_code.to_lowercase();
    if step != LIGHTING_STEP {
        return Err(ContextError::NotLighting {
            step: step_code.to_string(),
        });
    }

    Ok(ShotContext::new(project, sequence, shot, step))
}

/// Enforce the configured allowed step on an already resolved context.
pub fn ensure_allowed_step(context: &ShotContext, allowed_step: &str) -> Result<(), ContextError> {
    if context.step_code() != allowed_step.to_lowercase() {
        return Err(ContextError::StepNotAllowed {
            allowed: allowed_step.to_string(),
            step: context.step_code().to_string(),
        });
    }
    Ok(())
}

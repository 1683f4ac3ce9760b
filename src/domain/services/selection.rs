//! Selection validator
//!
//! Confirms every requested asset is known for the shot.

use std::collections::BTreeSet;

use crate::error::ValidationError;

/// Fail with the sorted list of requested assets missing from `available`.
pub fn validate_asset_selection(
    requested: &BTreeSet<String>,
    available: &BTreeSet<String>,
) -> Result<(), ValidationError> {
    let missing: Vec<String> = requested.difference(available).cloned().collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnknownAssets { missing })
    }
}

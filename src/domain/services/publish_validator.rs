//! Publish validator
//!
//! Checks each candidate publish against the type/extension policy, then
//! gates every asset on having all required components.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::config::FilterConfig;
use crate::domain::entities::PublishRecord;
use crate::error::ValidationError;

/// Validate records against the policy.
///
/// Only assets that appear in `records` are checked for completeness.
pub fn validate_publishes(
    records: &[PublishRecord],
    policy: &FilterConfig,
) -> Result<(), ValidationError> {
    validate_publishes_for(records, &BTreeSet::new(), policy)
}

/// Validate records and require completeness for every `requested` asset,
/// including requested assets that have no records at all.
pub fn validate_publishes_for(
    records: &[PublishRecord],
    requested: &BTreeSet<String>,
    policy: &FilterConfig,
) -> Result<(), ValidationError> {
    let mut present: BTreeMap<&str, BTreeSet<&str>> = requested
        .iter()
        .map(|asset| (asset.as_str(), BTreeSet::new()))
        .collect();

    for record in records {
        validate_single_publish(record, policy)?;
        present
            .entry(record.asset_name.as_str())
            .or_default()
            .insert(record.step.as_str());
    }

    for (asset, steps) in &present {
        let missing: Vec<String> = policy
            .required_components
            .iter()
            .filter(|component| !steps.contains(component.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingComponents {
                asset: asset.to_string(),
                missing,
            });
        }
    }

    Ok(())
}

fn validate_single_publish(
    record: &PublishRecord,
    policy: &FilterConfig,
) -> Result<(), ValidationError> {
    let allowed_types = policy.publish_types_for(&record.step);
    if !allowed_types.contains(&record.publish_type) {
        return Err(ValidationError::PublishTypeNotAllowed {
            asset: record.asset_name.clone(),
            component: record.step.clone(),
            publish_type: record.publish_type.clone(),
            allowed: allowed_types.to_vec(),
        });
    }

    let allowed_extensions = policy.extensions_for(&record.publish_type);
    if !has_allowed_extension(record.file_path(), allowed_extensions) {
        return Err(ValidationError::ExtensionNotAllowed {
            path: record.file_path.clone(),
            allowed: allowed_extensions.to_vec(),
        });
    }

    Ok(())
}

/// Case-insensitive suffix match; handles multi-part suffixes like `.bgeo.sc`.
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    let normalized = path.to_string_lossy().to_lowercase();
    extensions
        .iter()
        .any(|ext| normalized.ends_with(&ext.to_lowercase()))
}

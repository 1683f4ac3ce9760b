//! Variant resolver
//!
//! Collapses every (asset, component) group of publishes to one record:
//! the newest record carrying the desired quality variant, or the newest
//! record of any variant when the desired one was never published.

use std::collections::BTreeMap;

use crate::config::FilterConfig;
use crate::domain::entities::PublishRecord;
use crate::error::ValidationError;

/// Variant axis whose value is matched against `PublishRecord::variant`.
pub const QUALITY_AXIS: &str = "quality";

/// A group where the desired quality was missing and the newest record of
/// another variant was taken instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantFallback {
    pub asset_name: String,
    pub step: String,
    pub requested: Option<String>,
    pub substituted: String,
}

/// Outcome of variant resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantResolution {
    /// One record per (asset, component), sorted by that pair
    pub records: Vec<PublishRecord>,
    pub fallbacks: Vec<VariantFallback>,
}

/// Merge defaults with overrides (overrides win) and check every key/value
/// against the configured axes.
pub fn effective_selection(
    overrides: &BTreeMap<String, String>,
    policy: &FilterConfig,
) -> Result<BTreeMap<String, String>, ValidationError> {
    let mut selection = policy.default_variant.clone();
    selection.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

    for (key, value) in &selection {
        let allowed = policy
            .variant_values(key)
            .ok_or_else(|| ValidationError::UnknownVariantKey { key: key.clone() })?;
        if !allowed.contains(value) {
            return Err(ValidationError::InvalidVariantValue {
                key: key.clone(),
                value: value.clone(),
                allowed: allowed.to_vec(),
            });
        }
    }

    Ok(selection)
}

/// Pick exactly one record per (asset, component).
pub fn resolve_variants(
    records: &[PublishRecord],
    overrides: &BTreeMap<String, String>,
    policy: &FilterConfig,
) -> Result<Vec<PublishRecord>, ValidationError> {
    resolve_variants_detailed(records, overrides, policy).map(|r| r.records)
}

/// Like [`resolve_variants`], also reporting which groups fell back.
pub fn resolve_variants_detailed(
    records: &[PublishRecord],
    overrides: &BTreeMap<String, String>,
    policy: &FilterConfig,
) -> Result<VariantResolution, ValidationError> {
    let selection = effective_selection(overrides, policy)?;
    let desired = selection.get(QUALITY_AXIS).map(String::as_str);

    let mut grouped: BTreeMap<(&str, &str), Vec<&PublishRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry((record.asset_name.as_str(), record.step.as_str()))
            .or_default()
            .push(record);
    }

    let mut resolution = VariantResolution::default();
    for ((asset_name, step), group) in grouped {
        let matching = group
            .iter()
            .filter(|r| Some(r.variant.as_str()) == desired)
            .max_by_key(|r| r.version);

        let winner = match matching {
            Some(record) => *record,
            None => {
                let Some(newest) = group.iter().max_by_key(|r| r.version) else {
                    continue;
                };
                tracing::warn!(
                    asset = asset_name,
                    component = step,
                    requested = desired.unwrap_or("<none>"),
                    substituted = %newest.variant,
                    version = newest.version,
                    "desired variant not published, using latest available"
                );
                resolution.fallbacks.push(VariantFallback {
                    asset_name: asset_name.to_string(),
                    step: step.to_string(),
                    requested: desired.map(str::to_string),
                    substituted: newest.variant.clone(),
                });
                *newest
            }
        };
        resolution.records.push(winner.clone());
    }

    Ok(resolution)
}

//! Compound builder
//!
//! Groups resolved publishes into per-(asset, variant) bundles.

use std::collections::BTreeMap;

use crate::domain::entities::{Compound, PublishRecord};

/// One compound per distinct (asset, record variant), sorted by that pair.
///
/// Components keep the order they appear in `resolved`. Inputs are assumed
/// to be validated and resolved already.
pub fn build_compounds(resolved: Vec<PublishRecord>) -> Vec<Compound> {
    let mut grouped: BTreeMap<(String, String), Vec<PublishRecord>> = BTreeMap::new();
    for record in resolved {
        grouped
            .entry((record.asset_name.clone(), record.variant.clone()))
            .or_default()
            .push(record);
    }

    grouped
        .into_iter()
        .map(|((asset_name, variant), components)| Compound::new(asset_name, variant, components))
        .collect()
}

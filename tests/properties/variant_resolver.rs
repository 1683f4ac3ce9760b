//! Property tests for variant resolution.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use shotpack::domain::services::resolve_variants_detailed;
use shotpack::{FilterConfig, PublishRecord};

const ASSETS: [&str; 3] = ["carA", "treeA", "rockA"];
const STEPS: [&str; 3] = ["geo", "material", "rig"];
const QUALITIES: [&str; 3] = ["low", "medium", "high"];

fn record_strategy() -> impl Strategy<Value = PublishRecord> {
    (0..ASSETS.len(), 0..STEPS.len(), 0..QUALITIES.len(), 1u32..50).prop_map(
        |(asset, step, quality, version)| {
            PublishRecord::new(
                ASSETS[asset],
                STEPS[step],
                "usd",
                QUALITIES[quality],
                version,
                format!("/show/{}/{}/v{:03}.usd", ASSETS[asset], STEPS[step], version),
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly one record per (asset, component) group, sorted by that pair.
    #[test]
    fn property_one_record_per_group(
        records in proptest::collection::vec(record_strategy(), 0..40),
        quality in 0..QUALITIES.len(),
    ) {
        let overrides = BTreeMap::from([("quality".to_string(), QUALITIES[quality].to_string())]);
        let resolution = resolve_variants_detailed(&records, &overrides, &FilterConfig::default())
            .unwrap();

        let groups: BTreeSet<(String, String)> = records
            .iter()
            .map(|r| (r.asset_name.clone(), r.step.clone()))
            .collect();
        let resolved: Vec<(String, String)> = resolution
            .records
            .iter()
            .map(|r| (r.asset_name.clone(), r.step.clone()))
            .collect();

        prop_assert_eq!(resolved, groups.into_iter().collect::<Vec<_>>());
    }

    /// PROPERTY: the winner is the newest matching record, else the newest overall.
    #[test]
    fn property_winner_is_newest_match_or_newest_overall(
        records in proptest::collection::vec(record_strategy(), 1..40),
        quality in 0..QUALITIES.len(),
    ) {
        let desired = QUALITIES[quality];
        let overrides = BTreeMap::from([("quality".to_string(), desired.to_string())]);
        let resolution = resolve_variants_detailed(&records, &overrides, &FilterConfig::default())
            .unwrap();

        for winner in &resolution.records {
            let group: Vec<&PublishRecord> = records
                .iter()
                .filter(|r| r.asset_name == winner.asset_name && r.step == winner.step)
                .collect();
            let best_match = group.iter().filter(|r| r.variant == desired).map(|r| r.version).max();
            let best_any = group.iter().map(|r| r.version).max();

            match best_match {
                Some(version) => {
                    prop_assert_eq!(&winner.variant, desired);
                    prop_assert_eq!(winner.version, version);
                }
                None => {
                    prop_assert_eq!(Some(winner.version), best_any);
                    prop_assert!(resolution
                        .fallbacks
                        .iter()
                        .any(|f| f.asset_name == winner.asset_name && f.step == winner.step));
                }
            }
        }
    }

    /// PROPERTY: arbitrary override keys/values never panic; unknown ones are errors.
    #[test]
    fn property_arbitrary_overrides_never_panic(
        records in proptest::collection::vec(record_strategy(), 0..10),
        key in "[a-z]{1,8}",
        value in "[a-zA-Z]{1,8}",
    ) {
        let policy = FilterConfig::default();
        let overrides = BTreeMap::from([(key.clone(), value.clone())]);
        let result = resolve_variants_detailed(&records, &overrides, &policy);

        let valid = policy
            .variant_values(&key)
            .map(|allowed| allowed.contains(&value))
            .unwrap_or(false);
        prop_assert_eq!(result.is_ok(), valid);
    }
}

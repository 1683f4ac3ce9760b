//! Property tests for asset selection.

use std::collections::BTreeSet;

use proptest::prelude::*;

use shotpack::domain::services::validate_asset_selection;
use shotpack::ValidationError;

fn names() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-dA-D][a-z]{0,3}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selection fails iff some requested name is unavailable, naming
    /// exactly the missing names in sorted order.
    #[test]
    fn property_selection_names_exactly_the_missing(
        requested in names(),
        available in names(),
    ) {
        let expected: Vec<String> = requested.difference(&available).cloned().collect();

        match validate_asset_selection(&requested, &available) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(ValidationError::UnknownAssets { missing }) => prop_assert_eq!(missing, expected),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

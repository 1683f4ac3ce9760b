//! Scenario: Lighter prepares a shot
//!
//! Journey: A lighting artist seeds the demo shot, builds a preview package
//! at medium quality, then writes the final high-quality manifest.
//!
//! Steps:
//! 1. Seed the record tables
//! 2. Typo an asset name, get a clear error and no manifest
//! 3. Build at medium quality, see the rig fall back to high
//! 4. Build at high quality with a manifest for the scene host
//!
//! Success Criteria:
//! - Errors name the offending asset and exit with code 2
//! - The manifest holds exactly one record per asset component

use crate::common::*;

#[test]
fn scenario_lighter_builds_preview_then_final() {
    // Step 1
    let env = TestEnv::seeded();

    // Step 2
    let result = env.build(&["carA", "treeB"], &["--manifest", "final.json"]);
    assert_eq!(
        result.exit_code, 2,
        "Step 2: typo should be a validation error.\nstderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("treeB"));
    assert!(
        !env.path("final.json").exists(),
        "Step 2: no manifest may be written for a failed build"
    );

    // Step 3
    let result = env.build(&["carA", "treeA"], &["--variant-quality", "medium", "--json"]);
    assert!(result.success, "Step 3 failed.\nstderr: {}", result.stderr);
    let preview = result.json();
    assert_eq!(preview["metadata"]["compound_count"], 4);

    // Step 4
    let result = env.build(
        &["carA", "treeA"],
        &["--variant-quality", "high", "--manifest", "final.json"],
    );
    assert!(result.success, "Step 4 failed.\nstderr: {}", result.stderr);
    assert!(result.stdout.contains("Loader: manifest"));

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(env.path("final.json")).unwrap()).unwrap();
    let compounds = manifest["compounds"].as_array().unwrap();
    assert_eq!(compounds.len(), 2);
    for compound in compounds {
        let steps: Vec<&str> = compound["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["step"].as_str().unwrap())
            .collect();
        assert_eq!(steps, vec!["geo", "material", "rig"]);
    }
}

#[test]
fn scenario_studio_policy_requires_only_geometry() {
    let env = TestEnv::seeded();
    env.write_user_config(
        "required_components: [geo]\nallowed_publish_types:\n  geo: [usd]\n  material: [usd]\n  rig: [abc]\n",
    );

    let result = env.build(&["treeA"], &["--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let json = result.json();
    assert_eq!(json["compounds"][0]["components"].as_array().unwrap().len(), 3);
}

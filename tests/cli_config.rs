//! `shotpack config` prints the effective filter policy.

mod common;

use common::TestEnv;

#[test]
fn test_config_prints_builtin_defaults() {
    let env = TestEnv::new();

    let result = env.run(&["config"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("# source: built-in defaults"));
    assert!(result.stdout.contains("allowed_step: light"));
    assert!(result.stdout.contains("max_versions_per_component: 3"));
}

#[test]
fn test_config_prefers_explicit_file_over_user_config() {
    let env = TestEnv::new();
    env.write_user_config("max_versions_per_component: 5\n");
    let explicit = env.write_file("filters.toml", "max_versions_per_component = 7\n");

    let result = env.run(&["config", "--config", explicit.to_str().unwrap()]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("filters.toml"));
    assert!(result.stdout.contains("max_versions_per_component: 7"));
}

#[test]
fn test_config_reads_user_config() {
    let env = TestEnv::new();
    env.write_user_config("max_versions_per_component: 5\n");

    let result = env.run(&["config"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("max_versions_per_component: 5"));
}

#[test]
fn test_config_env_override_applies() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["config"], &[("SHOTPACK_MAX_VERSIONS", "9")]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("max_versions_per_component: 9"));
}

#[test]
fn test_config_rejects_zero_max_versions() {
    let env = TestEnv::new();
    env.write_file("filters.yaml", "max_versions_per_component: 0\n");

    let result = env.run(&["config", "--config", "filters.yaml"]);

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stderr
        .contains("max_versions_per_component must be at least 1"));
}

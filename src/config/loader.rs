//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShotpackError, ShotpackResult};

use super::types::FilterConfig;

/// Environment variable naming a config file to use when none is passed.
pub const CONFIG_ENV: &str = "SHOTPACK_CONFIG";

/// Environment variable overriding `max_versions_per_component`.
pub const MAX_VERSIONS_ENV: &str = "SHOTPACK_MAX_VERSIONS";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShotpackResult<(FilterConfig, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(ShotpackError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let invalid = |message: String| ShotpackError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let config: FilterConfig = match ConfigFormat::for_path(path) {
        ConfigFormat::Toml => {
            let deserializer = toml::de::Deserializer::new(&content);
            serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| invalid(e.to_string()))?
        }
        ConfigFormat::Yaml if content.trim().is_empty() => FilterConfig::default(),
        ConfigFormat::Yaml => {
            let deserializer = serde_yaml_ng::Deserializer::from_str(&content);
            serde_ignored::deserialize(deserializer, |p| unknown_paths.push(p.to_string()))
                .map_err(|e| invalid(e.to_string()))?
        }
    };
    config.check(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file for this run, if any.
///
/// An explicit path wins, then `SHOTPACK_CONFIG`, then
/// `<config_dir>/shotpack/filters.yaml` when that file exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let user_config = user_config_dir()?.join("shotpack/filters.yaml");
    user_config.exists().then_some(user_config)
}

/// Load from explicit/env/user config, or fall back to built-in defaults.
///
/// A path that was asked for explicitly (flag or env) must exist.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> ShotpackResult<(FilterConfig, Vec<ConfigWarning>)> {
    let (config, warnings) = match resolve_config_path(explicit) {
        Some(path) => load_with_warnings(&path)?,
        None => (FilterConfig::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SHOTPACK_* prefix)
pub fn with_env_overrides(mut config: FilterConfig) -> FilterConfig {
    if let Ok(value) = std::env::var(MAX_VERSIONS_ENV) {
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.max_versions_per_component = n,
            _ => tracing::warn!(
                value = %value,
                "ignoring {} (expected a positive integer)",
                MAX_VERSIONS_ENV
            ),
        }
    }
    config
}

/// Get XDG config directory
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "allowed_step",
        "required_components",
        "allowed_publish_types",
        "allowed_extensions",
        "variants",
        "default_variant",
        "max_versions_per_component",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 3 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

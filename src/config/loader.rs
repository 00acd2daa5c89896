//! Configuration loading and persistence

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::error::ConfigError;
use super::types::{Config, TEMPLATE};
use crate::domain::value_objects::ConfigWarning;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

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

    debug!(path = %path.display(), "config loaded");
    Ok((config, warnings))
}

/// Apply environment variable overrides (HASHDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Result<Config, ConfigError> {
    apply_env_overrides(config, |var| std::env::var(var).ok())
}

/// Apply overrides from an arbitrary variable lookup.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HASHDEPLOY_HOST") {
        config.host = host;
    }

    if let Some(port) = lookup("HASHDEPLOY_PORT") {
        config.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: "HASHDEPLOY_PORT",
            value: port,
        })?;
    }

    if let Some(username) = lookup("HASHDEPLOY_USERNAME") {
        config.username = username;
    }

    if let Some(password) = lookup("HASHDEPLOY_PASSWORD") {
        config.password = password;
    }

    Ok(config)
}

/// Write the template config, refusing to clobber an existing file unless `force`.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, TEMPLATE).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "host",
        "port",
        "username",
        "password",
        "secure",
        "timeout_secs",
        "local_path",
        "remote_path",
        "hash_file",
        "strict_manifest",
        "ignore_patterns",
        "path_mappings",
        "local",
        "remote",
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
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
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

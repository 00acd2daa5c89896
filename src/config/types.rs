//! Configuration types

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{IgnorePatterns, PathMappings, PatternError};

use super::error::ConfigError;

pub const DEFAULT_PORT: u16 = 21;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_HASH_FILE: &str = ".deploy-hashes.json";

/// Deployment configuration (`deploy.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Explicit FTPS (AUTH TLS); false selects plain FTP
    pub secure: bool,
    pub timeout_secs: u64,
    /// Local root, relative to the config file's directory
    pub local_path: PathBuf,
    /// Remote base for unmapped files
    pub remote_path: String,
    /// Manifest location, relative to the local root
    pub hash_file: String,
    /// Keep the previous manifest entry when a transfer fails
    pub strict_manifest: bool,
    pub ignore_patterns: Vec<String>,
    pub path_mappings: Vec<MappingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
            secure: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            local_path: PathBuf::from("."),
            remote_path: "/".to_string(),
            hash_file: DEFAULT_HASH_FILE.to_string(),
            strict_manifest: false,
            ignore_patterns: Vec::new(),
            path_mappings: Vec::new(),
        }
    }
}

/// One `[[path_mappings]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingConfig {
    /// Local relative path or glob
    pub local: String,
    /// Remote destination
    pub remote: String,
}

impl Config {
    /// Host and username are required before connecting.
    pub fn require_credentials(&self) -> Result<(), ConfigError> {
        for (field, value) in [("host", &self.host), ("username", &self.username)] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field });
            }
        }
        Ok(())
    }

    /// Local root resolved against the directory holding the config file.
    pub fn local_root(&self, config_dir: &Path) -> PathBuf {
        if self.local_path.is_absolute() {
            self.local_path.clone()
        } else {
            config_dir.join(&self.local_path)
        }
    }

    /// Remote targets must be absolute: directory probes move the session's
    /// working directory, so relative targets would resolve against it.
    pub fn require_absolute_remotes(&self) -> Result<(), ConfigError> {
        let settings = std::iter::once(("remote_path".to_string(), &self.remote_path)).chain(
            self.path_mappings
                .iter()
                .map(|m| (format!("path_mappings remote for '{}'", m.local), &m.remote)),
        );
        for (setting, value) in settings {
            if !value.starts_with('/') {
                return Err(ConfigError::RelativeRemotePath {
                    setting,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn compile_ignore_patterns(&self) -> Result<IgnorePatterns, PatternError> {
        IgnorePatterns::new(&self.ignore_patterns)
    }

    pub fn compile_path_mappings(&self) -> Result<PathMappings, PatternError> {
        PathMappings::new(
            self.path_mappings
                .iter()
                .map(|m| (m.local.as_str(), m.remote.as_str())),
        )
    }
}

/// Template written by `hashdeploy init`
pub const TEMPLATE: &str = r#"# hashdeploy configuration

# Connection
host = "example.com"
port = 21
username = "your-username"
password = "your-password"
# Explicit FTPS; set to false for plain FTP
secure = true
timeout_secs = 5

# Local directory to deploy, relative to this file
local_path = "."
# Remote directory for files no mapping rule claims
remote_path = "/"

# Manifest of deployed content hashes, relative to local_path
hash_file = ".deploy-hashes.json"

# Keep failed transfers pending for the next run
strict_manifest = false

# Files and folders to skip (glob patterns, matched at any depth)
ignore_patterns = [
    ".git",
    ".gitignore",
    "node_modules",
    "vendor",
    "deploy.toml",
    "*.log",
    "tests",
    "README.md",
]

# Where specific paths are uploaded. When any rule is present, only
# files matching a rule are deployed.
#
# [[path_mappings]]
# local = "public/*"
# remote = "/public_html"
#
# [[path_mappings]]
# local = "src/*"
# remote = "/private_html/src"
#
# [[path_mappings]]
# local = "index.php"
# remote = "/public_html/index.php"
"#;

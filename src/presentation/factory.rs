//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::{DeployOptions, DeployUseCase};
use crate::config::Config;
use crate::domain::services::{ChangeDetector, PathMapper};
use crate::error::DeployResult;
use crate::infrastructure::{FtpConnector, FtpSettings, JsonManifestRepository};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<JsonManifestRepository, FtpConnector>;

/// Create a deploy use case from a loaded configuration.
///
/// `config_path` is the file the configuration came from. The local root
/// is resolved against its directory, and the file itself is never
/// deployed.
pub fn create_deploy_use_case(
    config: &Config,
    config_path: &Path,
    options: DeployOptions,
) -> DeployResult<ConcreteDeployUseCase> {
    config.require_absolute_remotes()?;
    let ignore = config.compile_ignore_patterns()?;
    let mappings = config.compile_path_mappings()?;

    let config_path = absolute(config_path);
    let config_dir = config_path.parent().unwrap_or(Path::new("/"));
    let root = config.local_root(config_dir);
    let root = root.canonicalize().unwrap_or(root);

    let mut detector = ChangeDetector::new(
        root,
        ignore,
        mappings.clone(),
        &config.hash_file,
        JsonManifestRepository::new(),
    );
    detector.exclude_path(&config_path);

    let mapper = PathMapper::new(mappings, config.remote_path.as_str());
    let connector = FtpConnector::new(ftp_settings(config));

    Ok(DeployUseCase::new(detector, mapper, connector, options))
}

/// Connection settings taken from the configuration
pub fn ftp_settings(config: &Config) -> FtpSettings {
    FtpSettings {
        host: config.host.clone(),
        port: config.port,
        username: config.username.clone(),
        password: config.password.clone(),
        secure: config.secure,
        timeout: Duration::from_secs(config.timeout_secs),
    }
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MappingConfig};
    use crate::error::DeployError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn config_file_is_excluded_from_the_tree() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("deploy.toml"), "host = \"h\"\n").unwrap();
        fs::write(dir.path().join("index.html"), "home").unwrap();

        let use_case = create_deploy_use_case(
            &Config::default(),
            &dir.path().join("deploy.toml"),
            DeployOptions::new(),
        )
        .unwrap();

        let detection = use_case.detector().detect().unwrap();
        assert_eq!(detection.changes.changed, vec!["index.html"]);
    }

    #[test]
    fn local_path_is_relative_to_the_config_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("site")).unwrap();
        fs::write(dir.path().join("site/index.html"), "home").unwrap();
        fs::write(dir.path().join("deploy.toml"), "").unwrap();

        let config = Config {
            local_path: "site".into(),
            hash_file: "state/hashes.json".to_string(),
            ..Config::default()
        };
        let use_case =
            create_deploy_use_case(&config, &dir.path().join("deploy.toml"), DeployOptions::new())
                .unwrap();

        let root = dir.path().canonicalize().unwrap().join("site");
        assert_eq!(use_case.detector().root(), root);
        assert_eq!(
            use_case.detector().manifest_path(),
            root.join("state/hashes.json")
        );
    }

    #[test]
    fn invalid_mapping_pattern_is_reported() {
        let dir = tempdir().unwrap();
        let config = Config {
            path_mappings: vec![MappingConfig {
                local: "src/[".to_string(),
                remote: "/src".to_string(),
            }],
            ..Config::default()
        };

        let err = create_deploy_use_case(
            &config,
            &dir.path().join("deploy.toml"),
            DeployOptions::new(),
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("src/["));
    }

    #[test]
    fn relative_remote_base_is_rejected() {
        let dir = tempdir().unwrap();
        let config = Config {
            remote_path: "public_html".to_string(),
            ..Config::default()
        };

        let err = create_deploy_use_case(
            &config,
            &dir.path().join("deploy.toml"),
            DeployOptions::new(),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            DeployError::Config(ConfigError::RelativeRemotePath { .. })
        ));
    }

    #[test]
    fn settings_follow_config() {
        let config = Config {
            host: "ftp.example.com".to_string(),
            port: 2121,
            secure: false,
            timeout_secs: 9,
            ..Config::default()
        };
        let settings = ftp_settings(&config);
        assert_eq!(settings.host, "ftp.example.com");
        assert_eq!(settings.port, 2121);
        assert!(!settings.secure);
        assert_eq!(settings.timeout, Duration::from_secs(9));
    }
}

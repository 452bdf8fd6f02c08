use crate::error::{InstallerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct InstallConfig {
    /// Model version to install when none is given on the command line
    #[serde(default = "default_version")]
    pub version: String,
    /// Explicit versions file path; when unset the installer looks next
    /// to the executable, then in the working directory
    pub versions_file: Option<PathBuf>,
    /// "unprivileged" (per-user) or "privileged" (system-wide)
    #[serde(default = "default_mode")]
    pub mode: String,
}

// Default value functions
fn default_version() -> String {
    "3.7.0".to_string()
}
fn default_mode() -> String {
    "unprivileged".to_string()
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            versions_file: None,
            mode: default_mode(),
        }
    }
}

impl Config {
    /// Load config from disk, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            InstallerError::Config(format!("failed to parse '{}': {e}", path.display()))
        })
    }

    /// Config file location, if a config directory exists on this system
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("corenlp-models").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.install.version, "3.7.0");
        assert_eq!(config.install.mode, "unprivileged");
        assert!(config.install.versions_file.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [install]
            version = "3.6.0"
            "#,
        )
        .unwrap();
        assert_eq!(config.install.version, "3.6.0");
        assert_eq!(config.install.mode, "unprivileged");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.install.version, "3.7.0");
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [install]
            version = "3.7.0"
            versions_file = "/opt/corenlp/versions.json"
            mode = "privileged"
            "#,
        )
        .unwrap();
        assert_eq!(config.install.mode, "privileged");
        assert_eq!(
            config.install.versions_file.as_deref(),
            Some(std::path::Path::new("/opt/corenlp/versions.json"))
        );
    }
}

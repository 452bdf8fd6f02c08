use crate::error::{InstallerError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the installer looks for when no versions file is configured
pub const VERSIONS_FILE_NAME: &str = "versions.json";

/// A downloadable archive for one (model, version) pair
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ModelArchive {
    pub url: String,
    pub md5: String,
}

impl ModelArchive {
    /// Target file name: the last non-empty path segment of the download URL
    pub fn file_name(&self) -> Result<String> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| InstallerError::Manifest(format!("invalid url '{}': {e}", self.url)))?;
        parsed
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .next_back()
            .filter(|s| *s != "." && *s != "..")
            .map(ToString::to_string)
            .ok_or_else(|| {
                InstallerError::Manifest(format!("url '{}' has no usable file name", self.url))
            })
    }
}

/// Mapping from model identifier to version identifier to archive
///
/// Mirrors the versions file shipped with the CoreNLP sources:
/// `{ "<model>": { "<version>": { "url": "...", "md5": "..." } } }`.
/// Validation is lazy: entries are only checked when a selection
/// resolves them, not eagerly for the whole file.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Versions {
    models: BTreeMap<String, BTreeMap<String, ModelArchive>>,
}

impl Versions {
    /// Load a versions file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            InstallerError::Manifest(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parse versions file content
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| InstallerError::Manifest(format!("failed to parse versions file: {e}")))
    }

    /// All model identifiers, sorted
    #[must_use]
    pub fn model_ids(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Versions recorded for a model, sorted
    #[must_use]
    pub fn versions_of(&self, model: &str) -> Vec<&str> {
        self.models
            .get(model)
            .map(|by_version| by_version.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Resolve the archive for a (model, version) pair
    pub fn resolve(&self, model: &str, version: &str) -> Result<&ModelArchive> {
        self.models
            .get(model)
            .and_then(|by_version| by_version.get(version))
            .ok_or_else(|| InstallerError::MissingVersion {
                model: model.to_string(),
                version: version.to_string(),
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Default versions file location: next to the executable, falling back
/// to the current directory
#[must_use]
pub fn default_versions_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(VERSIONS_FILE_NAME);
            if candidate.exists() {
                return candidate;
            }
        }
    }
    PathBuf::from(VERSIONS_FILE_NAME)
}

use crate::error::{InstallerError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Install location choice: per-user or system-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallMode {
    #[default]
    Unprivileged,
    Privileged,
}

impl InstallMode {
    /// Resolve the install directory for this mode and model version
    pub fn install_dir(self, version: &str) -> Result<PathBuf> {
        match self {
            Self::Unprivileged => unprivileged_dir(version),
            Self::Privileged => Ok(privileged_dir(version)),
        }
    }
}

impl FromStr for InstallMode {
    type Err = InstallerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unprivileged" => Ok(Self::Unprivileged),
            "privileged" => Ok(Self::Privileged),
            other => Err(InstallerError::Config(format!(
                "unknown install mode '{other}' (expected 'unprivileged' or 'privileged')"
            ))),
        }
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unprivileged => write!(f, "unprivileged"),
            Self::Privileged => write!(f, "privileged"),
        }
    }
}

/// Per-user install directory: `$HOME/CoreNLP-models-{version}`
pub fn unprivileged_dir(version: &str) -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| InstallerError::Config("could not determine home directory".to_string()))?;
    Ok(home.join(format!("CoreNLP-models-{version}")))
}

/// System-wide install directory, by OS family
#[must_use]
pub fn privileged_dir(version: &str) -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        PathBuf::from(format!("/Library/CoreNLP-models-{version}"))
    }
    #[cfg(target_os = "windows")]
    {
        PathBuf::from(format!("C:\\Program Files\\CoreNLP-models-{version}"))
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(format!("/usr/share/lib/corenlp-models-{version}"))
    }
}

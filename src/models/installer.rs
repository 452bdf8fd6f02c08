use crate::error::{InstallerError, Result};
use crate::models::checksum;
use crate::models::download;
use crate::models::manifest::{ModelArchive, Versions};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What the user picked: which models, which version, and where to put them.
/// Built once by the presentation layer and consumed by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub models: BTreeSet<String>,
    pub version: String,
    pub target_dir: PathBuf,
}

/// Per-model outcome of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
}

/// Fetch-and-verify executor over a loaded versions file
pub struct Installer {
    versions: Versions,
}

impl Installer {
    #[must_use]
    pub fn new(versions: Versions) -> Self {
        Self { versions }
    }

    /// Install every model in the selection, sequentially.
    ///
    /// Validates the whole selection against the versions file before any
    /// network activity: one missing (model, version) entry aborts the
    /// batch with nothing downloaded. For each model an existing target
    /// file with a matching checksum skips the download; a mismatch is
    /// logged and the file is overwritten by a fresh fetch, which is then
    /// verified itself.
    pub fn install(&self, selection: &Selection) -> Result<InstallReport> {
        let resolved = self.validate(selection)?;

        fs::create_dir_all(&selection.target_dir)?;

        let mut report = InstallReport::default();
        for (model, archive) in resolved {
            let file_name = archive.file_name()?;
            let target = selection.target_dir.join(&file_name);

            if target.exists() {
                tracing::info!(
                    "validating MD5 checksum of existing file '{}'",
                    target.display()
                );
                let actual = checksum::md5_path(&target)?;
                if actual == archive.md5 {
                    tracing::info!("checksum of '{}' matches, skipping download", target.display());
                    report.skipped.push(model.to_string());
                    continue;
                }
                tracing::warn!(
                    "checksum of existing file '{}' is {actual}, expected {}, downloading again",
                    target.display(),
                    archive.md5
                );
            }

            download::fetch(&archive.url, &target)?;
            self.verify_fresh(&target, archive)?;
            report.downloaded.push(model.to_string());
        }

        tracing::info!("finished all installations");
        Ok(report)
    }

    /// Fail-fast pre-pass: resolve every selected model before touching
    /// the network
    fn validate<'a>(&'a self, selection: &'a Selection) -> Result<Vec<(&'a str, &'a ModelArchive)>> {
        selection
            .models
            .iter()
            .map(|model| {
                self.versions
                    .resolve(model, &selection.version)
                    .map(|archive| (model.as_str(), archive))
            })
            .collect()
    }

    /// Verify a freshly downloaded file; on mismatch remove it so a corrupt
    /// archive never survives the run
    fn verify_fresh(&self, target: &Path, archive: &ModelArchive) -> Result<()> {
        let actual = checksum::md5_path(target)?;
        if actual != archive.md5 {
            fs::remove_file(target)?;
            return Err(InstallerError::ChecksumMismatch {
                path: target.display().to_string(),
                expected: archive.md5.clone(),
                actual,
            });
        }
        Ok(())
    }
}

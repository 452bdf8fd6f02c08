use crate::error::{InstallerError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Blocking fetch of `url` into `dest`, overwriting any stale content.
///
/// Streams the response body straight to disk with a progress bar so
/// multi-gigabyte model jars never sit in memory. Returns the number of
/// bytes written.
pub fn fetch(url: &str, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    tracing::info!("started download from '{url}'");

    let response = reqwest::blocking::get(url)
        .map_err(|e| InstallerError::Download(format!("GET {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InstallerError::Download(format!("GET {url}: HTTP {status}")));
    }

    let pb = progress_bar(response.content_length());
    let mut reader = pb.wrap_read(response);
    let mut file = File::create(dest)?;

    let written = io::copy(&mut reader, &mut file)
        .map_err(|e| InstallerError::Download(format!("download from '{url}' failed: {e}")))?;
    pb.finish_and_clear();

    tracing::info!("finished download from '{url}' ({written} bytes)");
    Ok(written)
}

fn progress_bar(content_length: Option<u64>) -> ProgressBar {
    let pb = match content_length {
        Some(len) => ProgressBar::new(len),
        None => ProgressBar::new_spinner(),
    };
    let style = ProgressStyle::with_template(
        "{bar:40} {bytes}/{total_bytes} {bytes_per_sec} eta {eta}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_unreachable_host() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("model.jar");

        // Port 1 on loopback, nothing listens there
        let result = fetch("http://127.0.0.1:1/model.jar", &dest);
        assert!(matches!(result, Err(InstallerError::Download(_))));
    }

    #[test]
    fn test_fetch_creates_parent_dirs_before_failing() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("a/b/model.jar");

        let _ = fetch("http://127.0.0.1:1/model.jar", &dest);
        assert!(dest.parent().unwrap().exists());
    }
}

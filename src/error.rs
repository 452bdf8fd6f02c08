use thiserror::Error;

/// Main error type for the installer
#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("Versions file error: {0}\n\nTroubleshooting:\n- Check the versions file path (--versions-file)\n- Expected JSON shape: {{ \"<model>\": {{ \"<version>\": {{ \"url\": \"...\", \"md5\": \"...\" }} }} }}")]
    Manifest(String),

    #[error("No entry for version {version} of model '{model}' in the versions file\n\nTroubleshooting:\n- List known models and versions: corenlp-models list\n- Pass a different version with --version")]
    MissingVersion { model: String, version: String },

    #[error("Download error: {0}\n\nTroubleshooting:\n- Check internet connection\n- Verify the URL in the versions file\n- Re-run the install; models finished before the failure are kept")]
    Download(String),

    #[error("Checksum mismatch for '{path}': expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Config error: {0}\n\nTroubleshooting:\n- Check config file: ~/.config/corenlp-models/config.toml\n- Run with RUST_LOG=debug for more details")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InstallerError>;

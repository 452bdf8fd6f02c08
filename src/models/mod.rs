pub mod checksum;
pub mod download;
pub mod installer;
pub mod locations;
pub mod manifest;

pub use installer::{InstallReport, Installer, Selection};
pub use locations::InstallMode;
pub use manifest::{ModelArchive, Versions};

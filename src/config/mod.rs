//! Configuration module for the installer
//!
//! Loads config from `<config dir>/corenlp-models/config.toml` (e.g.
//! `~/.config/corenlp-models/config.toml` on Linux). Falls back to
//! embedded defaults if the file doesn't exist. Partial configs are
//! merged with defaults using serde's default attributes.
//!
//! # Example
//!
//! ```no_run
//! use corenlp_models::config::Config;
//!
//! let config = Config::load().expect("Failed to load config");
//! println!("Default version: {}", config.install.version);
//! ```

pub mod schema;

pub use schema::Config;

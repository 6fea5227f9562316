//! Site configuration
//!
//! Settings live in an optional `.velura.toml`:
//!
//! ```toml
//! # Load the catalog from here instead of the built-in one
//! catalog = "data/catalog.toml"
//!
//! [routine]
//! default-time = "evening"
//! default-steps = ["2", "3", "5", "7", "9"]
//! ```
//!
//! A missing file means defaults everywhere.

pub mod file;
pub mod loader;

pub use file::{ConfigFile, RoutineSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The config file exists but could not be read
    #[error("Failed to read {}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`ConfigFile`]
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml_edit::de::Error,
    },

    /// A setting parsed but has an unusable value
    #[error("Invalid setting {field}: {message}")]
    Invalid {
        /// Dotted key of the setting
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The config could not be serialized
    #[error("Failed to serialize config")]
    Serialize(#[from] toml_edit::ser::Error),

    /// The config file could not be written
    #[error("Failed to write {}", path.display())]
    Write {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

//! Command handlers for the velura CLI
//!
//! Each submodule handles one subcommand. Handlers return `anyhow::Result`
//! and print with `println!`; typed failures are wrapped in
//! [`VeluraError`](crate::error::VeluraError) so `main` can pick an exit code.

pub mod catalog;
pub mod completions;
pub mod init;
pub mod quiz;
pub mod routine;

// Re-export command functions for convenient access
pub use catalog::cmd_catalog;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use quiz::cmd_quiz;
pub use routine::cmd_routine;

use anyhow::{Context, Result};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::VeluraError;
use crate::session::Session;

/// Configuration and catalog shared by the subcommands
pub struct Site {
    /// Loaded configuration (defaults when no file exists)
    pub config: ConfigFile,
    /// Loaded catalog
    pub catalog: Arc<Catalog>,
}

impl Site {
    /// Load the site from an explicit config file or `.velura.toml` in the
    /// current directory
    ///
    /// A relative `catalog` path in the config resolves against the directory
    /// holding the config file.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (config, base) = match config_path {
            Some(path) => {
                let config = ConfigLoader::load_path(path).map_err(VeluraError::from)?;
                let base = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (config, base)
            }
            None => {
                let cwd = env::current_dir().map_err(|source| VeluraError::Io {
                    context: "current directory".to_string(),
                    source,
                })?;
                let config = ConfigLoader::load(&cwd).map_err(VeluraError::from)?;
                (config, cwd)
            }
        };

        let catalog_path = config.catalog_path(&base);
        let catalog = CatalogLoader::load_or_builtin(catalog_path.as_deref())
            .map_err(VeluraError::from)
            .context("Failed to load catalog")?;

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
        })
    }

    /// Start a session with the configured defaults
    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(self.catalog.clone(), &self.config).map_err(VeluraError::from)?)
    }
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json_output);
    Ok(())
}

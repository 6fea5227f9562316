//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use super::ConfigError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .velura.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use velura::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Routine starts on the {} tab", config.routine.default_time);
    /// # Ok::<(), velura::config::ConfigError>(())
    /// ```
    pub fn load(site_root: &Path) -> Result<ConfigFile, ConfigError> {
        Self::load_with_fs(site_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    ///
    /// A missing file yields [`ConfigFile::default`].
    pub fn load_with_fs<FS: FileSystem>(
        site_root: &Path,
        fs: &FS,
    ) -> Result<ConfigFile, ConfigError> {
        let config_path = site_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, site_root.display());
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path,
                    source,
                })
            }
        };

        Self::parse(&config_path, &contents)
    }

    /// Load config from an explicit file path
    ///
    /// Unlike [`ConfigLoader::load`], a missing file is an error.
    pub fn load_path(path: &Path) -> Result<ConfigFile, ConfigError> {
        Self::load_path_with_fs(path, &RealFileSystem)
    }

    /// Load config from an explicit path with a custom filesystem
    pub fn load_path_with_fs<FS: FileSystem>(
        path: &Path,
        fs: &FS,
    ) -> Result<ConfigFile, ConfigError> {
        let contents = fs.read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<ConfigFile, ConfigError> {
        let config: ConfigFile =
            toml_edit::de::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to .velura.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use velura::catalog::TimeOfDay;
    /// use velura::config::{ConfigFile, ConfigLoader};
    /// use std::path::Path;
    ///
    /// let mut config = ConfigFile::default();
    /// config.routine.default_time = TimeOfDay::Evening;
    /// ConfigLoader::save(&config, Path::new("."))?;
    /// # Ok::<(), velura::config::ConfigError>(())
    /// ```
    pub fn save(config: &ConfigFile, site_root: &Path) -> Result<(), ConfigError> {
        Self::save_with_fs(config, site_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        site_root: &Path,
        fs: &FS,
    ) -> Result<(), ConfigError> {
        let config_path = site_root.join(CONFIG_FILE_NAME);

        let contents = toml_edit::ser::to_string_pretty(config)?;

        fs.write(&config_path, contents)
            .map_err(|source| ConfigError::Write {
                path: config_path,
                source,
            })
    }

    /// Check if config file exists in the site directory
    pub fn exists(site_root: &Path) -> bool {
        site_root.join(CONFIG_FILE_NAME).exists()
    }
}

//! Configuration file data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ConfigError;
use crate::catalog::TimeOfDay;
use crate::routine::DEFAULT_STEPS;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".velura.toml";

/// velura configuration file structure
///
/// # Examples
///
/// ```
/// use velura::config::ConfigFile;
/// use velura::catalog::TimeOfDay;
///
/// let config = ConfigFile::default();
/// assert!(config.catalog.is_none());
/// assert_eq!(config.routine.default_time, TimeOfDay::Morning);
/// assert_eq!(config.routine.default_steps, ["2", "3", "5", "7", "9"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Alternative catalog document; relative paths resolve against the
    /// directory holding the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Routine builder settings
    #[serde(default)]
    pub routine: RoutineSettings,
}

impl ConfigFile {
    /// Catalog path resolved against `base`
    pub fn catalog_path(&self, base: &Path) -> Option<PathBuf> {
        self.catalog.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            }
        })
    }

    /// Check settings that serde alone cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.routine.validate()
    }
}

/// Routine builder settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoutineSettings {
    /// Time-of-day tab shown when a session starts
    #[serde(default = "default_time")]
    pub default_time: TimeOfDay,

    /// Care step ids selected when a session starts
    #[serde(default = "default_steps")]
    pub default_steps: Vec<String>,
}

fn default_time() -> TimeOfDay {
    TimeOfDay::Morning
}

fn default_steps() -> Vec<String> {
    DEFAULT_STEPS.iter().map(|s| s.to_string()).collect()
}

impl Default for RoutineSettings {
    fn default() -> Self {
        Self {
            default_time: default_time(),
            default_steps: default_steps(),
        }
    }
}

impl RoutineSettings {
    /// The starting tab must be a real tab: morning or evening
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_time == TimeOfDay::Both {
            return Err(ConfigError::Invalid {
                field: "routine.default-time".to_string(),
                message: "must be \"morning\" or \"evening\"".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for id in &self.default_steps {
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::Invalid {
                    field: "routine.default-steps".to_string(),
                    message: format!("step '{}' is listed twice", id),
                });
            }
        }
        Ok(())
    }
}

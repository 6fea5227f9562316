//! Top-level error type with contextual suggestions
//!
//! Module errors ([`CatalogError`], [`ConfigError`], [`SessionError`]) are
//! folded into [`VeluraError`], which adds:
//! - A hint for fixing the problem
//! - A sysexits-style exit code
//!
//! # Examples
//!
//! ```
//! use velura::error::VeluraError;
//!
//! let err = VeluraError::InvalidAnswerFormat {
//!     arg: "skinType".to_string(),
//! };
//! assert_eq!(err.exit_code(), 64);
//! assert!(err.suggestion().unwrap().contains("QUESTION=VALUE"));
//! ```

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::{ConfigError, CONFIG_FILE_NAME};
use crate::quiz::QuizError;
use crate::routine::RoutineError;
use crate::session::SessionError;

/// Errors reported by the velura CLI
#[derive(Error, Debug)]
pub enum VeluraError {
    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded or saved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A session operation was rejected
    #[error(transparent)]
    Session(#[from] SessionError),

    /// `--time` value is not a time of day
    #[error("Unknown time of day: '{value}'")]
    InvalidTimeOfDay {
        /// Rejected value
        value: String,
    },

    /// `--answer` argument is not `QUESTION=VALUE`
    #[error("Malformed answer: '{arg}'")]
    InvalidAnswerFormat {
        /// Rejected argument
        arg: String,
    },

    /// `catalog` listing name is not known
    #[error("Unknown listing: '{name}'")]
    InvalidListing {
        /// Rejected listing name
        name: String,
        /// Valid listing names
        valid: Vec<String>,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl From<RoutineError> for VeluraError {
    fn from(err: RoutineError) -> Self {
        Self::Session(err.into())
    }
}

impl From<QuizError> for VeluraError {
    fn from(err: QuizError) -> Self {
        Self::Session(err.into())
    }
}

impl VeluraError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use velura::error::VeluraError;
    ///
    /// let error = VeluraError::InvalidListing {
    ///     name: "prices".to_string(),
    ///     valid: vec!["steps".to_string(), "products".to_string()],
    /// };
    ///
    /// assert_eq!(error.suggestion().unwrap(), "Valid listings: steps, products");
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Catalog(CatalogError::Parse(_)) => {
                Some("Check the catalog document against data/catalog.toml".to_string())
            }
            Self::Catalog(CatalogError::Invalid { issues }) => Some(
                issues
                    .iter()
                    .map(|issue| format!("  - {}", issue))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Self::Catalog(CatalogError::Io { path, .. }) => Some(format!(
                "Ensure {} exists or remove 'catalog' from {}",
                path.display(),
                CONFIG_FILE_NAME
            )),
            Self::Config(ConfigError::NotFound { .. }) => {
                Some("Run 'velura init' to create a configuration file".to_string())
            }
            Self::Config(ConfigError::Parse { .. } | ConfigError::Invalid { .. }) => Some(format!(
                "Fix {} or regenerate it with 'velura init --force'",
                CONFIG_FILE_NAME
            )),
            Self::Config(_) => Some("Check file permissions in the site directory".to_string()),
            Self::Session(SessionError::Routine(RoutineError::UnknownStep { .. })) => {
                Some("Run 'velura catalog steps' to list care step ids".to_string())
            }
            Self::Session(SessionError::Quiz(QuizError::OutOfOrder { expected, .. })) => Some(
                format!("Answer '{}' next; questions are answered in order", expected),
            ),
            Self::Session(SessionError::Quiz(QuizError::UnknownOption { valid, .. })) => {
                Some(format!("Valid options: {}", valid.join(", ")))
            }
            Self::Session(SessionError::Quiz(QuizError::AlreadyComplete)) => {
                Some("Drop the extra --answer arguments".to_string())
            }
            Self::Session(SessionError::UnknownIngredient { .. }) => {
                Some("Run 'velura catalog ingredients' to list ingredient ids".to_string())
            }
            Self::Session(SessionError::QuizClosed) => None,
            Self::InvalidTimeOfDay { .. } => Some("Valid times: morning, evening".to_string()),
            Self::InvalidAnswerFormat { .. } => {
                Some("Pass answers as QUESTION=VALUE, e.g. --answer skinType=oily".to_string())
            }
            Self::InvalidListing { valid, .. } => {
                Some(format!("Valid listings: {}", valid.join(", ")))
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h
    /// conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use velura::error::VeluraError;
    ///
    /// let error = VeluraError::InvalidTimeOfDay {
    ///     value: "noon".to_string(),
    /// };
    /// assert_eq!(error.exit_code(), 64); // EX_USAGE
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(CatalogError::Io { .. }) => 66, // EX_NOINPUT
            Self::Catalog(_) => 65,                       // EX_DATAERR
            Self::Config(ConfigError::NotFound { .. }) => 66,
            Self::Config(ConfigError::Read { .. } | ConfigError::Write { .. }) => 74, // EX_IOERR
            Self::Config(_) => 65,
            Self::Session(_) => 65,
            Self::InvalidTimeOfDay { .. } => 64, // EX_USAGE
            Self::InvalidAnswerFormat { .. } => 64,
            Self::InvalidListing { .. } => 64,
            Self::Io { .. } => 74,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(velura_error) = Self::find(error) {
            if let Some(suggestion) = velura_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, VeluraError::exit_code)
    }

    // Handlers attach context on top, so look through the whole chain
    fn find(error: &anyhow::Error) -> Option<&VeluraError> {
        error.chain().find_map(|e| e.downcast_ref::<VeluraError>())
    }
}

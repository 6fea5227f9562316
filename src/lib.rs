#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! velura library
//!
//! Core of the Velura Botanical Skincare site: the product and ingredient
//! catalog, the routine builder and the skin quiz. Everything here is plain
//! data in, data out; the `velura` binary is one presentation layer on top.
//!
//! # Basic Example
//!
//! Building a routine:
//!
//! ```
//! use std::sync::Arc;
//! use velura::catalog::{Catalog, TimeOfDay};
//! use velura::routine::RoutineModel;
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut routine = RoutineModel::with_defaults(catalog)?;
//!
//! // SPF is a morning step; dropping it shortens the morning only
//! routine.toggle_step("9")?;
//! assert_eq!(routine.estimated_minutes(TimeOfDay::Morning), 8);
//! assert_eq!(routine.estimated_minutes(TimeOfDay::Evening), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Advanced Example: Session With Quiz
//!
//! A session bundles the per-visitor state, including the quiz modal:
//!
//! ```
//! use std::sync::Arc;
//! use velura::catalog::Catalog;
//! use velura::config::ConfigFile;
//! use velura::session::Session;
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut session = Session::new(catalog, &ConfigFile::default())?;
//!
//! let quiz = session.open_quiz();
//! quiz.answer("skinType", "dry")?;
//! quiz.answer("concerns", "sensitivity")?;
//! quiz.answer("routine", "moderate")?;
//! quiz.answer("texture", "rich")?;
//!
//! let picks = session.quiz().unwrap().recommendations();
//! assert_eq!(picks.products[0], "Hydra-Restore Cream");
//! assert!(picks.ingredients.contains(&"Centella".to_string()));
//!
//! // Reopening starts over
//! session.open_quiz();
//! assert!(!session.quiz().unwrap().is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Product, ingredient, care step and quiz catalog
pub mod catalog;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file support
pub mod config;
/// Top-level error type with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Skin quiz state machine and recommendation rules
pub mod quiz;
/// Routine builder
pub mod routine;
/// Per-visitor site state
pub mod session;

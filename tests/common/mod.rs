//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Catalog and session construction
//! - Site fixtures (config and catalog files in a temp directory)
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//!
//! fn test_routine() {
//!     let mut session = common::session();
//!     session.toggle_step("1").unwrap();
//! }
//! ```

pub mod fixtures;

use std::sync::Arc;
use velura::catalog::Catalog;
use velura::config::ConfigFile;
use velura::quiz::QuizEngine;
use velura::session::Session;

/// The built-in catalog, shared
#[allow(dead_code)]
pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().expect("built-in catalog must load"))
}

/// A session with default configuration
#[allow(dead_code)]
pub fn session() -> Session {
    Session::new(catalog(), &ConfigFile::default()).expect("default session must start")
}

/// Answer every question in order
#[allow(dead_code)]
pub fn answer_all(quiz: &mut QuizEngine, answers: &[(&str, &str)]) {
    for (question, value) in answers {
        quiz.answer(question, value)
            .unwrap_or_else(|e| panic!("answer {question}={value} rejected: {e}"));
    }
}

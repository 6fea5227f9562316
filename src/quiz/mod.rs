//! Skin quiz state machine
//!
//! The quiz walks the catalog questions strictly in order:
//! `Asking { step: 0 }` → `Asking { step: 1 }` → … → `Complete`. Each
//! accepted answer is recorded and advances the state; there is no way back.
//! Recommendations only exist once the last question has been answered;
//! asking earlier yields an empty result rather than a partial one.
//!
//! Reopening the quiz means building a new [`QuizEngine`] (or calling
//! [`QuizEngine::reset`]), which clears every answer.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use velura::catalog::Catalog;
//! use velura::quiz::QuizEngine;
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut quiz = QuizEngine::new(catalog);
//!
//! quiz.answer("skinType", "oily")?;
//! quiz.answer("concerns", "acne")?;
//! assert!(quiz.recommendations().is_empty());
//!
//! quiz.answer("routine", "minimal")?;
//! quiz.answer("texture", "light")?;
//! assert!(quiz.is_complete());
//!
//! let picks = quiz.recommendations();
//! assert_eq!(picks.products, ["Pore Refining Toner", "Lightweight Gel Moisturizer"]);
//! assert_eq!(picks.ingredients, ["Niacinamide", "Salicylic Acid"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod rules;

pub use rules::{Recommendations, RuleTable, MAX_INGREDIENTS, MAX_PRODUCTS};

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::{Catalog, QuizQuestion};

/// Errors raised by quiz operations
///
/// A rejected call never changes the quiz state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The answer is for a question other than the current one
    #[error("Expected an answer to '{expected}', got '{got}'")]
    OutOfOrder {
        /// Id of the current question
        expected: String,
        /// Id the caller answered
        got: String,
    },

    /// The value is not one of the current question's options
    #[error("'{value}' is not an option for '{question}'")]
    UnknownOption {
        /// Question id
        question: String,
        /// Rejected value
        value: String,
        /// Values the question accepts
        valid: Vec<String>,
    },

    /// Every question has already been answered
    #[error("The quiz is already complete")]
    AlreadyComplete,
}

/// Where the quiz currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    /// Waiting for the answer to question `step`
    Asking {
        /// Zero-based index of the current question
        step: usize,
    },
    /// All questions answered
    Complete,
}

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizAnswer {
    /// Question id
    pub question: String,
    /// Chosen option value
    pub value: String,
}

/// Progress shown above the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    /// Questions answered so far
    pub answered: usize,
    /// Questions in the quiz
    pub total: usize,
    /// Progress bar fill, 0 to 100
    pub percent: u8,
}

/// The skin quiz for one session
#[derive(Debug, Clone)]
pub struct QuizEngine {
    catalog: Arc<Catalog>,
    state: QuizState,
    answers: Vec<QuizAnswer>,
}

impl QuizEngine {
    /// Starts a fresh quiz at the first question
    ///
    /// A catalog without questions yields a quiz that is already complete.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = Self::initial_state(&catalog);
        Self {
            catalog,
            state,
            answers: Vec::new(),
        }
    }

    fn initial_state(catalog: &Catalog) -> QuizState {
        if catalog.questions().is_empty() {
            QuizState::Complete
        } else {
            QuizState::Asking { step: 0 }
        }
    }

    /// Clears all answers and returns to the first question
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.catalog);
        self.answers.clear();
        log::debug!("quiz reset");
    }

    /// Current state
    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Questions in the order they are asked
    pub fn questions(&self) -> &[QuizQuestion] {
        self.catalog.questions()
    }

    /// The question awaiting an answer, if any
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::Asking { step } => self.catalog.questions().get(step),
            QuizState::Complete => None,
        }
    }

    /// Returns true once the last question has been answered
    pub fn is_complete(&self) -> bool {
        matches!(self.state, QuizState::Complete)
    }

    /// Answers recorded so far, in question order
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    /// Recorded answer for a question
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question == question)
            .map(|a| a.value.as_str())
    }

    /// Records an answer to the current question and advances
    ///
    /// # Errors
    ///
    /// - [`QuizError::AlreadyComplete`] once every question is answered
    /// - [`QuizError::OutOfOrder`] if `question` is not the current question
    /// - [`QuizError::UnknownOption`] if `value` is not one of its options
    pub fn answer(&mut self, question: &str, value: &str) -> Result<QuizState, QuizError> {
        let step = match self.state {
            QuizState::Asking { step } => step,
            QuizState::Complete => return Err(QuizError::AlreadyComplete),
        };
        let questions = self.catalog.questions();
        let current = &questions[step];

        if current.id != question {
            return Err(QuizError::OutOfOrder {
                expected: current.id.clone(),
                got: question.to_string(),
            });
        }
        if !current.accepts(value) {
            return Err(QuizError::UnknownOption {
                question: current.id.clone(),
                value: value.to_string(),
                valid: current.options.iter().map(|o| o.value.clone()).collect(),
            });
        }

        self.answers.push(QuizAnswer {
            question: current.id.clone(),
            value: value.to_string(),
        });
        self.state = if step + 1 < questions.len() {
            QuizState::Asking { step: step + 1 }
        } else {
            QuizState::Complete
        };
        log::debug!("quiz answer {}={} -> {:?}", question, value, self.state);
        Ok(self.state)
    }

    /// Progress through the quiz
    ///
    /// While asking, the bar counts the current question as reached, so the
    /// first question shows `1/N`.
    pub fn progress(&self) -> QuizProgress {
        let total = self.catalog.questions().len();
        let percent = match self.state {
            QuizState::Asking { step } => ((step + 1) * 100 / total) as u8,
            QuizState::Complete => 100,
        };
        QuizProgress {
            answered: self.answers.len(),
            total,
            percent,
        }
    }

    /// Recommendations for the recorded answers
    ///
    /// Empty until the quiz is complete.
    pub fn recommendations(&self) -> Recommendations {
        if !self.is_complete() {
            return Recommendations::empty();
        }
        RuleTable::new(self.catalog.rules()).evaluate(
            self.answers
                .iter()
                .map(|a| (a.question.as_str(), a.value.as_str())),
        )
    }
}

//! Per-visitor site state
//!
//! A [`Session`] owns everything one visitor can change: the section on
//! screen, the routine builder, the time-of-day tab, the quiz modal, the
//! product category filter and the ingredient detail panel. The catalog is
//! shared read-only between sessions.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use velura::catalog::Catalog;
//! use velura::config::ConfigFile;
//! use velura::session::{Section, Session};
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut session = Session::new(catalog, &ConfigFile::default())?;
//!
//! assert_eq!(session.section(), Section::Home);
//! assert_eq!(session.visible_products().len(), 3);
//!
//! session.navigate(Section::Products);
//! assert_eq!(session.visible_products().len(), 6);
//!
//! session.open_quiz();
//! session.quiz_mut()?.answer("skinType", "dry")?;
//! assert!(!session.quiz().unwrap().is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::{Catalog, Ingredient, Product, ProductFilter, TimeOfDay};
use crate::config::ConfigFile;
use crate::quiz::{QuizEngine, QuizError};
use crate::routine::{RoutineError, RoutineModel};

/// Errors raised by session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Routine operation failed
    #[error(transparent)]
    Routine(#[from] RoutineError),

    /// Quiz operation failed
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// The quiz modal is not open
    #[error("The quiz is not open")]
    QuizClosed,

    /// The id does not name an ingredient in the catalog
    #[error("Unknown ingredient: '{id}'")]
    UnknownIngredient {
        /// Rejected id
        id: String,
    },
}

/// Top-level site sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing page with the featured slices
    #[default]
    Home,
    /// Routine builder
    Routine,
    /// Ingredient glossary
    Ingredients,
    /// Product showcase
    Products,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Routine,
        Section::Ingredients,
        Section::Products,
    ];

    /// Lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Routine => "routine",
            Section::Ingredients => "ingredients",
            Section::Products => "products",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown section '{}'. Valid sections: home, routine, ingredients, products",
                    s
                )
            })
    }
}

/// State for one visitor
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    catalog: Arc<Catalog>,
    section: Section,
    routine: RoutineModel,
    time: TimeOfDay,
    quiz: Option<QuizEngine>,
    product_filter: ProductFilter,
    selected_ingredient: Option<String>,
}

impl Session {
    /// Starts a session with the configured routine defaults
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Routine`] if a configured default step is not
    /// in the catalog.
    pub fn new(catalog: Arc<Catalog>, config: &ConfigFile) -> Result<Self, SessionError> {
        let routine =
            RoutineModel::with_selection(catalog.clone(), &config.routine.default_steps)?;
        let session = Self {
            id: Uuid::new_v4(),
            catalog,
            section: Section::default(),
            routine,
            time: config.routine.default_time,
            quiz: None,
            product_filter: ProductFilter::All,
            selected_ingredient: None,
        };
        log::info!(
            "session {} started on catalog {} ({} steps preselected)",
            session.id,
            session.catalog.version(),
            session.routine.selection_len()
        );
        Ok(session)
    }

    /// Session id used in log lines
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Shared catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Section on screen
    pub fn section(&self) -> Section {
        self.section
    }

    /// Switch sections
    pub fn navigate(&mut self, section: Section) {
        log::debug!("session {} -> {}", self.id, section);
        self.section = section;
    }

    // Routine builder

    /// Routine builder state
    pub fn routine(&self) -> &RoutineModel {
        &self.routine
    }

    /// Time-of-day tab
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Switch the time-of-day tab
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.time = time;
    }

    /// Toggle a care step in the routine
    pub fn toggle_step(&mut self, id: &str) -> Result<bool, SessionError> {
        Ok(self.routine.toggle_step(id)?)
    }

    // Quiz modal

    /// Open the quiz modal with a fresh quiz
    ///
    /// Reopening discards any previous answers.
    pub fn open_quiz(&mut self) -> &mut QuizEngine {
        log::debug!("session {} opened the quiz", self.id);
        self.quiz.insert(QuizEngine::new(self.catalog.clone()))
    }

    /// Close the quiz modal
    pub fn close_quiz(&mut self) {
        if self.quiz.take().is_some() {
            log::debug!("session {} closed the quiz", self.id);
        }
    }

    /// Returns true while the quiz modal is open
    pub fn is_quiz_open(&self) -> bool {
        self.quiz.is_some()
    }

    /// The open quiz
    pub fn quiz(&self) -> Option<&QuizEngine> {
        self.quiz.as_ref()
    }

    /// The open quiz, for answering
    pub fn quiz_mut(&mut self) -> Result<&mut QuizEngine, SessionError> {
        self.quiz.as_mut().ok_or(SessionError::QuizClosed)
    }

    // Product showcase

    /// Active category filter
    pub fn product_filter(&self) -> &ProductFilter {
        &self.product_filter
    }

    /// Change the category filter
    pub fn set_product_filter(&mut self, filter: ProductFilter) {
        self.product_filter = filter;
    }

    /// Products to render: the featured slice on the home section, the full
    /// list elsewhere, narrowed by the category filter
    pub fn visible_products(&self) -> Vec<&Product> {
        let products = match self.section {
            Section::Home => self.catalog.featured_products(),
            _ => self.catalog.products(),
        };
        products
            .iter()
            .filter(|p| self.product_filter.matches(p))
            .collect()
    }

    // Ingredient glossary

    /// Ingredients to render: the featured slice on the home section, the
    /// full list elsewhere
    pub fn visible_ingredients(&self) -> &[Ingredient] {
        match self.section {
            Section::Home => self.catalog.featured_ingredients(),
            _ => self.catalog.ingredients(),
        }
    }

    /// Open the detail panel for an ingredient
    pub fn select_ingredient(&mut self, id: &str) -> Result<&Ingredient, SessionError> {
        let ingredient = self
            .catalog
            .ingredient(id)
            .ok_or_else(|| SessionError::UnknownIngredient { id: id.to_string() })?;
        self.selected_ingredient = Some(ingredient.id.clone());
        Ok(ingredient)
    }

    /// Close the detail panel
    pub fn clear_ingredient(&mut self) {
        self.selected_ingredient = None;
    }

    /// Ingredient whose detail panel is open
    pub fn selected_ingredient(&self) -> Option<&Ingredient> {
        self.selected_ingredient
            .as_deref()
            .and_then(|id| self.catalog.ingredient(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutineSettings;

    fn session() -> Session {
        Session::new(Arc::new(Catalog::builtin().unwrap()), &ConfigFile::default()).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session();
        assert_eq!(session.section(), Section::Home);
        assert_eq!(session.time(), TimeOfDay::Morning);
        assert!(!session.is_quiz_open());
        assert_eq!(session.product_filter(), &ProductFilter::All);
        assert!(session.selected_ingredient().is_none());
        assert_eq!(session.routine().selected_ids(), vec!["2", "3", "5", "7", "9"]);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(session().id(), session().id());
    }

    #[test]
    fn test_configured_defaults_are_applied() {
        let config = ConfigFile {
            catalog: None,
            routine: RoutineSettings {
                default_time: TimeOfDay::Evening,
                default_steps: vec!["1".to_string(), "10".to_string()],
            },
        };
        let session = Session::new(Arc::new(Catalog::builtin().unwrap()), &config).unwrap();
        assert_eq!(session.time(), TimeOfDay::Evening);
        assert_eq!(session.routine().selected_ids(), vec!["1", "10"]);
    }

    #[test]
    fn test_unknown_configured_step_is_rejected() {
        let mut config = ConfigFile::default();
        config.routine.default_steps.push("42".to_string());
        let err = Session::new(Arc::new(Catalog::builtin().unwrap()), &config).unwrap_err();
        assert_eq!(
            err,
            SessionError::Routine(RoutineError::UnknownStep {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn test_quiz_must_be_open_to_answer() {
        let mut session = session();
        assert_eq!(session.quiz_mut().unwrap_err(), SessionError::QuizClosed);

        session.open_quiz().answer("skinType", "oily").unwrap();
        assert_eq!(session.quiz().unwrap().answers().len(), 1);

        session.close_quiz();
        assert!(session.quiz().is_none());
    }

    #[test]
    fn test_reopening_quiz_starts_over() {
        let mut session = session();
        let quiz = session.open_quiz();
        for (q, v) in [
            ("skinType", "dry"),
            ("concerns", "aging"),
            ("routine", "minimal"),
            ("texture", "rich"),
        ] {
            quiz.answer(q, v).unwrap();
        }
        assert!(session.quiz().unwrap().is_complete());

        session.close_quiz();
        session.open_quiz();
        let quiz = session.quiz().unwrap();
        assert!(!quiz.is_complete());
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn test_visible_products_depend_on_section_and_filter() {
        let mut session = session();
        assert_eq!(session.visible_products().len(), 3);

        session.set_product_filter(ProductFilter::category("Mask"));
        // The only mask is not in the featured slice
        assert!(session.visible_products().is_empty());

        session.navigate(Section::Products);
        let masks = session.visible_products();
        assert_eq!(masks.len(), 1);
        assert_eq!(masks[0].name, "Calming Recovery Mask");
    }

    #[test]
    fn test_visible_ingredients_depend_on_section() {
        let mut session = session();
        assert_eq!(session.visible_ingredients().len(), 4);
        session.navigate(Section::Ingredients);
        assert_eq!(session.visible_ingredients().len(), 6);
    }

    #[test]
    fn test_ingredient_panel() {
        let mut session = session();
        assert_eq!(session.select_ingredient("retinol").unwrap().name, "Retinol");
        assert_eq!(session.selected_ingredient().unwrap().id, "retinol");

        let err = session.select_ingredient("glitter").unwrap_err();
        assert!(matches!(err, SessionError::UnknownIngredient { .. }));
        // A failed selection keeps the open panel
        assert_eq!(session.selected_ingredient().unwrap().id, "retinol");

        session.clear_ingredient();
        assert!(session.selected_ingredient().is_none());
    }

    #[test]
    fn test_toggle_through_session() {
        let mut session = session();
        assert!(session.toggle_step("1").unwrap());
        assert!(session.routine().is_selected("1"));
        assert!(session.toggle_step("nope").is_err());
        session.set_time(TimeOfDay::Evening);
        assert_eq!(session.routine().my_routine(session.time()).len(), 5);
    }

    #[test]
    fn test_section_parsing() {
        assert_eq!("Products".parse::<Section>(), Ok(Section::Products));
        assert_eq!(" home ".parse::<Section>(), Ok(Section::Home));
        assert!("checkout".parse::<Section>().is_err());
        assert_eq!(Section::Ingredients.to_string(), "ingredients");
    }
}

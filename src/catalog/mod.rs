//! Read-only catalog of care steps, products, ingredients and quiz content
//!
//! The catalog is parsed once from a TOML document (the built-in one is
//! embedded in the binary) and validated before use. After that it only
//! answers lookups; nothing in the crate mutates it.
//!
//! # Examples
//!
//! ```
//! use velura::catalog::{Catalog, ProductFilter, TimeOfDay};
//!
//! let catalog = Catalog::builtin()?;
//!
//! let spf = catalog.step("9").unwrap();
//! assert_eq!(spf.time, TimeOfDay::Morning);
//!
//! let serums = catalog.products_in(&ProductFilter::category("Serum"));
//! assert_eq!(serums.len(), 1);
//! # Ok::<(), velura::catalog::CatalogError>(())
//! ```

pub mod loader;
pub mod types;
pub mod validator;

pub use loader::CatalogLoader;
pub use types::{
    CareStep, Ingredient, Product, QuizOption, QuizQuestion, RecommendationRule, TimeOfDay,
};
pub use validator::{CatalogValidator, ValidationIssue, ValidationResult, ValidationSeverity};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// The catalog document shipped with the crate
pub const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// Products shown in the home section showcase
pub const FEATURED_PRODUCTS: usize = 3;

/// Ingredients shown in the home section spotlight
pub const FEATURED_INGREDIENTS: usize = 4;

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid TOML or does not match the catalog schema
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml_edit::de::Error),

    /// The document parsed but failed integrity checks
    #[error("Catalog failed validation with {} error(s)", .issues.len())]
    Invalid {
        /// Error-level issues found
        issues: Vec<ValidationIssue>,
    },

    /// The catalog file could not be read
    #[error("Failed to read catalog file {}", .path.display())]
    Io {
        /// Catalog file path
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

/// Product category filter used by the showcase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductFilter {
    /// Every category
    #[default]
    All,
    /// A single category, matched exactly
    Category(String),
}

impl ProductFilter {
    /// Filter on a single category
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    /// Returns true if the product passes the filter
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }

    /// Label shown on the filter button
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(category) => category,
        }
    }
}

impl FromStr for ProductFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Category filter cannot be empty".to_string());
        }
        if trimmed.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Category(trimmed.to_string()))
        }
    }
}

/// Immutable catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    version: String,
    #[serde(default)]
    steps: Vec<CareStep>,
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    questions: Vec<QuizQuestion>,
    #[serde(default)]
    rules: Vec<RecommendationRule>,
}

impl Catalog {
    /// Parse and validate the embedded catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document
    ///
    /// Validation warnings are logged; any error rejects the document.
    pub fn from_toml_str(document: &str) -> Result<Self, CatalogError> {
        let catalog = Self::from_toml_str_unchecked(document)?;
        let result = CatalogValidator::new().validate(&catalog);

        for warning in result.warnings() {
            log::warn!("catalog {}: {}", catalog.version, warning);
        }
        for note in result.notes() {
            log::info!("catalog {}: {}", catalog.version, note);
        }

        if result.has_errors() {
            let issues = result.errors().into_iter().cloned().collect();
            return Err(CatalogError::Invalid { issues });
        }

        log::info!(
            "loaded catalog {} ({} steps, {} products, {} ingredients, {} questions, {} rules)",
            catalog.version,
            catalog.steps.len(),
            catalog.products.len(),
            catalog.ingredients.len(),
            catalog.questions.len(),
            catalog.rules.len()
        );
        Ok(catalog)
    }

    pub(crate) fn from_toml_str_unchecked(document: &str) -> Result<Self, CatalogError> {
        Ok(toml_edit::de::from_str(document)?)
    }

    /// Catalog data version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Care steps in catalog order
    pub fn steps(&self) -> &[CareStep] {
        &self.steps
    }

    /// Products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Ingredients in catalog order
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Quiz questions in the order they are asked
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Recommendation rule table
    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Look up a care step by id
    pub fn step(&self, id: &str) -> Option<&CareStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Returns true if a care step with this id exists
    pub fn has_step(&self, id: &str) -> bool {
        self.step(id).is_some()
    }

    /// Care steps of one category, in catalog order
    pub fn steps_in(&self, category: &str) -> Vec<&CareStep> {
        self.steps
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Look up a product by id
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by display name
    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Products passing the filter, in catalog order
    pub fn products_in(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct product categories in first-seen order
    pub fn product_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products shown on the home section
    pub fn featured_products(&self) -> &[Product] {
        &self.products[..self.products.len().min(FEATURED_PRODUCTS)]
    }

    /// Look up an ingredient by id
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Look up an ingredient by common name
    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    /// Ingredients shown on the home section
    pub fn featured_ingredients(&self) -> &[Ingredient] {
        &self.ingredients[..self.ingredients.len().min(FEATURED_INGREDIENTS)]
    }

    /// Look up a quiz question by id
    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }
}

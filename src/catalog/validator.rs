//! Catalog integrity checks
//!
//! Catalog documents are plain data, so nothing stops a hand-edited file
//! from repeating an id or pointing a rule at a question that does not
//! exist. The checks here run once at load time; errors reject the catalog,
//! warnings are logged and the catalog is still used.

use std::collections::HashSet;

use super::Catalog;

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Informational message
    Info,
    /// Warning - should be addressed but not blocking
    Warning,
    /// Error - the catalog cannot be used
    Error,
}

impl ValidationSeverity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationSeverity::Info => "INFO",
            ValidationSeverity::Warning => "WARNING",
            ValidationSeverity::Error => "ERROR",
        }
    }
}

/// A validation issue found in a catalog
///
/// # Examples
///
/// ```
/// use velura::catalog::validator::{ValidationIssue, ValidationSeverity};
///
/// let issue = ValidationIssue::error("steps[3].id", "Duplicate step id '3'");
/// assert_eq!(issue.severity, ValidationSeverity::Error);
///
/// let warning = ValidationIssue::warning("rules[0].products", "Unknown product")
///     .with_suggestion("Add the product to the catalog");
/// assert!(warning.suggestion.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: ValidationSeverity,
    /// Section and entry that has the issue
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Suggested fix (if available)
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: ValidationSeverity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create an error issue
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Error, field, message)
    }

    /// Create a warning issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Warning, field, message)
    }

    /// Create an informational issue
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Info, field, message)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.as_str(), self.field, self.message)
    }
}

/// Result of catalog validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors)
    pub valid: bool,
    /// Issues found during validation
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        if issue.severity == ValidationSeverity::Error {
            self.valid = false;
        }
        self.issues.push(issue);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error)
    }

    /// Get only errors
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
            .collect()
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .collect()
    }

    /// Get only informational notes
    pub fn notes(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Info)
            .collect()
    }
}

/// A single catalog check
pub trait CatalogCheck {
    /// Check name, used in log output
    fn name(&self) -> &str;

    /// Inspect the catalog and report issues into `result`
    fn check(&self, catalog: &Catalog, result: &mut ValidationResult);
}

/// Runs every registered [`CatalogCheck`] over a catalog
pub struct CatalogValidator {
    checks: Vec<Box<dyn CatalogCheck>>,
}

impl Default for CatalogValidator {
    fn default() -> Self {
        let mut validator = Self::empty();
        validator.register(Box::new(UniqueIds));
        validator.register(Box::new(QuizIntegrity));
        validator.register(Box::new(RuleReferences));
        validator.register(Box::new(ProductRatings));
        validator
    }
}

impl CatalogValidator {
    /// Validator with the standard checks registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with no checks registered
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register an additional check
    pub fn register(&mut self, check: Box<dyn CatalogCheck>) {
        self.checks.push(check);
    }

    /// Number of registered checks
    pub fn count(&self) -> usize {
        self.checks.len()
    }

    /// Run all checks
    pub fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::success();
        for check in &self.checks {
            let before = result.issues.len();
            check.check(catalog, &mut result);
            log::debug!(
                "catalog check '{}' reported {} issue(s)",
                check.name(),
                result.issues.len() - before
            );
        }
        result
    }
}

fn report_duplicates<'a>(
    section: &str,
    ids: impl Iterator<Item = &'a str>,
    result: &mut ValidationResult,
) {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if !seen.insert(id) {
            result.add_issue(ValidationIssue::error(
                format!("{}[{}].id", section, index),
                format!("Duplicate id '{}'", id),
            ));
        }
    }
}

/// Ids must be unique within each section
pub struct UniqueIds;

impl CatalogCheck for UniqueIds {
    fn name(&self) -> &str {
        "unique-ids"
    }

    fn check(&self, catalog: &Catalog, result: &mut ValidationResult) {
        report_duplicates("steps", catalog.steps().iter().map(|s| s.id.as_str()), result);
        report_duplicates(
            "products",
            catalog.products().iter().map(|p| p.id.as_str()),
            result,
        );
        report_duplicates(
            "ingredients",
            catalog.ingredients().iter().map(|i| i.id.as_str()),
            result,
        );
        report_duplicates(
            "questions",
            catalog.questions().iter().map(|q| q.id.as_str()),
            result,
        );
    }
}

/// Every question needs at least one option, and option values must be unique
pub struct QuizIntegrity;

impl CatalogCheck for QuizIntegrity {
    fn name(&self) -> &str {
        "quiz-integrity"
    }

    fn check(&self, catalog: &Catalog, result: &mut ValidationResult) {
        for (index, question) in catalog.questions().iter().enumerate() {
            if question.options.is_empty() {
                result.add_issue(
                    ValidationIssue::error(
                        format!("questions[{}].options", index),
                        format!("Question '{}' has no options", question.id),
                    )
                    .with_suggestion("A question must offer at least one answer"),
                );
            }

            let mut seen = HashSet::new();
            for option in &question.options {
                if !seen.insert(option.value.as_str()) {
                    result.add_issue(ValidationIssue::error(
                        format!("questions[{}].options", index),
                        format!(
                            "Question '{}' repeats option value '{}'",
                            question.id, option.value
                        ),
                    ));
                }
            }
        }
    }
}

/// Rules must point at real questions and options; recommended names should
/// resolve to catalog entries
pub struct RuleReferences;

impl CatalogCheck for RuleReferences {
    fn name(&self) -> &str {
        "rule-references"
    }

    fn check(&self, catalog: &Catalog, result: &mut ValidationResult) {
        if catalog.rules().is_empty() && !catalog.questions().is_empty() {
            result.add_issue(
                ValidationIssue::info("rules", "No recommendation rules")
                    .with_suggestion("A completed quiz will recommend nothing"),
            );
        }

        for (index, rule) in catalog.rules().iter().enumerate() {
            let field = format!("rules[{}]", index);

            match catalog.question(&rule.question) {
                None => {
                    result.add_issue(ValidationIssue::error(
                        format!("{}.question", field),
                        format!("Rule refers to unknown question '{}'", rule.question),
                    ));
                }
                Some(question) if !question.accepts(&rule.answer) => {
                    result.add_issue(ValidationIssue::error(
                        format!("{}.answer", field),
                        format!(
                            "Question '{}' has no option '{}'",
                            rule.question, rule.answer
                        ),
                    ));
                }
                Some(_) => {}
            }

            for name in &rule.products {
                if catalog.product_by_name(name).is_none() {
                    result.add_issue(
                        ValidationIssue::warning(
                            format!("{}.products", field),
                            format!("Recommended product '{}' is not in the catalog", name),
                        )
                        .with_suggestion("It will be recommended by name only"),
                    );
                }
            }

            for name in &rule.ingredients {
                if catalog.ingredient_by_name(name).is_none() {
                    result.add_issue(ValidationIssue::warning(
                        format!("{}.ingredients", field),
                        format!(
                            "Recommended ingredient '{}' has no encyclopedia entry",
                            name
                        ),
                    ));
                }
            }
        }
    }
}

/// Ratings must lie on the 0 to 5 scale
pub struct ProductRatings;

impl CatalogCheck for ProductRatings {
    fn name(&self) -> &str {
        "product-ratings"
    }

    fn check(&self, catalog: &Catalog, result: &mut ValidationResult) {
        for (index, product) in catalog.products().iter().enumerate() {
            if !(0.0..=5.0).contains(&product.rating) {
                result.add_issue(ValidationIssue::error(
                    format!("products[{}].rating", index),
                    format!(
                        "Rating {} for '{}' is outside 0-5",
                        product.rating, product.name
                    ),
                ));
            }
        }
    }
}

//! Catalog entry types
//!
//! Every type here is an immutable catalog record. They derive serde so the
//! catalog document can be parsed straight into them and re-emitted as JSON
//! by the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When a care step applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning routine only
    Morning,
    /// Evening routine only
    Evening,
    /// Both routines
    Both,
}

impl TimeOfDay {
    /// Get the lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
            Self::Both => "both",
        }
    }

    /// Title used in routine headings ("My Morning Routine")
    pub fn title(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Evening => "Evening",
            Self::Both => "All-Day",
        }
    }

    /// Returns true if a step tagged `self` shows up under the `facet` filter
    ///
    /// A step matches when its time equals the facet or when it is tagged
    /// [`TimeOfDay::Both`].
    ///
    /// # Examples
    ///
    /// ```
    /// use velura::catalog::TimeOfDay;
    ///
    /// assert!(TimeOfDay::Both.applies_to(TimeOfDay::Evening));
    /// assert!(TimeOfDay::Morning.applies_to(TimeOfDay::Morning));
    /// assert!(!TimeOfDay::Morning.applies_to(TimeOfDay::Evening));
    /// ```
    pub fn applies_to(&self, facet: TimeOfDay) -> bool {
        *self == facet || *self == Self::Both
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" | "am" => Ok(Self::Morning),
            "evening" | "pm" => Ok(Self::Evening),
            "both" => Ok(Self::Both),
            _ => Err(format!("Unknown time of day: {}", s)),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single skincare action in the routine builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CareStep {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Which routine(s) this step belongs to
    pub time: TimeOfDay,
    /// Step category (Cleanse, Prep, Treat, Hydrate, Protect)
    pub category: String,
    /// One-line description
    pub description: String,
    /// Display icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A product in the showcase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Product {
    /// Catalog id
    pub id: String,
    /// Display name, also the key used by recommendation rules
    pub name: String,
    /// Showcase category (Serum, Moisturizer, ...)
    pub category: String,
    /// Marketing description
    pub description: String,
    /// Key ingredients, by name
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Price in whole currency units
    pub price: u32,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
    /// Skin types the product is aimed at
    #[serde(default)]
    pub skin_types: Vec<String>,
    /// Accent color (hex)
    pub color: String,
}

/// An ingredient encyclopedia entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ingredient {
    /// Catalog id
    pub id: String,
    /// Common name, also the key used by recommendation rules
    pub name: String,
    /// Scientific name
    pub scientific_name: String,
    /// Display icon
    pub icon: String,
    /// Accent color (hex)
    pub color: String,
    /// Benefits, most important first
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Skin types and concerns it suits
    #[serde(default)]
    pub best_for: Vec<String>,
    /// Long-form description
    pub description: String,
    /// Ingredients it should not be layered with
    #[serde(default)]
    pub avoid_with: Vec<String>,
}

/// One answer choice of a quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Machine value recorded as the answer
    pub value: String,
    /// Label shown to the user
    pub label: String,
    /// Display icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A skin quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question id, the key under which the answer is recorded
    pub id: String,
    /// Prompt text
    pub prompt: String,
    /// Answer choices, in display order
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Look up an option by its value
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Returns true if `value` is one of this question's option values
    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}

/// A row of the recommendation rule table
///
/// When the quiz answer for `question` equals `answer`, the listed product
/// and ingredient names are added to the recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    /// Question id the rule is keyed on
    pub question: String,
    /// Answer value the rule fires for
    pub answer: String,
    /// Product names to recommend
    #[serde(default)]
    pub products: Vec<String>,
    /// Ingredient names to recommend
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl RecommendationRule {
    /// Returns true if this rule fires for the given answer
    pub fn matches(&self, question: &str, answer: &str) -> bool {
        self.question == question && self.answer == answer
    }
}

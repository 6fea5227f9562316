//! Recommendation rule evaluation

use serde::Serialize;

use crate::catalog::RecommendationRule;

/// Most products a quiz result recommends
pub const MAX_PRODUCTS: usize = 3;

/// Most ingredients a quiz result recommends
pub const MAX_INGREDIENTS: usize = 4;

/// Products and ingredients recommended by a finished quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    /// Product names, first recommended first, no duplicates
    pub products: Vec<String>,
    /// Ingredient names, first recommended first, no duplicates
    pub ingredients: Vec<String>,
}

impl Recommendations {
    /// No recommendations
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if nothing is recommended
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.ingredients.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|existing| existing == name) {
        list.push(name.to_string());
    }
}

/// Read-only view over a rule table
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<'a> {
    rules: &'a [RecommendationRule],
}

impl<'a> RuleTable<'a> {
    /// Wrap a slice of rules
    pub fn new(rules: &'a [RecommendationRule]) -> Self {
        Self { rules }
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the table to `(question, answer)` pairs
    ///
    /// Pairs are visited in the order given and, for each pair, rules in
    /// table order. Names already recommended are skipped, then the lists
    /// are capped at [`MAX_PRODUCTS`] and [`MAX_INGREDIENTS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use velura::catalog::Catalog;
    /// use velura::quiz::RuleTable;
    ///
    /// let catalog = Catalog::builtin()?;
    /// let table = RuleTable::new(catalog.rules());
    /// let picks = table.evaluate([("skinType", "dry"), ("concerns", "sensitivity")]);
    ///
    /// assert_eq!(
    ///     picks.products,
    ///     ["Hydra-Restore Cream", "Clarity Cleansing Oil", "Calming Recovery Mask"]
    /// );
    /// assert_eq!(
    ///     picks.ingredients,
    ///     ["Ceramides", "Hyaluronic Acid", "Centella"]
    /// );
    /// # Ok::<(), velura::catalog::CatalogError>(())
    /// ```
    pub fn evaluate<'q, I>(&self, answers: I) -> Recommendations
    where
        I: IntoIterator<Item = (&'q str, &'q str)>,
    {
        let mut result = Recommendations::empty();

        for (question, answer) in answers {
            for rule in self.rules.iter().filter(|r| r.matches(question, answer)) {
                for product in &rule.products {
                    push_unique(&mut result.products, product);
                }
                for ingredient in &rule.ingredients {
                    push_unique(&mut result.ingredients, ingredient);
                }
            }
        }

        result.products.truncate(MAX_PRODUCTS);
        result.ingredients.truncate(MAX_INGREDIENTS);
        result
    }
}

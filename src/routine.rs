//! Routine builder model
//!
//! Tracks which care steps the user picked and presents them filtered by
//! time of day. The selection is a plain set of step ids; everything the
//! user sees (visible steps, "my routine", estimated time) is derived from
//! it on demand in catalog order, so the order in which steps were picked
//! never leaks into the display.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use velura::catalog::{Catalog, TimeOfDay};
//! use velura::routine::RoutineModel;
//!
//! let catalog = Arc::new(Catalog::builtin()?);
//! let mut routine = RoutineModel::with_defaults(catalog)?;
//!
//! // Add the evening-only oil cleanser
//! routine.toggle_step("1")?;
//!
//! let evening: Vec<&str> = routine
//!     .my_routine(TimeOfDay::Evening)
//!     .iter()
//!     .map(|s| s.name.as_str())
//!     .collect();
//! assert_eq!(evening, ["Oil Cleanser", "Water Cleanser", "Toner", "Serum", "Moisturizer"]);
//! assert_eq!(routine.estimated_minutes(TimeOfDay::Evening), 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::{CareStep, Catalog, TimeOfDay};

/// Minutes each selected step adds to the estimated routine time
pub const MINUTES_PER_STEP: u32 = 2;

/// Steps selected in a fresh routine: Water Cleanser, Toner, Serum,
/// Moisturizer and SPF
pub const DEFAULT_STEPS: [&str; 5] = ["2", "3", "5", "7", "9"];

/// Errors raised by routine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutineError {
    /// The id does not name a care step in the catalog
    #[error("Unknown care step: '{id}'")]
    UnknownStep {
        /// Rejected id
        id: String,
    },
}

/// Derived view of one time-of-day routine
#[derive(Debug, Clone, Serialize)]
pub struct RoutineSummary {
    /// Time-of-day facet the routine was built for
    pub time: TimeOfDay,
    /// Selected steps visible for that facet, in catalog order
    pub steps: Vec<CareStep>,
    /// Number of steps
    pub step_count: usize,
    /// `step_count` times [`MINUTES_PER_STEP`]
    pub estimated_minutes: u32,
}

/// The user's care step selection
#[derive(Debug, Clone)]
pub struct RoutineModel {
    catalog: Arc<Catalog>,
    selected: HashSet<String>,
}

impl RoutineModel {
    /// Creates a routine with nothing selected
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected: HashSet::new(),
        }
    }

    /// Creates a routine starting from [`DEFAULT_STEPS`]
    pub fn with_defaults(catalog: Arc<Catalog>) -> Result<Self, RoutineError> {
        Self::with_selection(catalog, DEFAULT_STEPS)
    }

    /// Creates a routine starting from the given ids
    ///
    /// # Errors
    ///
    /// Returns [`RoutineError::UnknownStep`] for the first id that is not in
    /// the catalog.
    pub fn with_selection<I, S>(catalog: Arc<Catalog>, ids: I) -> Result<Self, RoutineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = HashSet::new();
        for id in ids {
            let id = id.as_ref();
            if !catalog.has_step(id) {
                return Err(RoutineError::UnknownStep { id: id.to_string() });
            }
            selected.insert(id.to_string());
        }
        Ok(Self { catalog, selected })
    }

    /// Catalog the routine draws from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds the step if absent, removes it if present
    ///
    /// Returns whether the step is selected after the toggle. Unknown ids are
    /// rejected and leave the selection untouched.
    pub fn toggle_step(&mut self, id: &str) -> Result<bool, RoutineError> {
        if !self.catalog.has_step(id) {
            return Err(RoutineError::UnknownStep { id: id.to_string() });
        }

        let now_selected = if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        };
        log::debug!(
            "step {} {}",
            id,
            if now_selected { "selected" } else { "deselected" }
        );
        Ok(now_selected)
    }

    /// Returns true if the step is currently selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in catalog order
    pub fn selected_ids(&self) -> Vec<&str> {
        self.catalog
            .steps()
            .iter()
            .filter(|s| self.selected.contains(&s.id))
            .map(|s| s.id.as_str())
            .collect()
    }

    /// Number of selected steps across all times of day
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Steps that apply to `time`, in catalog order
    pub fn visible_steps(&self, time: TimeOfDay) -> Vec<&CareStep> {
        self.catalog
            .steps()
            .iter()
            .filter(|s| s.time.applies_to(time))
            .collect()
    }

    /// Selected steps that apply to `time`, in catalog order
    pub fn my_routine(&self, time: TimeOfDay) -> Vec<&CareStep> {
        self.visible_steps(time)
            .into_iter()
            .filter(|s| self.selected.contains(&s.id))
            .collect()
    }

    /// Estimated minutes for the `time` routine
    pub fn estimated_minutes(&self, time: TimeOfDay) -> u32 {
        self.my_routine(time).len() as u32 * MINUTES_PER_STEP
    }

    /// Snapshot of the `time` routine for display
    pub fn summary(&self, time: TimeOfDay) -> RoutineSummary {
        let steps: Vec<CareStep> = self.my_routine(time).into_iter().cloned().collect();
        let step_count = steps.len();
        RoutineSummary {
            time,
            steps,
            step_count,
            estimated_minutes: step_count as u32 * MINUTES_PER_STEP,
        }
    }
}

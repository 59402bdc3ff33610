//! Preview of computed deadlines before they are committed.
//!
//! The presentation layer shows the computed list, lets the user replace
//! individual dates, and then stores the final list.  An override only
//! replaces the stored date; it never feeds back into the holiday or
//! suspension computation.

use std::collections::BTreeMap;

use crate::result::DeadlineCalculationResult;
use termini_core::errors::{Error, Result};
use termini_time::Date;

/// A computed deadline list with per-entry date overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlinePreview {
    computed: Vec<DeadlineCalculationResult>,
    overrides: BTreeMap<String, Date>,
}

impl DeadlinePreview {
    /// Start a preview from a freshly computed list.
    pub fn new(computed: Vec<DeadlineCalculationResult>) -> Self {
        Self {
            computed,
            overrides: BTreeMap::new(),
        }
    }

    /// The list as computed, without overrides.
    pub fn computed(&self) -> &[DeadlineCalculationResult] {
        &self.computed
    }

    /// Replace the date of the entry labelled `label`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if no entry has that label.
    pub fn override_date(&mut self, label: &str, date: Date) -> Result<()> {
        if !self.computed.iter().any(|r| r.label == label) {
            return Err(Error::InvalidArgument(format!(
                "no deadline labelled {label:?} in this preview"
            )));
        }
        tracing::debug!(label, %date, "deadline date overridden");
        self.overrides.insert(label.to_owned(), date);
        Ok(())
    }

    /// Drop the override for `label`, restoring the computed date.
    pub fn clear_override(&mut self, label: &str) -> bool {
        self.overrides.remove(label).is_some()
    }

    /// Return `true` if `label` has been overridden.
    pub fn is_overridden(&self, label: &str) -> bool {
        self.overrides.contains_key(label)
    }

    /// The entries as they would be stored, overrides applied, in the
    /// original statutory order.
    pub fn finalize(&self) -> Vec<DeadlineCalculationResult> {
        self.computed
            .iter()
            .map(|r| match self.overrides.get(&r.label) {
                Some(&date) => r.with_date(date),
                None => r.clone(),
            })
            .collect()
    }
}

/// Signed number of calendar days from `today` to `deadline`.
///
/// Negative once the deadline has passed.  The caller supplies `today`; the
/// engine never reads a clock.
pub fn days_remaining(deadline: Date, today: Date) -> i32 {
    today.days_between(deadline)
}

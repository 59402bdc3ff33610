//! `DeadlineCalculationResult`: one computed sub-deadline.

use termini_time::Date;

/// A computed sub-deadline.
///
/// Built fresh by every calculation and never mutated afterwards; a preview
/// override produces a new value (see [`DeadlinePreview`](crate::DeadlinePreview)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadlineCalculationResult {
    /// Statutory name of the act.
    pub label: String,
    /// Human-readable purpose.
    pub description: String,
    /// The deadline after prudential adjustment.
    pub result_date: Date,
    /// Signed day offset from the reference date; `0` for appeal terms.
    pub offset_days: i32,
}

impl DeadlineCalculationResult {
    /// Copy of this result with `result_date` replaced.
    pub fn with_date(&self, result_date: Date) -> Self {
        Self {
            result_date,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for DeadlineCalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.result_date.format_dmy(),
            self.label,
            self.description
        )
    }
}

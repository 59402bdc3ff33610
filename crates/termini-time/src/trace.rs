//! Step-by-step record of a calendar-day count.
//!
//! A trace lists every date the counter visited, how much of the budget was
//! left after it, and why the cursor moved.  Lawyers use it to check a
//! computed deadline by hand.

use crate::date::Date;
use crate::weekday::Weekday;

/// What kind of day a visited date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// A regular working day.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A public holiday on a weekday.
    Holiday,
    /// Inside the suspension window (only when the suspension applies).
    Suspended,
}

/// Why the cursor reached a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// The reference date; not counted.
    Start,
    /// A calendar day consumed from the budget.
    Counted(DayKind),
    /// The suspension window was entered at `from` and skipped as one day.
    SuspensionJump {
        /// First suspended date the cursor touched.
        from: Date,
    },
    /// Prudential move away from a non-working endpoint.
    Prudential {
        /// The endpoint being moved away from.
        from: Date,
        /// Why `from` could not be the deadline.
        reason: DayKind,
    },
}

/// One visited date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountStep {
    /// Date the cursor is on after this step.
    pub date: Date,
    /// Days of the budget still to count.
    pub remaining: u32,
    /// Why the cursor moved here.
    pub kind: StepKind,
}

impl CountStep {
    /// Weekday of [`date`](Self::date).
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Italian annotation for the step, as shown in the audit view.
    pub fn note(&self) -> String {
        match self.kind {
            StepKind::Start => "Data di partenza (non si conta)".to_owned(),
            StepKind::Counted(DayKind::Weekend) => "Weekend (conta come giorno di calendario)".to_owned(),
            StepKind::Counted(DayKind::Holiday) => "Festività (conta come giorno di calendario)".to_owned(),
            StepKind::Counted(_) => "Giorno feriale (conta)".to_owned(),
            StepKind::SuspensionJump { from } => format!(
                "Sospensione feriale dal {}: periodo saltato, conta come un giorno",
                from.format_dmy()
            ),
            StepKind::Prudential { from, reason } => {
                let why = match reason {
                    DayKind::Weekend => "weekend",
                    DayKind::Holiday => "festività",
                    DayKind::Suspended => "sospensione feriale",
                    DayKind::Working => "non lavorativo",
                };
                format!("Criterio prudenziale: spostato dal {} ({why})", from.format_dmy())
            }
        }
    }
}

/// The full record of a count and its result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountTrace {
    /// Visited dates in order, starting with the reference date.
    pub steps: Vec<CountStep>,
    /// The deadline after prudential adjustment.
    pub result: Date,
}

impl CountTrace {
    /// Return `true` if the endpoint had to be moved by the prudential rule.
    pub fn prudential_applied(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s.kind, StepKind::Prudential { .. }))
    }

    /// Number of calendar days consumed from the budget.
    pub fn counted_days(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Counted(_) | StepKind::SuspensionJump { .. }))
            .count()
    }
}

impl std::fmt::Display for CountTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            writeln!(
                f,
                "{} {} [{:>3}] {}",
                step.date.format_dmy(),
                step.weekday().italian_abbreviation(),
                step.remaining,
                step.note()
            )?;
        }
        write!(f, "Scadenza finale: {}", self.result.format_dmy())
    }
}

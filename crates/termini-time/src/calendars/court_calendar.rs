//! Court calendar: a calendar built from an explicit holiday table and
//! suspension window.
//!
//! Used for jurisdictional variants (a local patron-saint holiday, a
//! different suspension window) without touching the counting code.

use crate::calendar::Calendar;
use crate::holidays::HolidaySet;
use crate::suspension::SuspensionWindow;
use termini_core::errors::Result;

/// A calendar whose holidays and suspension window are supplied at
/// construction time.
///
/// There is no mutation API: a variant is a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourtCalendar {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    holidays: HolidaySet,
    #[cfg_attr(feature = "serde", serde(default))]
    suspension: SuspensionWindow,
}

impl CourtCalendar {
    /// Create a validated calendar.
    pub fn new(
        name: impl Into<String>,
        holidays: HolidaySet,
        suspension: SuspensionWindow,
    ) -> Result<Self> {
        holidays.validate()?;
        suspension.validate()?;
        Ok(Self {
            name: name.into(),
            holidays,
            suspension,
        })
    }

    /// Load a calendar from TOML.
    ///
    /// ```toml
    /// name = "Roma"
    ///
    /// [suspension]
    /// month = "August"
    /// first_day = 1
    /// last_day = 31
    ///
    /// [[holidays.fixed]]
    /// month = "June"
    /// day = 29
    /// name = "Santi Pietro e Paolo"
    ///
    /// [[holidays.moveable]]
    /// easter_offset = 1
    /// name = "Lunedì dell'Angelo"
    /// ```
    ///
    /// Omitted `holidays` or `suspension` tables fall back to the Italian
    /// defaults.  A `holidays` table without `moveable` entries still keeps
    /// Easter Monday; write `moveable = []` to drop it.  Impossible holidays
    /// and malformed windows are rejected here, at load time.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cal: CourtCalendar = toml::from_str(s).map_err(|e| {
            termini_core::errors::Error::InvalidArgument(format!("failed to parse calendar: {e}"))
        })?;
        tracing::debug!(
            calendar = %cal.name,
            fixed = cal.holidays.fixed().len(),
            moveable = cal.holidays.moveable().len(),
            "court calendar loaded"
        );
        Ok(cal)
    }
}

impl Calendar for CourtCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    fn suspension(&self) -> &SuspensionWindow {
        &self.suspension
    }
}

//! Annual suspension of procedural terms (sospensione feriale).
//!
//! While the window is open term counting is frozen.  The calendar-day
//! counters treat the whole window as a single countable step, landing on
//! the last day before it when counting backward and on the first day after
//! it when counting forward.

use crate::date::{days_in_month, Date};
use crate::month::Month;
use termini_core::errors::{Error, Result};

/// A yearly window inside a single month during which terms are suspended.
///
/// Deserialization goes through [`SuspensionWindow::new`], so a loaded window
/// is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawWindow")
)]
pub struct SuspensionWindow {
    month: Month,
    first_day: u8,
    last_day: u8,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindow {
    month: Month,
    first_day: u8,
    last_day: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindow> for SuspensionWindow {
    type Error = Error;

    fn try_from(raw: RawWindow) -> Result<Self> {
        Self::new(raw.month, raw.first_day, raw.last_day)
    }
}

impl SuspensionWindow {
    /// The Italian window: August 1–31.
    pub const ITALY: SuspensionWindow = SuspensionWindow {
        month: Month::August,
        first_day: 1,
        last_day: 31,
    };

    /// Build a window covering `first_day..=last_day` of `month`.
    ///
    /// `last_day` may exceed the length of a short month (e.g. 29 for
    /// February); the window then ends with the month.
    pub fn new(month: Month, first_day: u8, last_day: u8) -> Result<Self> {
        let window = Self {
            month,
            first_day,
            last_day,
        };
        window.validate()?;
        Ok(window)
    }

    /// Check the bounds are ordered and inside a month.
    pub fn validate(&self) -> Result<()> {
        if self.first_day == 0 || self.first_day > self.last_day || self.last_day > 31 {
            return Err(Error::InvalidArgument(format!(
                "suspension window {}..={} {} is not a valid day range",
                self.first_day, self.last_day, self.month
            )));
        }
        Ok(())
    }

    /// Month of the window.
    pub fn month(&self) -> Month {
        self.month
    }

    /// First suspended day of the month.
    pub fn first_day(&self) -> u8 {
        self.first_day
    }

    /// Last suspended day of the month.
    pub fn last_day(&self) -> u8 {
        self.last_day
    }

    /// Return `true` if `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        let (_, m, d) = date.ymd();
        m == self.month.number() && (self.first_day..=self.last_day).contains(&d)
    }

    /// The day before the window opens in `year` (July 31 for Italy).
    pub fn last_day_before(&self, year: u16) -> Result<Date> {
        Date::from_ymd(year, self.month.number(), self.first_day)?.add_days(-1)
    }

    /// The day after the window closes in `year` (September 1 for Italy).
    pub fn first_day_after(&self, year: u16) -> Result<Date> {
        let m = self.month.number();
        let last = self.last_day.min(days_in_month(year, m));
        Date::from_ymd(year, m, last)?.add_days(1)
    }
}

impl Default for SuspensionWindow {
    fn default() -> Self {
        Self::ITALY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn whole_of_august() {
        let w = SuspensionWindow::ITALY;
        assert!(w.contains(date(2025, 8, 1)));
        assert!(w.contains(date(2025, 8, 15)));
        assert!(w.contains(date(2025, 8, 31)));
        assert!(!w.contains(date(2025, 7, 31)));
        assert!(!w.contains(date(2025, 9, 1)));
    }

    #[test]
    fn jump_targets() {
        let w = SuspensionWindow::ITALY;
        assert_eq!(w.last_day_before(2025).unwrap(), date(2025, 7, 31));
        assert_eq!(w.first_day_after(2025).unwrap(), date(2025, 9, 1));
    }

    #[test]
    fn partial_window() {
        let w = SuspensionWindow::new(Month::February, 10, 31).unwrap();
        assert!(w.contains(date(2024, 2, 29)));
        assert!(!w.contains(date(2024, 2, 9)));
        assert_eq!(w.last_day_before(2024).unwrap(), date(2024, 2, 9));
        assert_eq!(w.first_day_after(2024).unwrap(), date(2024, 3, 1));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(SuspensionWindow::new(Month::August, 0, 31).is_err());
        assert!(SuspensionWindow::new(Month::August, 20, 10).is_err());
        assert!(SuspensionWindow::new(Month::August, 1, 32).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates() {
        let w: SuspensionWindow =
            serde_json::from_str(r#"{"month":"August","first_day":1,"last_day":31}"#).unwrap();
        assert_eq!(w, SuspensionWindow::ITALY);
        let zero = serde_json::from_str::<SuspensionWindow>(
            r#"{"month":"August","first_day":0,"last_day":31}"#,
        );
        assert!(zero.is_err());
        let reversed = serde_json::from_str::<SuspensionWindow>(
            r#"{"month":"August","first_day":20,"last_day":10}"#,
        );
        assert!(reversed.is_err());
    }
}

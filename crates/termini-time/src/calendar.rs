//! `Calendar` trait.
//!
//! A judicial calendar knows which dates are holidays and when the annual
//! suspension of terms runs.  The counting functions in
//! [`counting`](crate::counting) take the calendar as a parameter, so a
//! jurisdictional variant is a different calendar value, not different code.

use crate::business_day_convention::BusinessDayConvention;
use crate::counting;
use crate::date::Date;
use crate::holidays::HolidaySet;
use crate::suspension::SuspensionWindow;
use termini_core::errors::Result;

/// A judicial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Italy (civil courts)"`).
    fn name(&self) -> &str;

    /// The public-holiday table.
    fn holidays(&self) -> &HolidaySet;

    /// The annual suspension window.
    fn suspension(&self) -> &SuspensionWindow;

    /// Return `true` on Saturdays and Sundays.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Return `true` if `date` is a fixed or moveable public holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holidays().contains(date)
    }

    /// Return `true` if `date` falls inside the suspension window.
    fn is_in_suspension(&self, date: Date) -> bool {
        self.suspension().contains(date)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Return `true` if a deadline may fall on `date`: a business day and,
    /// when the suspension applies, outside the window.
    fn is_working_day(&self, date: Date, include_suspension: bool) -> bool {
        self.is_business_day(date) && !(include_suspension && self.is_in_suspension(date))
    }

    /// Apply the prudential adjustment to `date`.
    ///
    /// Equivalent to [`counting::prudential_adjust`].
    fn adjust(
        &self,
        date: Date,
        convention: BusinessDayConvention,
        include_suspension: bool,
    ) -> Result<Date> {
        counting::prudential_adjust(self, date, convention, include_suspension)
    }
}

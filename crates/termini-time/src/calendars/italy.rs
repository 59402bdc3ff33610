//! Italy (civil courts) calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::HolidaySet;
use crate::suspension::SuspensionWindow;

/// Italian civil-court calendar.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Easter Monday
/// * Liberation Day (Apr 25)
/// * Labour Day (May 1)
/// * Republic Day (Jun 2)
/// * Assumption of Mary (Aug 15)
/// * All Saints' Day (Nov 1)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25)
/// * St. Stephen's Day (Dec 26)
///
/// Terms are suspended from August 1 to August 31.
#[derive(Debug, Clone, Copy, Default)]
pub struct Italy;

static HOLIDAYS: HolidaySet = HolidaySet::ITALY;

impl Calendar for Italy {
    fn name(&self) -> &str {
        "Italy (civil courts)"
    }

    fn holidays(&self) -> &HolidaySet {
        &HOLIDAYS
    }

    fn suspension(&self) -> &SuspensionWindow {
        &SuspensionWindow::ITALY
    }
}

/// Return `true` if `date` is an Italian national holiday.
pub fn is_holiday(date: Date) -> bool {
    Italy.is_holiday(date)
}

/// Return `true` if `date` falls in the Italian suspension of terms
/// (August 1–31).
pub fn is_in_suspension(date: Date) -> bool {
    Italy.is_in_suspension(date)
}

//! # termini-time
//!
//! Dates, judicial calendars, and the calendar-day arithmetic behind Italian
//! procedural deadlines.
//!
//! ```
//! use termini_time::{count_backward, Date, Italy};
//!
//! let hearing = Date::from_ymd(2025, 10, 15)?;
//! let first_memo = count_backward(&Italy, hearing, 40, false)?;
//! assert_eq!(first_memo, Date::from_ymd(2025, 9, 5)?);
//! # Ok::<(), termini_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Prudential adjustment direction.
pub mod business_day_convention;

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Calendar-day counters, month adder, and prudential adjustment.
pub mod counting;

/// `Date` type.
pub mod date;

/// Easter computation.
pub mod easter;

/// Public-holiday tables.
pub mod holidays;

/// `Month`: month of the year.
pub mod month;

/// `Period`: a signed span in a `TimeUnit`.
pub mod period;

/// Suspension of terms window.
pub mod suspension;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// Step-by-step count records.
pub mod trace;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use calendars::italy::{is_holiday, is_in_suspension};
pub use calendars::{CourtCalendar, Italy};
pub use counting::{
    add_months_forward, apply_period, count_backward, count_forward, prudential_adjust,
    trace_backward, trace_forward,
};
pub use date::Date;
pub use easter::{easter_monday, easter_sunday};
pub use holidays::{FixedHoliday, HolidaySet, MoveableHoliday};
pub use month::Month;
pub use period::Period;
pub use suspension::SuspensionWindow;
pub use time_unit::TimeUnit;
pub use trace::{CountStep, CountTrace, DayKind, StepKind};
pub use weekday::Weekday;

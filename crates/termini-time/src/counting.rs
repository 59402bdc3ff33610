//! Calendar-day counting with suspension and prudential adjustment.
//!
//! Procedural terms are counted in *calendar* days: weekends and holidays
//! consume the budget like any other day.  Two rules bend this:
//!
//! * **Suspension.** When the suspension applies and the cursor steps into
//!   the window, it jumps straight past it (to the day before the window
//!   when counting backward, the day after it when counting forward) and the
//!   whole window consumes a single unit.
//! * **Prudential adjustment.** Only once the budget is exhausted, a
//!   non-working endpoint is moved to the nearest working day in the
//!   direction of the count.  It is never applied while counting.
//!
//! All functions take the calendar explicitly and return a new [`Date`];
//! nothing here reads global state.

use tracing::trace;

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::trace::{CountStep, CountTrace, DayKind, StepKind};
use termini_core::ensure;
use termini_core::errors::{Error, Result};

/// Count `days` calendar days backward from `reference`.
///
/// The result is strictly earlier than `reference`, is a business day and,
/// when `include_suspension` is set, lies outside the suspension window.
pub fn count_backward<C: Calendar + ?Sized>(
    calendar: &C,
    reference: Date,
    days: u32,
    include_suspension: bool,
) -> Result<Date> {
    count_days(
        calendar,
        reference,
        days,
        BusinessDayConvention::Preceding,
        include_suspension,
        &mut |_| {},
    )
}

/// Count `days` calendar days forward from `start`.
///
/// Mirror of [`count_backward`]: the window is exited on its first following
/// day and the endpoint is moved to the next working day.
pub fn count_forward<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    days: u32,
    include_suspension: bool,
) -> Result<Date> {
    count_days(
        calendar,
        start,
        days,
        BusinessDayConvention::Following,
        include_suspension,
        &mut |_| {},
    )
}

/// [`count_backward`], recording every step.
pub fn trace_backward<C: Calendar + ?Sized>(
    calendar: &C,
    reference: Date,
    days: u32,
    include_suspension: bool,
) -> Result<CountTrace> {
    traced(calendar, reference, days, BusinessDayConvention::Preceding, include_suspension)
}

/// [`count_forward`], recording every step.
pub fn trace_forward<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    days: u32,
    include_suspension: bool,
) -> Result<CountTrace> {
    traced(calendar, start, days, BusinessDayConvention::Following, include_suspension)
}

/// Add `months` calendar months to `start`.
///
/// When the suspension applies and `start` is inside the window the clock
/// starts on the day after the window.  Short target months clamp to their
/// last day.  The endpoint gets the forward prudential adjustment.
pub fn add_months_forward<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    months: u32,
    include_suspension: bool,
) -> Result<Date> {
    ensure!(months > 0, "number of months must be positive, got {months}");
    let n = i32::try_from(months)
        .map_err(|_| Error::InvalidArgument(format!("{months} months is out of range")))?;

    let effective_start = if include_suspension && calendar.is_in_suspension(start) {
        let resumed = calendar.suspension().first_day_after(start.year())?;
        trace!(%start, %resumed, "start inside suspension, month count deferred");
        resumed
    } else {
        start
    };
    let end = effective_start.advance(n, TimeUnit::Months)?;
    prudential_adjust(
        calendar,
        end,
        BusinessDayConvention::Following,
        include_suspension,
    )
}

/// Move `date` to the nearest working day in the direction of `convention`.
///
/// Weekends and holidays move one day at a time; a date inside the
/// suspension window (when it applies) jumps straight out of the window.
/// A date that is already a working day is returned unchanged.
pub fn prudential_adjust<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    convention: BusinessDayConvention,
    include_suspension: bool,
) -> Result<Date> {
    snap(calendar, date, convention, include_suspension, &mut |_| {})
}

/// Apply a statutory term to `reference`.
///
/// Negative day terms count backward, positive day terms count forward and
/// positive month terms go through [`add_months_forward`].  Weeks and years
/// are normalised first.  Zero-length terms and backward month terms are
/// rejected.
pub fn apply_period<C: Calendar + ?Sized>(
    calendar: &C,
    reference: Date,
    period: Period,
    include_suspension: bool,
) -> Result<Date> {
    let period = period.normalized();
    let magnitude = period.length.unsigned_abs();
    match period.unit {
        TimeUnit::Days if period.length < 0 => {
            count_backward(calendar, reference, magnitude, include_suspension)
        }
        TimeUnit::Days if period.length > 0 => {
            count_forward(calendar, reference, magnitude, include_suspension)
        }
        TimeUnit::Months if period.length > 0 => {
            add_months_forward(calendar, reference, magnitude, include_suspension)
        }
        _ => Err(Error::InvalidArgument(format!(
            "unsupported statutory term {period}"
        ))),
    }
}

/// Classify `date` for trace annotations and the prudential loop.
pub fn classify<C: Calendar + ?Sized>(
    calendar: &C,
    date: Date,
    include_suspension: bool,
) -> DayKind {
    if include_suspension && calendar.is_in_suspension(date) {
        DayKind::Suspended
    } else if calendar.is_weekend(date) {
        DayKind::Weekend
    } else if calendar.is_holiday(date) {
        DayKind::Holiday
    } else {
        DayKind::Working
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

fn traced<C: Calendar + ?Sized>(
    calendar: &C,
    start: Date,
    days: u32,
    convention: BusinessDayConvention,
    include_suspension: bool,
) -> Result<CountTrace> {
    // Capacity is only a hint; oversized budgets stop at the edge of the date range.
    let mut steps = Vec::with_capacity(days.min(366) as usize + 2);
    let result = count_days(
        calendar,
        start,
        days,
        convention,
        include_suspension,
        &mut |step| steps.push(step),
    )?;
    Ok(CountTrace { steps, result })
}

/// Where the cursor lands when it leaves the window of `year`.
fn suspension_exit<C: Calendar + ?Sized>(
    calendar: &C,
    year: u16,
    convention: BusinessDayConvention,
) -> Result<Date> {
    match convention {
        BusinessDayConvention::Preceding => calendar.suspension().last_day_before(year),
        BusinessDayConvention::Following => calendar.suspension().first_day_after(year),
    }
}

fn count_days<C, F>(
    calendar: &C,
    start: Date,
    days: u32,
    convention: BusinessDayConvention,
    include_suspension: bool,
    on_step: &mut F,
) -> Result<Date>
where
    C: Calendar + ?Sized,
    F: FnMut(CountStep),
{
    ensure!(days > 0, "number of days must be positive, got {days}");
    on_step(CountStep {
        date: start,
        remaining: days,
        kind: StepKind::Start,
    });

    let mut current = start;
    let mut remaining = days;
    while remaining > 0 {
        let next = current.add_days(convention.step())?;
        remaining -= 1;
        if include_suspension && calendar.is_in_suspension(next) {
            let exit = suspension_exit(calendar, next.year(), convention)?;
            trace!(from = %next, to = %exit, remaining, "suspension window counted as one day");
            on_step(CountStep {
                date: exit,
                remaining,
                kind: StepKind::SuspensionJump { from: next },
            });
            current = exit;
        } else {
            on_step(CountStep {
                date: next,
                remaining,
                kind: StepKind::Counted(classify(calendar, next, include_suspension)),
            });
            current = next;
        }
    }

    snap(calendar, current, convention, include_suspension, on_step)
}

fn snap<C, F>(
    calendar: &C,
    date: Date,
    convention: BusinessDayConvention,
    include_suspension: bool,
    on_step: &mut F,
) -> Result<Date>
where
    C: Calendar + ?Sized,
    F: FnMut(CountStep),
{
    let mut current = date;
    loop {
        let reason = classify(calendar, current, include_suspension);
        let next = match reason {
            DayKind::Working => return Ok(current),
            DayKind::Suspended => suspension_exit(calendar, current.year(), convention)?,
            DayKind::Weekend | DayKind::Holiday => current.add_days(convention.step())?,
        };
        trace!(from = %current, to = %next, ?reason, %convention, "prudential adjustment");
        on_step(CountStep {
            date: next,
            remaining: 0,
            kind: StepKind::Prudential {
                from: current,
                reason,
            },
        });
        current = next;
    }
}

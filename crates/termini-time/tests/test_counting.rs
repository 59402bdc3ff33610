//! Properties of the calendar-day counters and the month adder.

use proptest::prelude::*;

use termini_time::{
    add_months_forward, count_backward, count_forward, easter_monday, easter_sunday, is_holiday,
    is_in_suspension, Calendar, Date, Italy, TimeUnit, Weekday,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Dates well inside the supported range, so counts never hit its edges.
fn any_date() -> impl Strategy<Value = Date> {
    let lo = date(1950, 1, 1).serial();
    let hi = date(2150, 12, 31).serial();
    (lo..=hi).prop_map(|s| Date::from_serial(s).unwrap())
}

fn any_days() -> impl Strategy<Value = u32> {
    1u32..=400
}

proptest! {
    #[test]
    fn prop_holiday_and_suspension_are_deterministic(d in any_date()) {
        prop_assert_eq!(is_holiday(d), is_holiday(d));
        prop_assert_eq!(is_in_suspension(d), is_in_suspension(d));
        prop_assert_eq!(is_in_suspension(d), d.month() == 8);
    }

    #[test]
    fn prop_easter_bounds(year in Date::MIN_YEAR..=Date::MAX_YEAR) {
        let sunday = easter_sunday(year).unwrap();
        prop_assert_eq!(sunday.weekday(), Weekday::Sunday);
        prop_assert!(sunday >= date(year, 3, 22) && sunday <= date(year, 4, 25));
        let monday = easter_monday(year).unwrap();
        prop_assert_eq!(monday.weekday(), Weekday::Monday);
        prop_assert!(is_holiday(monday));
    }

    #[test]
    fn prop_backward_is_earlier_and_working(d in any_date(), n in any_days()) {
        let r = count_backward(&Italy, d, n, false).unwrap();
        prop_assert!(r < d);
        prop_assert!(r <= d.add_days(-(n as i32)).unwrap());
        prop_assert!(!r.is_weekend());
        prop_assert!(!is_holiday(r));
    }

    #[test]
    fn prop_backward_with_suspension_avoids_august(d in any_date(), n in any_days()) {
        let r = count_backward(&Italy, d, n, true).unwrap();
        prop_assert!(r < d);
        prop_assert_ne!(r.month(), 8);
        prop_assert!(Italy.is_working_day(r, true));
    }

    #[test]
    fn prop_forward_is_later_and_working(d in any_date(), n in any_days(), suspension in any::<bool>()) {
        let r = count_forward(&Italy, d, n, suspension).unwrap();
        prop_assert!(r >= d.add_days(n as i32).unwrap());
        prop_assert!(Italy.is_working_day(r, suspension));
    }

    #[test]
    fn prop_round_trip_never_overshoots_a_working_day(d in any_date(), n in any_days()) {
        prop_assume!(Italy.is_business_day(d));
        let back = count_backward(&Italy, d, n, false).unwrap();
        let forth = count_forward(&Italy, back, n, false).unwrap();
        prop_assert!(forth <= d);
    }

    #[test]
    fn prop_months_forward_is_working(d in any_date(), m in 1u32..=24, suspension in any::<bool>()) {
        let r = add_months_forward(&Italy, d, m, suspension).unwrap();
        prop_assert!(r >= d.advance(m as i32, TimeUnit::Months).unwrap());
        prop_assert!(Italy.is_working_day(r, suspension));
    }
}

#[test]
fn test_naive_and_suspended_counts_diverge_across_august() {
    let hearing = date(2025, 9, 10);
    let naive = count_backward(&Italy, hearing, 30, false).unwrap();
    let suspended = count_backward(&Italy, hearing, 30, true).unwrap();
    assert_eq!(naive, date(2025, 8, 11));
    assert_eq!(suspended, date(2025, 7, 11));
    assert_eq!(suspended.days_between(naive), 31);
}

#[test]
fn test_suspension_is_irrelevant_outside_summer() {
    let hearing = date(2026, 3, 16);
    for n in [10, 20, 30, 40, 60] {
        assert_eq!(
            count_backward(&Italy, hearing, n, true).unwrap(),
            count_backward(&Italy, hearing, n, false).unwrap()
        );
    }
}

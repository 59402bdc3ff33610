//! End-to-end deadline sets for each macro type.

use termini_core::Error;
use termini_deadlines::{
    calculate_from_input, calculate_macro_deadlines, calculate_macro_deadlines_with,
    DeadlineCalculationResult, MacroConfiguration, MacroType,
};
use termini_time::{
    Calendar, CourtCalendar, Date, FixedHoliday, HolidaySet, Italy, Month, SuspensionWindow,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn calc(m: MacroType, reference: Date, suspension: bool) -> Vec<DeadlineCalculationResult> {
    calculate_macro_deadlines(&MacroConfiguration::new(m, reference, suspension)).unwrap()
}

fn summary(v: &[DeadlineCalculationResult]) -> Vec<(&str, i32, Date)> {
    v.iter()
        .map(|r| (r.label.as_str(), r.offset_days, r.result_date))
        .collect()
}

#[test]
fn test_171_ter_hearing_2025_10_15() {
    let v = calc(MacroType::Art171Ter, date(2025, 10, 15), false);
    assert_eq!(
        summary(&v),
        [
            ("MEMORIA 171-TER 1° TERMINE", -40, date(2025, 9, 5)),
            ("MEMORIA 171-TER 2° TERMINE", -20, date(2025, 9, 25)),
            // Sunday 2025-10-05 moves back to Friday
            ("MEMORIA 171-TER 3° TERMINE", -10, date(2025, 10, 3)),
        ]
    );
    for r in &v {
        assert!(Italy.is_business_day(r.result_date), "{r}");
    }
}

#[test]
fn test_189_hearing_2026_01_20() {
    let v = calc(MacroType::Art189, date(2026, 1, 20), true);
    assert_eq!(
        summary(&v),
        [
            // Nov 21 2025 is a Friday
            ("FOGLIO DI PRECISAZIONE DELLE CONCLUSIONI", -60, date(2025, 11, 21)),
            // Dec 21 2025 is a Sunday
            ("MEMORIA 189 2° TERMINE (CONCLUSIONALE)", -30, date(2025, 12, 19)),
            // Jan 10 2026 is a Saturday
            ("MEMORIA 189 3° TERMINE C.P.C. (REPLICHE)", -10, date(2026, 1, 9)),
        ]
    );
}

#[test]
fn test_281_duodecies_collapses_august() {
    let v = calc(MacroType::Art281Duodecies, date(2025, 9, 10), true);
    assert_eq!(v[0].result_date, date(2025, 7, 11));
    assert_eq!(v[1].result_date, date(2025, 7, 31));
    assert!(v.iter().all(|r| r.result_date.month() != 8));

    let naive = calc(MacroType::Art281Duodecies, date(2025, 9, 10), false);
    assert_eq!(naive[0].result_date, date(2025, 8, 11));
    assert!(v[0].result_date < naive[0].result_date);
}

#[test]
fn test_appeal_long_start_before_august_is_not_deferred() {
    let v = calc(MacroType::AppealLong, date(2025, 7, 20), true);
    assert_eq!(summary(&v), [("ATTO DI APPELLO (TERMINE LUNGO)", 0, date(2026, 1, 20))]);
}

#[test]
fn test_appeal_long_start_in_august_is_deferred() {
    // Effective start 2025-09-01; + 6 months = Sunday 2026-03-01 → Monday
    let v = calc(MacroType::AppealLong, date(2025, 8, 20), true);
    assert_eq!(v[0].result_date, date(2026, 3, 2));
    // Without the suspension: 2026-02-20, a Friday.
    let v = calc(MacroType::AppealLong, date(2025, 8, 20), false);
    assert_eq!(v[0].result_date, date(2026, 2, 20));
}

#[test]
fn test_appeal_short() {
    let v = calc(MacroType::AppealShort, date(2025, 7, 20), true);
    assert_eq!(summary(&v), [("ATTO DI APPELLO (TERMINE BREVE)", 0, date(2025, 9, 19))]);
}

#[test]
fn test_unknown_macro_type_fails_without_partial_list() {
    let err = calculate_from_input("unknown", "2025-10-15", false).unwrap_err();
    assert_eq!(err, Error::UnsupportedMacroType("unknown".into()));
}

#[test]
fn test_invalid_reference_date() {
    assert!(matches!(
        calculate_from_input("171-ter", "2025-13-01", false),
        Err(Error::InvalidDateInput(_))
    ));
}

#[test]
fn test_deterministic() {
    for m in MacroType::ALL {
        let a = calc(m, date(2025, 9, 3), true);
        let b = calc(m, date(2025, 9, 3), true);
        assert_eq!(a, b);
        assert_eq!(a.len(), m.statutory_terms().len());
    }
}

#[test]
fn test_injected_calendar_changes_the_endpoint() {
    // A court that also closes on 2025-09-25 (Thursday).
    let mut fixed = HolidaySet::ITALY.fixed().to_vec();
    fixed.push(FixedHoliday::new(Month::September, 25, "Festa locale"));
    let holidays = HolidaySet::new(fixed, HolidaySet::ITALY.moveable().to_vec()).unwrap();
    let cal = CourtCalendar::new("Locale", holidays, SuspensionWindow::ITALY).unwrap();

    let config = MacroConfiguration::new(MacroType::Art171Ter, date(2025, 10, 15), false);
    let v = calculate_macro_deadlines_with(&cal, &config).unwrap();
    assert_eq!(v[1].result_date, date(2025, 9, 24));
    assert_eq!(calculate_macro_deadlines(&config).unwrap()[1].result_date, date(2025, 9, 25));
}

#[cfg(feature = "serde")]
#[test]
fn test_results_serialize_with_iso_dates() {
    let v = calc(MacroType::Art281Duodecies, date(2025, 9, 10), true);
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json[0]["result_date"], "2025-07-11");
    assert_eq!(json[0]["offset_days"], -30);

    let config = MacroConfiguration::new(MacroType::AppealLong, date(2025, 8, 20), true);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"appello-lungo\""));
    let back: MacroConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

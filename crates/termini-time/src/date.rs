//! `Date` type.
//!
//! Dates are stored as a serial number of days, with serial 1 being
//! January 1, 1900.  Only the day matters: there is no time of day and no
//! time zone, so two dates compare equal exactly when they name the same
//! calendar day.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1901-01-01 to 2199-12-31.
//!
//! Every arithmetic operation returns a new value and reports a result
//! outside that range as [`Error::InvalidDateInput`].

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use termini_core::errors::{Error, Result};
use termini_core::parsers;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1901.
    pub const MIN: Date = Date(366);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    /// First supported year.
    pub const MIN_YEAR: u16 = 1901;

    /// Last supported year.
    pub const MAX_YEAR: u16 = 2199;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::InvalidDateInput(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::InvalidDateInput(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDateInput(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDateInput(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        match (self.0 - 1).rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    /// Return `true` on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days (negative moves backward).
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::InvalidDateInput(format!("{self} + {n} days overflows")))
            .and_then(Date::from_serial)
    }

    /// Advance by `n` units of `unit`.
    ///
    /// Month and year steps keep the day of the month; when the target month
    /// is shorter the day is clamped to its last day (January 31 + 1 month is
    /// February 28 or 29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.saturating_mul(7)),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let total_months = y as i64 * 12 + (m as i64 - 1) + n as i64;
                let new_y = total_months.div_euclid(12);
                let new_m = (total_months.rem_euclid(12) + 1) as u8;
                if !(Self::MIN_YEAR as i64..=Self::MAX_YEAR as i64).contains(&new_y) {
                    return Err(Error::InvalidDateInput(format!(
                        "{self} + {n} months: year {new_y} out of range"
                    )));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(n.saturating_mul(12), TimeUnit::Months),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Formatting ───────────────────────────────────────────────────────────

    /// Format as `dd/mm/yyyy`, the form used on Italian court documents.
    pub fn format_dmy(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{d:02}/{m:02}/{y:04}")
    }

    /// Return the `YYYY-MM` key used to bucket deadlines by month.
    pub fn month_year_key(&self) -> String {
        let (y, m, _) = self.ymd();
        format!("{y:04}-{m:02}")
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing and display ───────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` or `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parsers::parse_date(s)
            .ok_or_else(|| Error::InvalidDateInput(format!("cannot parse {s:?} as a date")))?;
        Date::from_ymd(y, m, d)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(value.year())
            .map_err(|_| Error::InvalidDateInput(format!("year {} out of range", value.year())))?;
        Date::from_ymd(year, value.month() as u8, value.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(value: Date) -> Result<Self> {
        let (y, m, d) = value.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .ok_or_else(|| Error::InvalidDateInput(format!("{value} has no chrono equivalent")))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Days in years 1900..year, plus the leap days among them
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Date::from_ymd(1901, 1, 1).unwrap(), Date::MIN);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
        assert!(Date::from_ymd(1900, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn roundtrip() {
        let dates = [
            (1901, 1, 1),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2025, 8, 31),
            (2025, 9, 1),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn invalid_calendar_dates() {
        assert!(matches!(
            Date::from_ymd(2025, 2, 29),
            Err(Error::InvalidDateInput(_))
        ));
        assert!(Date::from_ymd(2025, 4, 31).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
        assert!(Date::from_ymd(2025, 1, 0).is_err());
    }

    #[test]
    fn weekday() {
        assert_eq!(Date::from_ymd(2025, 10, 15).unwrap().weekday(), Weekday::Wednesday);
        assert_eq!(Date::from_ymd(2025, 10, 5).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(Date::from_ymd(2024, 1, 6).unwrap().weekday(), Weekday::Saturday);
    }

    #[test]
    fn advance_months_clamps() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        assert_eq!(d.advance(1, TimeUnit::Months).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
        let d = Date::from_ymd(2023, 8, 31).unwrap();
        assert_eq!(d.advance(6, TimeUnit::Months).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
        let d = Date::from_ymd(2025, 9, 1).unwrap();
        assert_eq!(d.advance(6, TimeUnit::Months).unwrap(), Date::from_ymd(2026, 3, 1).unwrap());
        assert_eq!(d.advance(-9, TimeUnit::Months).unwrap(), Date::from_ymd(2024, 12, 1).unwrap());
    }

    #[test]
    fn arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d.add_days(31).unwrap();
        assert_eq!(d2.ymd(), (2023, 2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
    }

    #[test]
    fn parse_and_format() {
        let d: Date = "2025-10-15".parse().unwrap();
        assert_eq!(d.to_string(), "2025-10-15");
        assert_eq!(d.format_dmy(), "15/10/2025");
        assert_eq!(d.month_year_key(), "2025-10");
        assert_eq!("15/10/2025".parse::<Date>().unwrap(), d);
        assert!(matches!("2025-02-30".parse::<Date>(), Err(Error::InvalidDateInput(_))));
        assert!(matches!("not a date".parse::<Date>(), Err(Error::InvalidDateInput(_))));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_conversions() {
        let naive = chrono::NaiveDate::from_ymd_opt(2025, 4, 21).unwrap();
        let d = Date::try_from(naive).unwrap();
        assert_eq!(d, Date::from_ymd(2025, 4, 21).unwrap());
        assert_eq!(chrono::NaiveDate::try_from(d).unwrap(), naive);
        let too_early = chrono::NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
        assert!(Date::try_from(too_early).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_iso_string() {
        let d = Date::from_ymd(2025, 9, 1).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-09-01\"");
        let back: Date = serde_json::from_str("\"2025-09-01\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Date>("\"2025-09-31\"").is_err());
    }
}

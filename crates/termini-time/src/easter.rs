//! Gregorian Easter computation.
//!
//! Uses the Gauss algorithm in the Meeus/Jones/Butcher form, which is exact
//! for every Gregorian year and needs no lookup table.

use crate::date::Date;
use termini_core::errors::Result;

/// Return `(month, day)` of Easter Sunday for `year`.
///
/// `month` is 3 (March) or 4 (April).
pub fn easter_sunday_month_day(year: u16) -> (u8, u8) {
    let year = year as i32;
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Easter Sunday of `year`.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let (month, day) = easter_sunday_month_day(year);
    Date::from_ymd(year, month, day)
}

/// Easter Monday (Pasquetta) of `year`.
pub fn easter_monday(year: u16) -> Result<Date> {
    easter_sunday(year)?.add_days(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easter_sundays() {
        let known = [
            (1961, 4, 2),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
            (1913, 3, 23),
        ];
        for (y, m, d) in known {
            assert_eq!(easter_sunday_month_day(y), (m, d), "Easter {y}");
        }
    }

    #[test]
    fn easter_monday_2025() {
        assert_eq!(easter_monday(2025).unwrap(), Date::from_ymd(2025, 4, 21).unwrap());
    }
}

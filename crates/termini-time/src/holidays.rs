//! Public-holiday tables.
//!
//! A [`HolidaySet`] is an immutable table of fixed month/day holidays plus
//! Easter-relative moveable ones.  [`HolidaySet::ITALY`] is the national
//! Italian table; other jurisdictions build their own set and inject it
//! through a [`CourtCalendar`](crate::calendars::CourtCalendar).

use std::borrow::Cow;

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::month::Month;
use termini_core::errors::{Error, Result};

/// A holiday falling on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedHoliday {
    /// Month of the holiday.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
    /// Display name.
    pub name: Cow<'static, str>,
}

impl FixedHoliday {
    /// Create a fixed holiday with a static name.
    pub const fn new(month: Month, day: u8, name: &'static str) -> Self {
        Self {
            month,
            day,
            name: Cow::Borrowed(name),
        }
    }

    /// Return `true` if `date` falls on this holiday.
    pub fn matches(&self, date: Date) -> bool {
        let (_, m, d) = date.ymd();
        m == self.month.number() && d == self.day
    }
}

/// A holiday at a fixed distance from Easter Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveableHoliday {
    /// Days after Easter Sunday (1 for Easter Monday).
    pub easter_offset: i16,
    /// Display name.
    pub name: Cow<'static, str>,
}

impl MoveableHoliday {
    /// Easter Monday (Pasquetta).
    pub const EASTER_MONDAY: MoveableHoliday = MoveableHoliday {
        easter_offset: 1,
        name: Cow::Borrowed("Lunedì dell'Angelo"),
    };

    /// Return the date of this holiday in `year`, if it is representable.
    pub fn date_in(&self, year: u16) -> Option<Date> {
        easter_sunday(year)
            .and_then(|easter| easter.add_days(self.easter_offset as i32))
            .ok()
    }

    /// Return `true` if `date` falls on this holiday.
    pub fn matches(&self, date: Date) -> bool {
        self.date_in(date.year()) == Some(date)
    }
}

/// An immutable table of public holidays.
///
/// Deserialization validates like [`HolidaySet::new`].  Without a `moveable`
/// list the set keeps Easter Monday; an explicit empty list (`moveable = []`)
/// drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHolidaySet")
)]
pub struct HolidaySet {
    fixed: Cow<'static, [FixedHoliday]>,
    moveable: Cow<'static, [MoveableHoliday]>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHolidaySet {
    fixed: Vec<FixedHoliday>,
    #[serde(default = "default_moveable")]
    moveable: Vec<MoveableHoliday>,
}

#[cfg(feature = "serde")]
fn default_moveable() -> Vec<MoveableHoliday> {
    ITALIAN_MOVEABLE.to_vec()
}

#[cfg(feature = "serde")]
impl TryFrom<RawHolidaySet> for HolidaySet {
    type Error = Error;

    fn try_from(raw: RawHolidaySet) -> Result<Self> {
        Self::new(raw.fixed, raw.moveable)
    }
}

/// Italian national holidays with a fixed date.
const ITALIAN_FIXED: &[FixedHoliday] = &[
    FixedHoliday::new(Month::January, 1, "Capodanno"),
    FixedHoliday::new(Month::January, 6, "Epifania"),
    FixedHoliday::new(Month::April, 25, "Festa della Liberazione"),
    FixedHoliday::new(Month::May, 1, "Festa del Lavoro"),
    FixedHoliday::new(Month::June, 2, "Festa della Repubblica"),
    FixedHoliday::new(Month::August, 15, "Ferragosto"),
    FixedHoliday::new(Month::November, 1, "Ognissanti"),
    FixedHoliday::new(Month::December, 8, "Immacolata Concezione"),
    FixedHoliday::new(Month::December, 25, "Natale"),
    FixedHoliday::new(Month::December, 26, "Santo Stefano"),
];

const ITALIAN_MOVEABLE: &[MoveableHoliday] = &[MoveableHoliday::EASTER_MONDAY];

impl HolidaySet {
    /// Italian national holidays.
    pub const ITALY: HolidaySet = HolidaySet {
        fixed: Cow::Borrowed(ITALIAN_FIXED),
        moveable: Cow::Borrowed(ITALIAN_MOVEABLE),
    };

    /// Build a holiday set, rejecting impossible month/day pairs.
    pub fn new(fixed: Vec<FixedHoliday>, moveable: Vec<MoveableHoliday>) -> Result<Self> {
        let set = Self {
            fixed: Cow::Owned(fixed),
            moveable: Cow::Owned(moveable),
        };
        set.validate()?;
        Ok(set)
    }

    /// Check every fixed entry names a day that exists in a leap year.
    pub fn validate(&self) -> Result<()> {
        for h in self.fixed.iter() {
            // 2000 is a leap year, so February 29 is accepted.
            if Date::from_ymd(2000, h.month.number(), h.day).is_err() {
                return Err(Error::InvalidArgument(format!(
                    "holiday {:?} falls on non-existent day {} {}",
                    h.name, h.day, h.month
                )));
            }
        }
        Ok(())
    }

    /// The fixed-date entries.
    pub fn fixed(&self) -> &[FixedHoliday] {
        &self.fixed
    }

    /// The Easter-relative entries.
    pub fn moveable(&self) -> &[MoveableHoliday] {
        &self.moveable
    }

    /// Return `true` if `date` is a holiday in this set.
    pub fn contains(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return the name of the holiday falling on `date`, if any.
    pub fn holiday_name(&self, date: Date) -> Option<&str> {
        self.fixed
            .iter()
            .find(|h| h.matches(date))
            .map(|h| &*h.name)
            .or_else(|| {
                self.moveable
                    .iter()
                    .find(|h| h.matches(date))
                    .map(|h| &*h.name)
            })
    }
}

impl Default for HolidaySet {
    fn default() -> Self {
        Self::ITALY
    }
}

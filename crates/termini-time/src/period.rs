//! `Period`: a signed time span expressed in a [`TimeUnit`].
//!
//! Statutory terms are periods relative to a reference date: `-40D` is
//! "forty calendar days before the hearing", `6M` is "six months after
//! publication".

use crate::time_unit::TimeUnit;

/// A time span made up of a signed integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units; negative for terms counted backward.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub const fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// A period of `n` calendar days.
    pub const fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// A period of `n` calendar months.
    pub const fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// Return `true` when the term runs backward from its reference date.
    pub fn is_backward(&self) -> bool {
        self.length < 0
    }

    /// Normalise weeks to days and years to months.
    pub fn normalized(self) -> Self {
        match self.unit {
            TimeUnit::Weeks => Self::days(self.length.saturating_mul(7)),
            TimeUnit::Years => Self::months(self.length.saturating_mul(12)),
            TimeUnit::Days | TimeUnit::Months => self,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

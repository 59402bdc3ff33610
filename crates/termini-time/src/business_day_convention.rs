//! Business-day convention for the prudential adjustment.

/// Which way a deadline that falls on a non-working day is moved.
///
/// Terms counted backward from a hearing are moved to the nearest *earlier*
/// working day; terms counted forward from a notification or publication are
/// moved to the nearest *later* one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Choose the first working day after the given non-working day.
    Following,
    /// Choose the first working day before the given non-working day.
    Preceding,
}

impl BusinessDayConvention {
    /// One-day step in the direction of the convention.
    pub fn step(&self) -> i32 {
        match self {
            BusinessDayConvention::Following => 1,
            BusinessDayConvention::Preceding => -1,
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::Preceding => "Preceding",
        };
        write!(f, "{s}")
    }
}

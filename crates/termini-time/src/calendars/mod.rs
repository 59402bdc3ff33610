//! Concrete judicial calendars.

/// User-configured calendar for jurisdictional variants.
pub mod court_calendar;

/// Italian civil courts.
pub mod italy;

pub use court_calendar::CourtCalendar;
pub use italy::Italy;

//! # termini
//!
//! Procedural deadline calculation for Italian civil courts.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on the
//! individual `termini-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use termini::deadlines::{calculate_macro_deadlines, MacroConfiguration, MacroType};
//! use termini::time::Date;
//!
//! let hearing = Date::from_ymd(2025, 9, 10)?;
//! let config = MacroConfiguration::new(MacroType::Art281Duodecies, hearing, true);
//! for deadline in calculate_macro_deadlines(&config)? {
//!     assert_ne!(deadline.result_date.month(), 8);
//! }
//! # Ok::<(), termini::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsers.
pub use termini_core as core;

/// Dates, calendars, and calendar-day counting.
pub use termini_time as time;

/// Statutory deadline sets.
pub use termini_deadlines as deadlines;

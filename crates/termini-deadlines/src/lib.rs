//! # termini-deadlines
//!
//! Statutory deadline sets for Italian civil procedure.  A
//! [`MacroConfiguration`] names a macro deadline (art. 171-ter, 189,
//! 281-duodecies, or an appeal term), its reference date, and whether the
//! August suspension applies; the builders expand it into the ordered list
//! of sub-deadlines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Deadline set builders and dispatch.
pub mod builders;

/// `MacroConfiguration`.
pub mod config;

/// `MacroType` and `ReferenceKind`.
pub mod macro_type;

/// Preview with overrides and days-remaining.
pub mod preview;

/// `DeadlineCalculationResult`.
pub mod result;

/// Statutory term tables.
pub mod terms;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builders::{
    calculate_171_ter, calculate_189, calculate_281_duodecies, calculate_appeal_long,
    calculate_appeal_short, calculate_from_input, calculate_macro_deadlines,
    calculate_macro_deadlines_with,
};
pub use config::MacroConfiguration;
pub use macro_type::{MacroType, ReferenceKind};
pub use preview::{days_remaining, DeadlinePreview};
pub use result::DeadlineCalculationResult;
pub use terms::StatutoryTerm;

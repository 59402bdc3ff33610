//! # termini-core
//!
//! Foundational pieces shared by the other `termini` crates: the error
//! hierarchy with its `ensure!` macro, and the small text parsers
//! used when dates arrive as strings from the presentation or persistence
//! layers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Date string parsers.
pub mod parsers;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

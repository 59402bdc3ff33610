//! Error types for termini.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  All errors are
//! synchronous and fatal to the call that raised them; nothing is retried.

use thiserror::Error;

/// The top-level error type used throughout termini.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested macro deadline type is not one of the statutory ones.
    #[error("unsupported macro type: {0}")]
    UnsupportedMacroType(String),

    /// A reference date is malformed, or date arithmetic left the supported
    /// range.
    #[error("invalid date input: {0}")]
    InvalidDateInput(String),

    /// An argument is outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout termini.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use termini_core::{ensure, errors::Error};
/// fn positive(n: u32) -> termini_core::errors::Result<u32> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

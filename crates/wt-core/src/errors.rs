//! Error types for worktime.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! is the single `thiserror`-derived [`Error`] enum below.  The `ensure!`
//! macro is a shorthand for precondition checks.

use thiserror::Error;

/// The top-level error type used throughout worktime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (produced by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A required instant was not supplied.
    #[error("invalid argument: missing {0} instant")]
    MissingInput(&'static str),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid calendar value or out-of-range date arithmetic.
    #[error("date error: {0}")]
    Date(String),

    /// A query string lacks a keyword the helper needs.
    #[error("query error: {0}")]
    Query(String),
}

/// Shorthand `Result` type used throughout worktime.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wt_core::{ensure, errors::Error};
/// fn positive(x: i64) -> wt_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
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

//! Error types for feriae.
//!
//! A single `thiserror`-derived enum covers every failure mode in the
//! workspace. The kernel distinguishes catalog-load failures (malformed
//! declarative data, caught fail-fast) from date-domain failures (a rule
//! resolving outside the supported civil range).

use thiserror::Error;

/// The top-level error type used throughout feriae.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: invalid components or out of the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed catalog data, detected at catalog-load time.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout feriae.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use feriae_core::{ensure, errors::Error};
/// fn positive(year: i32) -> feriae_core::errors::Result<i32> {
///     ensure!(year > 0, "year must be positive, got {year}");
///     Ok(year)
/// }
/// assert!(positive(2024).is_ok());
/// assert!(positive(0).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use feriae_core::{fail, errors::Error};
/// fn always_err() -> feriae_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

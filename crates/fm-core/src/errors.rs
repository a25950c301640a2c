//! Error types for finmath-rs.
//!
//! The library distinguishes two failure shapes. Mathematically undefined
//! configurations (a perpetuity growth rate at or above the discount rate, a
//! non-positive half-life, a division-by-zero rate) raise
//! [`Error::InvalidDomain`] before any computation proceeds. Search
//! non-convergence is not an error at all: search-based functions return
//! `Option<_>` and report "no solution" as `None`, since an unreachable
//! target is an expected outcome for the caller's decision logic.

use thiserror::Error;

/// The top-level error type used throughout finmath-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The inputs describe a mathematically undefined configuration.
    ///
    /// Raised before any computation proceeds; a call that returns this
    /// never produces a partial or approximate result.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
}

/// Shorthand `Result` type used throughout finmath-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a domain precondition.
///
/// Returns `Err(Error::InvalidDomain(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fm_core::ensure;
/// fn positive(x: f64) -> fm_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidDomain(
                format!($($msg)*)
            ));
        }
    };
}

//! # fm-core
//!
//! Core types, error definitions, and floating-point comparison helpers
//! shared across all other crates in the finmath-rs workspace.
//!
//! Every quantity in the library is a double-precision real number; the
//! aliases below exist to make signatures self-describing, not to introduce
//! new types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Floating-point comparison helpers.
pub mod comparison;

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A time measurement in periods (pure real number, no calendar semantics).
pub type Time = Real;

/// A discount factor in (0, 1] for non-negative rates.
pub type DiscountFactor = Real;

/// Non-negative integer type used for period counts.
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};

//! # finmath
//!
//! A deterministic financial-mathematics core: time-value-of-money
//! discounting, parametric scoring curves, reverse discounted-cash-flow
//! valuation, and time-decay scoring.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fm-*` crates.
//!
//! Everything here is a pure function over explicit numeric inputs: no
//! I/O, no state, no wall clock, and no embedded policy constants — every
//! rate, margin, and half-life is an argument.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! finmath = "0.1"
//! ```
//!
//! ```rust
//! use finmath::valuation::{reverse_dcf, ValuationInputs};
//!
//! let inputs = ValuationInputs {
//!     enterprise_value: 800.0,
//!     base_value: 500.0,
//!     operating_margin: 0.15,
//!     tax_rate: 0.25,
//!     reinvestment_ratio: 0.5,
//!     discount_rate: 0.10,
//!     stable_growth: 0.03,
//!     horizon: 10,
//!     trial_growth: 0.08,
//! };
//! let result = reverse_dcf(&inputs).unwrap();
//! assert!((result.implied_value - 803.687361).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use fm_core as core;

/// Time-value-of-money primitives.
pub use fm_tvm as tvm;

/// Parametric scoring-curve shapes.
pub use fm_curves as curves;

/// Time-decay and half-life conversions.
pub use fm_decay as decay;

/// Reverse-DCF valuation and implied-rate root finding.
pub use fm_valuation as valuation;

//! # fm-valuation
//!
//! The valuation and root-finding engine: a free-cash-flow projector, a
//! reverse discounted-cash-flow valuation with a Gordon-growth terminal
//! value, and a bounded bisection search for the discount rate implied by a
//! target present value.
//!
//! Data flows one way: trial parameters → projector → cash-flow series →
//! discounting → scalar result. The root-finder wraps the discounting step
//! in a search loop and never calls the projector.
//!
//! Everything is a pure function over immutable value records; any number
//! of callers may run concurrently with no coordination.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod projector;
mod solver;
mod valuation;

pub use projector::{project_cash_flows, PeriodCashFlow, ValuationInputs};
pub use solver::{implied_discount_rate, series_present_value, RootSearchConfig};
pub use valuation::{reverse_dcf, ValuationResult};

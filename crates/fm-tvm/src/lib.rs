//! # fm-tvm
//!
//! Time-value-of-money primitives: discrete and continuous discounting and
//! compounding, plus the closed-form implied rate between two observed
//! values.
//!
//! All functions are pure and operate on explicit numeric arguments; no
//! calendar or day-count conventions are involved — a "period" is a plain
//! real number.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod discount;
mod implied;

pub use discount::{
    compound_continuous, compound_to_future, discount_continuous, discount_to_present,
};
pub use implied::implied_rate;

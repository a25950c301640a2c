//! # fm-curves
//!
//! Parametric scoring-curve shapes: the logistic family, exponential and
//! power-law growth, and bounded easing curves (smoothstep, clamped linear
//! interpolation, normalized tanh).
//!
//! Every curve takes its shape parameters as explicit arguments; the crate
//! embeds no midpoints, steepnesses, or scales of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod logistic;
mod power;
mod smooth;

pub use logistic::{inverse_logistic, logistic, normalized_logistic};
pub use power::{exponential_curve, power_law};
pub use smooth::{lerp_clamped, smoothstep, tanh_normalized};

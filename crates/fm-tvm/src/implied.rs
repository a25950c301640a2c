//! Closed-form implied rate between two observed values.

use crate::discount::compound_to_future;
use fm_core::comparison::close_enough;
use fm_core::{Rate, Real, Time};

/// Relative tolerance for the re-compounding verification step.
const VERIFY_TOLERANCE: Real = 1e-6;

/// The discrete rate that compounds `present_value` into `future_value`
/// over `periods`.
///
/// Computed analytically as `(future/present)^(1/periods) - 1`, then
/// verified by re-compounding: the candidate rate is only returned when
/// compounding `present_value` forward reproduces `future_value` within
/// relative tolerance.
///
/// Returns `None` when either value is non-positive, or when `periods == 0`
/// and the two values differ (no finite rate reconciles them). Zero periods
/// with equal values implies a rate of `0.0`.
pub fn implied_rate(present_value: Real, future_value: Real, periods: Time) -> Option<Rate> {
    if present_value <= 0.0 || future_value <= 0.0 {
        return None;
    }
    if periods == 0.0 {
        return close_enough(present_value, future_value, 16).then_some(0.0);
    }

    let rate = (future_value / present_value).powf(1.0 / periods) - 1.0;

    let recompounded = compound_to_future(present_value, rate, periods);
    let relative_error = ((recompounded - future_value) / future_value).abs();
    (relative_error <= VERIFY_TOLERANCE).then_some(rate)
}

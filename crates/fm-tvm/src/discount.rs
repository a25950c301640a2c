//! Discrete and continuous discounting and compounding.

use fm_core::{ensure, Rate, Real, Result, Time};

/// Discount a future value back to the present at a discrete rate.
///
/// `present = future_value / (1 + rate)^periods`
///
/// # Errors
/// Returns `InvalidDomain` when `rate == -1` (the compound factor vanishes
/// and the discount is a division by zero).
pub fn discount_to_present(future_value: Real, rate: Rate, periods: Time) -> Result<Real> {
    ensure!(
        rate != -1.0,
        "cannot discount at a rate of -100% (division by zero)"
    );
    Ok(future_value / (1.0 + rate).powf(periods))
}

/// Compound a present value forward at a discrete rate.
///
/// `future = present_value * (1 + rate)^periods`
pub fn compound_to_future(present_value: Real, rate: Rate, periods: Time) -> Real {
    present_value * (1.0 + rate).powf(periods)
}

/// Discount a value back over `time` at a continuously-compounded rate.
///
/// `present = value * e^(-rate·time)`
pub fn discount_continuous(value: Real, rate: Rate, time: Time) -> Real {
    value * (-rate * time).exp()
}

/// Compound a value forward over `time` at a continuously-compounded rate.
///
/// `future = value * e^(rate·time)`
pub fn compound_continuous(value: Real, rate: Rate, time: Time) -> Real {
    value * (rate * time).exp()
}

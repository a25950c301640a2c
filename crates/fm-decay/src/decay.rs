//! Decay formulas.

use fm_core::{ensure, Real, Result, Time};

/// Exponential decay: the value halves every `half_life` elapsed.
///
/// `f(elapsed) = initial * 2^(-elapsed / half_life)`
///
/// # Errors
/// Returns `InvalidDomain` when `half_life <= 0`.
pub fn exponential_decay(initial: Real, half_life: Time, elapsed: Time) -> Result<Real> {
    ensure!(half_life > 0.0, "half-life must be positive, got {half_life}");
    Ok(initial * 0.5_f64.powf(elapsed / half_life))
}

/// First-order power decay with characteristic `time_scale`.
///
/// `f(elapsed) = initial / (1 + elapsed / time_scale)`
///
/// Falls off much more slowly than exponential decay: half the initial
/// value after one time scale, a third after two.
///
/// # Errors
/// Returns `InvalidDomain` when `time_scale <= 0`.
pub fn power_decay(initial: Real, time_scale: Time, elapsed: Time) -> Result<Real> {
    ensure!(
        time_scale > 0.0,
        "time scale must be positive, got {time_scale}"
    );
    Ok(initial / (1.0 + elapsed / time_scale))
}

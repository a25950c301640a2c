//! Half-life ⇄ decay-constant conversions.
//!
//! Both directions are the same map, `x ↦ ln 2 / x`, restricted to positive
//! inputs.

use fm_core::{ensure, Real, Result};
use std::f64::consts::LN_2;

/// Decay constant λ for a given half-life: `λ = ln 2 / half_life`.
///
/// # Errors
/// Returns `InvalidDomain` when `half_life <= 0`.
pub fn half_life_to_decay_constant(half_life: Real) -> Result<Real> {
    ensure!(half_life > 0.0, "half-life must be positive, got {half_life}");
    Ok(LN_2 / half_life)
}

/// Half-life for a given decay constant: `half_life = ln 2 / λ`.
///
/// # Errors
/// Returns `InvalidDomain` when `lambda <= 0`.
pub fn decay_constant_to_half_life(lambda: Real) -> Result<Real> {
    ensure!(lambda > 0.0, "decay constant must be positive, got {lambda}");
    Ok(LN_2 / lambda)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let lambda = half_life_to_decay_constant(12.5).unwrap();
        let back = decay_constant_to_half_life(lambda).unwrap();
        assert!((back - 12.5).abs() < 1e-12, "got {back}");
    }

    #[test]
    fn unit_half_life_is_ln_two() {
        let lambda = half_life_to_decay_constant(1.0).unwrap();
        assert!((lambda - LN_2).abs() < 1e-15);
    }

    #[test]
    fn non_positive_inputs_fail() {
        assert!(half_life_to_decay_constant(0.0).is_err());
        assert!(half_life_to_decay_constant(-1.0).is_err());
        assert!(decay_constant_to_half_life(0.0).is_err());
        assert!(decay_constant_to_half_life(-0.5).is_err());
    }

    #[test]
    fn matches_continuous_decay() {
        // Decaying for one half-life at rate λ must halve the value.
        let lambda = half_life_to_decay_constant(10.0).unwrap();
        let decayed = 100.0 * (-lambda * 10.0_f64).exp();
        assert!((decayed - 50.0).abs() < 1e-9, "got {decayed}");
    }
}

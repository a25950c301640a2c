//! Exponential and power-law growth curves.

use fm_core::{ensure, Rate, Real, Result};

/// Exponential curve `scale * e^(rate·t)`.
pub fn exponential_curve(t: Real, scale: Real, rate: Rate) -> Real {
    scale * (rate * t).exp()
}

/// Power-law curve `scale * t^exponent`.
///
/// # Errors
/// Returns `InvalidDomain` for negative `t` with a non-integer exponent
/// (the real-valued power is undefined there).
pub fn power_law(t: Real, scale: Real, exponent: Real) -> Result<Real> {
    ensure!(
        t >= 0.0 || exponent.fract() == 0.0,
        "power law is undefined for negative t ({t}) with non-integer exponent ({exponent})"
    );
    Ok(scale * t.powf(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_at_zero_is_scale() {
        assert!((exponential_curve(0.0, 42.0, 0.3) - 42.0).abs() < 1e-15);
    }

    #[test]
    fn exponential_negative_rate_decays() {
        let y = exponential_curve(10.0, 100.0, -0.1);
        assert!((y - 100.0 * (-1.0_f64).exp()).abs() < 1e-9, "got {y}");
    }

    #[test]
    fn power_law_square() {
        let y = power_law(3.0, 2.0, 2.0).unwrap();
        assert!((y - 18.0).abs() < 1e-12, "got {y}");
    }

    #[test]
    fn power_law_negative_base_integer_exponent() {
        let y = power_law(-2.0, 1.0, 3.0).unwrap();
        assert!((y + 8.0).abs() < 1e-12, "got {y}");
    }

    #[test]
    fn power_law_negative_base_fractional_exponent_fails() {
        assert!(power_law(-2.0, 1.0, 0.5).is_err());
    }
}

//! The logistic (sigmoid) family.

use fm_core::Real;

/// Logistic curve with asymptote `l`, steepness `k`, and midpoint `t0`.
///
/// `f(t) = l / (1 + e^(-k·(t - t0)))`
///
/// At `t == t0` the value is exactly `l / 2` for every steepness, including
/// negative and zero `k`.
pub fn logistic(t: Real, l: Real, k: Real, t0: Real) -> Real {
    l / (1.0 + (-k * (t - t0)).exp())
}

/// Logistic curve with a unit asymptote; value in (0, 1).
pub fn normalized_logistic(t: Real, k: Real, t0: Real) -> Real {
    logistic(t, 1.0, k, t0)
}

/// Invert the logistic curve: the `t` at which [`logistic`] reaches `y`.
///
/// Returns `None` when `y` lies outside the open interval `(0, l)` — the
/// sigmoid never attains its asymptotes — or when `k == 0`, since a flat
/// curve has no preimage.
pub fn inverse_logistic(y: Real, l: Real, k: Real, t0: Real) -> Option<Real> {
    if y <= 0.0 || y >= l || k == 0.0 {
        return None;
    }
    Some(t0 - (l / y - 1.0).ln() / k)
}

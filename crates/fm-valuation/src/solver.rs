//! Bounded bisection search for the discount rate implied by a target
//! present value.
//!
//! Bisection is chosen over derivative-based methods (Newton, secant) for
//! robustness: the present-value function of a mixed-sign cash-flow series
//! can have awkward curvature, and bisection cannot diverge inside its
//! bracket. The cost is a caller-supplied bracket and the assumption that
//! present value falls monotonically as the rate rises — the search does
//! **not** verify that the target is bracketed before starting, and an
//! unreachable target simply exhausts the iteration budget.

use fm_core::{Rate, Real};

/// Search parameters for [`implied_discount_rate`].
///
/// These are algorithmic knobs, not business policy, so they carry
/// defaults. The bracket must satisfy `lower_bound < upper_bound` for the
/// search to be meaningful; this is deliberately not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSearchConfig {
    /// Lower edge of the rate bracket.
    pub lower_bound: Rate,
    /// Upper edge of the rate bracket.
    pub upper_bound: Rate,
    /// Absolute tolerance on `|present value - target|`.
    pub tolerance: Real,
    /// Iteration budget before the search reports no solution.
    pub max_iterations: u32,
}

impl Default for RootSearchConfig {
    fn default() -> Self {
        Self {
            lower_bound: 0.001,
            upper_bound: 0.50,
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

/// Present value of a cash-flow series at a flat discount rate.
///
/// `Σ cash_flows[i] / (1 + rate)^(i + 1)` — the first entry is one period
/// out. Accumulation runs in series order, never reordered. An empty
/// series evaluates to 0 at every rate.
pub fn series_present_value(cash_flows: &[Real], rate: Rate) -> Real {
    let mut total = 0.0;
    for (i, cash_flow) in cash_flows.iter().enumerate() {
        total += cash_flow / (1.0 + rate).powi(i as i32 + 1);
    }
    total
}

/// Find the flat discount rate at which `cash_flows` is worth `target`.
///
/// Standard bisection over the configured bracket. Each iteration
/// evaluates the midpoint rate: within tolerance of the target, the
/// midpoint is returned at once; a present value above the target means
/// the rate is too low and the lower bound moves up, otherwise the upper
/// bound moves down.
///
/// Returns `None` once the iteration budget is exhausted — never the last
/// midpoint, which would hand the caller a stale near-miss as if it had
/// converged. A degenerate all-zero series has present value 0 at every
/// rate, so a zero target converges at the very first midpoint; no special
/// case is needed. Empty series and inverted brackets are accepted
/// unchecked.
pub fn implied_discount_rate(
    cash_flows: &[Real],
    target: Real,
    config: &RootSearchConfig,
) -> Option<Rate> {
    let mut lower = config.lower_bound;
    let mut upper = config.upper_bound;

    for _ in 0..config.max_iterations {
        let mid = 0.5 * (lower + upper);
        let present_value = series_present_value(cash_flows, mid);
        if (present_value - target).abs() < config.tolerance {
            return Some(mid);
        }
        if present_value > target {
            lower = mid;
        } else {
            upper = mid;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_value_single_flow() {
        let pv = series_present_value(&[110.0], 0.10);
        assert!((pv - 100.0).abs() < 1e-12, "got {pv}");
    }

    #[test]
    fn present_value_empty_series_is_zero() {
        assert_eq!(series_present_value(&[], 0.10), 0.0);
        assert_eq!(series_present_value(&[], 0.499), 0.0);
    }

    #[test]
    fn recovers_known_rate() {
        let cash_flows = vec![100.0; 10];
        let target = series_present_value(&cash_flows, 0.08);
        let rate = implied_discount_rate(&cash_flows, target, &RootSearchConfig::default())
            .expect("target generated inside the bracket");
        assert!((rate - 0.08).abs() < 1e-6, "got {rate}");
    }

    #[test]
    fn mixed_sign_series_converges() {
        let cash_flows = vec![-50.0, 120.0, 80.0, -10.0, 200.0];
        let target = series_present_value(&cash_flows, 0.15);
        let rate = implied_discount_rate(&cash_flows, target, &RootSearchConfig::default())
            .expect("target generated inside the bracket");
        let check = series_present_value(&cash_flows, rate);
        assert!((check - target).abs() < 1e-6, "rate {rate}, pv {check}");
    }

    #[test]
    fn unreachable_target_returns_none() {
        let cash_flows = vec![100.0; 5];
        // PV over the default bracket never comes close to a million.
        let found = implied_discount_rate(&cash_flows, 1.0e6, &RootSearchConfig::default());
        assert_eq!(found, None);
    }

    #[test]
    fn empty_series_zero_target_converges_immediately() {
        let config = RootSearchConfig::default();
        let rate = implied_discount_rate(&[], 0.0, &config)
            .expect("zero target matches the zero present value everywhere");
        // PV is identically 0, so the very first midpoint satisfies the
        // tolerance check.
        assert_eq!(rate, 0.5 * (config.lower_bound + config.upper_bound));
    }

    #[test]
    fn empty_series_nonzero_target_returns_none() {
        assert_eq!(
            implied_discount_rate(&[], 500.0, &RootSearchConfig::default()),
            None
        );
    }

    #[test]
    fn all_zero_series_behaves_like_empty() {
        let config = RootSearchConfig::default();
        let rate = implied_discount_rate(&[0.0, 0.0, 0.0], 0.0, &config).unwrap();
        assert_eq!(rate, 0.5 * (config.lower_bound + config.upper_bound));
        assert_eq!(implied_discount_rate(&[0.0, 0.0, 0.0], 42.0, &config), None);
    }

    #[test]
    fn tight_bracket_still_converges() {
        let cash_flows = vec![75.0; 20];
        let target = series_present_value(&cash_flows, 0.101);
        let config = RootSearchConfig {
            lower_bound: 0.10,
            upper_bound: 0.11,
            ..RootSearchConfig::default()
        };
        let rate = implied_discount_rate(&cash_flows, target, &config).unwrap();
        assert!((rate - 0.101).abs() < 1e-5, "got {rate}");
    }
}

//! Property tests for the discounting primitives.
//!
//! Compounding a value forward and discounting it back at the same rate and
//! period count must recover the original value; the analytic implied rate
//! must re-compound to the observed future value.

use fm_tvm::{compound_to_future, discount_to_present, implied_rate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn compound_then_discount_recovers_value(
        value in 0.01_f64..1.0e6,
        rate in -0.99_f64..5.0,
        periods in 0.0_f64..50.0,
    ) {
        let fv = compound_to_future(value, rate, periods);
        let back = discount_to_present(fv, rate, periods).unwrap();
        let relative = ((back - value) / value).abs();
        prop_assert!(relative < 1e-6, "value {value}, back {back}");
    }

    #[test]
    fn implied_rate_recompounds(
        present in 1.0_f64..1.0e6,
        future in 1.0_f64..1.0e6,
        periods in 1.0_f64..50.0,
    ) {
        let rate = implied_rate(present, future, periods)
            .expect("positive values over a positive horizon always imply a rate");
        let fv = compound_to_future(present, rate, periods);
        let relative = ((fv - future) / future).abs();
        prop_assert!(relative < 1e-6, "rate {rate}, fv {fv}");
    }
}

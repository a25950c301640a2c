//! Reverse-DCF assembly: explicit-period present value plus a
//! Gordon-growth terminal value.

use crate::projector::{project_cash_flows, ValuationInputs};
use fm_core::{Real, Result};
use fm_tvm::discount_to_present;

/// The implied enterprise value for one trial growth rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationResult {
    /// Sum of the present values of the explicit forecast period.
    pub explicit_present_value: Real,
    /// Free cash flow of the terminal forecast period (undiscounted).
    pub terminal_free_cash_flow: Real,
    /// Gordon-growth terminal value at the end of the horizon
    /// (undiscounted).
    pub terminal_value: Real,
    /// Terminal value discounted back to period 0.
    pub terminal_present_value: Real,
    /// Implied total value: explicit present value plus discounted
    /// terminal value.
    pub implied_value: Real,
}

/// Value the cash-flow series implied by `inputs` at its own trial growth
/// rate.
///
/// The explicit-period present values are accumulated in period order
/// 1 → horizon; summation is never reordered, so results are reproducible
/// bit for bit. The terminal value is the Gordon-growth perpetuity
/// `fcf * (1 + g) / (r - g)` on the terminal period's free cash flow,
/// discounted back over the full horizon at the same rate as the explicit
/// forecast.
///
/// # Errors
/// Exactly the projector's failure modes; the terminal perpetuity is
/// well-defined once `stable_growth < discount_rate` has been enforced.
pub fn reverse_dcf(inputs: &ValuationInputs) -> Result<ValuationResult> {
    let flows = project_cash_flows(inputs)?;

    let mut explicit_present_value = 0.0;
    for cf in &flows {
        explicit_present_value += cf.present_value;
    }

    // horizon >= 1 is enforced by the projector
    let terminal_free_cash_flow = flows.last().unwrap().free_cash_flow;

    let terminal_value = terminal_free_cash_flow * (1.0 + inputs.stable_growth)
        / (inputs.discount_rate - inputs.stable_growth);
    let terminal_present_value =
        discount_to_present(terminal_value, inputs.discount_rate, inputs.horizon as Real)?;

    Ok(ValuationResult {
        explicit_present_value,
        terminal_free_cash_flow,
        terminal_value,
        terminal_present_value,
        implied_value: explicit_present_value + terminal_present_value,
    })
}

//! Free-cash-flow projection over an explicit forecast horizon.

use fm_core::{ensure, Natural, Rate, Real, Result};
use fm_tvm::discount_to_present;

/// Inputs to a reverse-DCF valuation.
///
/// Every field carrying business policy is mandatory; the record has no
/// `Default`. Rates and fractions are decimals (0.15 = 15 %), the horizon
/// is a count of forecast periods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationInputs {
    /// Observed enterprise value the valuation is reconciled against.
    /// Informational only — the forward calculation never reads it.
    pub enterprise_value: Real,
    /// Base value (e.g. revenue) in period 0. Must be positive.
    pub base_value: Real,
    /// Operating margin on the projected base value.
    pub operating_margin: Real,
    /// Tax rate applied to operating profit.
    pub tax_rate: Real,
    /// Reinvestment required per unit of incremental base value.
    pub reinvestment_ratio: Real,
    /// Discount rate. Must exceed `stable_growth`.
    pub discount_rate: Rate,
    /// Perpetual growth rate beyond the horizon.
    pub stable_growth: Rate,
    /// Number of explicit forecast periods. Must be positive.
    pub horizon: Natural,
    /// Trial growth rate for the explicit forecast. Any real, including
    /// negative.
    pub trial_growth: Rate,
}

impl ValuationInputs {
    /// Check the domain invariants before any projection work begins.
    ///
    /// # Errors
    /// Returns `InvalidDomain` when `stable_growth >= discount_rate` (the
    /// terminal perpetuity would be undefined), when `base_value <= 0`, or
    /// when `horizon == 0`.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.stable_growth < self.discount_rate,
            "stable growth ({}) must be below the discount rate ({})",
            self.stable_growth,
            self.discount_rate
        );
        ensure!(
            self.base_value > 0.0,
            "base value must be positive, got {}",
            self.base_value
        );
        ensure!(self.horizon > 0, "horizon must be at least one period");
        Ok(())
    }
}

/// One forecast period of the projected cash-flow series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodCashFlow {
    /// Forecast period, 1-indexed.
    pub period: Natural,
    /// Base value compounded to this period at the trial growth rate.
    pub projected_value: Real,
    /// Net operating profit after tax.
    pub nopat: Real,
    /// Reinvestment against the period's incremental base value. Negative
    /// under a negative trial growth rate: a shrinking base releases
    /// capital. Intentional, not special-cased.
    pub reinvestment: Real,
    /// Free cash flow: NOPAT minus reinvestment.
    pub free_cash_flow: Real,
    /// Free cash flow discounted back to period 0.
    pub present_value: Real,
}

/// Project the free-cash-flow series for periods `1..=horizon`.
///
/// For each period `t`:
/// 1. `projected(t) = base_value * (1 + trial_growth)^t`
/// 2. `nopat(t) = projected(t) * operating_margin * (1 - tax_rate)`
/// 3. `reinvestment(t) = (projected(t) - projected(t-1)) * reinvestment_ratio`
/// 4. `free_cash_flow(t) = nopat(t) - reinvestment(t)`
/// 5. `present_value(t) = free_cash_flow(t) / (1 + discount_rate)^t`
///
/// # Errors
/// Fails fast with `InvalidDomain` (no partial results) on the invariants
/// checked by [`ValuationInputs::validate`], or when the discount rate is
/// exactly -100 %.
pub fn project_cash_flows(inputs: &ValuationInputs) -> Result<Vec<PeriodCashFlow>> {
    inputs.validate()?;

    let after_tax_margin = inputs.operating_margin * (1.0 - inputs.tax_rate);
    let mut flows = Vec::with_capacity(inputs.horizon as usize);
    let mut previous_value = inputs.base_value;

    for period in 1..=inputs.horizon {
        let projected_value = inputs.base_value * (1.0 + inputs.trial_growth).powi(period as i32);
        let nopat = projected_value * after_tax_margin;
        let reinvestment = (projected_value - previous_value) * inputs.reinvestment_ratio;
        let free_cash_flow = nopat - reinvestment;
        let present_value =
            discount_to_present(free_cash_flow, inputs.discount_rate, period as Real)?;
        flows.push(PeriodCashFlow {
            period,
            projected_value,
            nopat,
            reinvestment,
            free_cash_flow,
            present_value,
        });
        previous_value = projected_value;
    }

    Ok(flows)
}

//! Net present value of a flat annual benefit.
//!
//! `NPV = -initial_cost + sum(annual_benefit / (1 + r)^t)` for `t = 1..=years`,
//! where `r` is the discount rate as a fraction. The growth factor is built
//! year by year in `Decimal`, so no binary floating point enters the result.

use rust_decimal::Decimal;

use crate::config::RoundingConvention;
use crate::models::{AuditStep, NpvInput};

/// Fraction digits kept in a monetary result.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// The result of a valuation, including the audit step.
#[derive(Debug, Clone)]
pub struct NpvResult {
    /// Net present value, rounded to cents.
    pub npv: Decimal,
    /// Present value of each year's benefit, rounded to cents.
    pub discounted_benefits: Vec<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Yields the present value of each year's benefit, year 1 first.
///
/// Ends early once the growth factor no longer fits in a `Decimal` (every
/// later term is below the smallest representable amount) or once a term is
/// undefined because the factor reached zero.
fn present_values(input: &NpvInput) -> impl Iterator<Item = Decimal> {
    let years = usize::try_from(input.project_years).unwrap_or(0);
    let growth = Decimal::ONE + input.discount_rate_percent / Decimal::ONE_HUNDRED;
    let benefit = input.annual_benefit;

    std::iter::successors(Some(growth), move |factor| factor.checked_mul(growth))
        .take(years)
        .map_while(move |factor| benefit.checked_div(factor))
}

fn unrounded_npv(input: &NpvInput) -> Decimal {
    present_values(input).fold(-input.initial_cost, Decimal::saturating_add)
}

/// Computes the net present value, rounded to cents.
///
/// A horizon of zero or fewer years yields `-initial_cost`. A zero discount
/// rate reduces to `-initial_cost + annual_benefit * years` exactly.
///
/// # Examples
///
/// ```
/// use demand_engine::calculation::net_present_value;
/// use demand_engine::config::RoundingConvention;
/// use demand_engine::models::NpvInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = NpvInput {
///     initial_cost: Decimal::new(100_000, 0),
///     annual_benefit: Decimal::new(50_000, 0),
///     project_years: 1,
///     discount_rate_percent: Decimal::new(10, 0),
/// };
/// let npv = net_present_value(&input, RoundingConvention::HalfEven);
/// assert_eq!(npv, Decimal::from_str("-54545.45").unwrap());
/// ```
pub fn net_present_value(input: &NpvInput, rounding: RoundingConvention) -> Decimal {
    rounding.round(unrounded_npv(input), MONEY_DECIMAL_PLACES)
}

/// Computes the net present value and records the discounted cash flows.
pub fn calculate_npv(input: &NpvInput, rounding: RoundingConvention, step_number: u32) -> NpvResult {
    let terms: Vec<Decimal> = present_values(input).collect();
    let total = terms
        .iter()
        .copied()
        .fold(-input.initial_cost, Decimal::saturating_add);
    let npv = rounding.round(total, MONEY_DECIMAL_PLACES);

    let discounted_benefits: Vec<Decimal> = terms
        .iter()
        .map(|pv| rounding.round(*pv, MONEY_DECIMAL_PLACES))
        .collect();

    let reasoning = if input.project_years <= 0 {
        format!(
            "No benefit years; NPV is the negated initial cost {}",
            npv
        )
    } else {
        format!(
            "Discounted {} years of {} at {}% against initial cost {}: NPV {}",
            terms.len(),
            input.annual_benefit,
            input.discount_rate_percent,
            input.initial_cost,
            npv
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_present_value".to_string(),
        rule_name: "Net Present Value".to_string(),
        input: serde_json::json!({
            "initial_cost": input.initial_cost.to_string(),
            "annual_benefit": input.annual_benefit.to_string(),
            "project_years": input.project_years,
            "discount_rate_percent": input.discount_rate_percent.to_string(),
            "rounding": rounding,
        }),
        output: serde_json::json!({
            "discounted_benefits": discounted_benefits
                .iter()
                .map(|pv| pv.to_string())
                .collect::<Vec<_>>(),
            "npv": npv.to_string(),
        }),
        reasoning,
    };

    NpvResult {
        npv,
        discounted_benefits,
        audit_step,
    }
}

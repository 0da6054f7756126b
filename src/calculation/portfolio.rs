//! Budget and capacity rollups across assessed demands.

use rust_decimal::Decimal;

use crate::config::RoundingConvention;
use crate::error::{EngineError, EngineResult};
use crate::models::{PortfolioEntry, PortfolioSummary};

fn overflowed(field: &str) -> EngineError {
    EngineError::InvalidFinancialInput {
        field: field.to_string(),
        message: "result exceeds the representable range".to_string(),
    }
}

fn add(total: Decimal, amount: Decimal, field: &str) -> EngineResult<Decimal> {
    total.checked_add(amount).ok_or_else(|| overflowed(field))
}

/// Totals CapEx, OpEx, NPV and spend over a set of demands.
///
/// Fails with `InvalidFinancialInput` naming the total that no longer fits
/// in a `Decimal`.
pub fn summarize_portfolio(entries: &[PortfolioEntry]) -> EngineResult<PortfolioSummary> {
    let mut summary = entries
        .iter()
        .try_fold(PortfolioSummary::default(), |acc, entry| {
            Ok::<_, EngineError>(PortfolioSummary {
                demand_count: acc.demand_count + 1,
                total_capex: add(acc.total_capex, entry.capex_amount, "total_capex")?,
                total_opex: add(acc.total_opex, entry.opex_amount, "total_opex")?,
                total_npv: add(acc.total_npv, entry.calculated_npv, "total_npv")?,
                total_planned: add(acc.total_planned, entry.planned_amount, "total_planned")?,
                total_actual: add(acc.total_actual, entry.actual_amount, "total_actual")?,
                variance: Decimal::ZERO,
            })
        })?;
    summary.variance = summary
        .total_planned
        .checked_sub(summary.total_actual)
        .ok_or_else(|| overflowed("variance"))?;
    Ok(summary)
}

/// Allocated hours as a percentage of capacity, rounded to one place.
///
/// Zero capacity yields zero rather than dividing.
///
/// ```
/// use demand_engine::calculation::capacity_utilization;
/// use demand_engine::config::RoundingConvention;
/// use rust_decimal::Decimal;
///
/// let pct = capacity_utilization(Decimal::new(120, 0), Decimal::new(160, 0), RoundingConvention::HalfEven);
/// assert_eq!(pct.unwrap(), Decimal::new(750, 1));
/// ```
pub fn capacity_utilization(
    allocated_hours: Decimal,
    capacity_hours: Decimal,
    rounding: RoundingConvention,
) -> EngineResult<Decimal> {
    if capacity_hours <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    let percent = allocated_hours
        .checked_div(capacity_hours)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflowed("utilization_percent"))?;
    Ok(rounding.round(percent, 1))
}

//! Property tests for the scoring and valuation engines.

use proptest::prelude::*;
use rust_decimal::Decimal;

use demand_engine::calculation::{net_present_value, weighted_score};
use demand_engine::config::{RoundingConvention, ScoringWeights};
use demand_engine::models::{NpvInput, ScoringInput};

fn rating() -> impl Strategy<Value = i32> {
    1..=5i32
}

fn scoring_input() -> impl Strategy<Value = ScoringInput> {
    (rating(), rating(), rating(), rating(), rating(), rating()).prop_map(
        |(urgency, business_value, cost_impact, risk, resource_need, strategic_alignment)| {
            ScoringInput {
                urgency,
                business_value,
                cost_impact,
                risk,
                resource_need,
                strategic_alignment,
            }
        },
    )
}

fn money(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

fn rounding() -> impl Strategy<Value = RoundingConvention> {
    prop_oneof![
        Just(RoundingConvention::HalfEven),
        Just(RoundingConvention::HalfAwayFromZero),
    ]
}

fn score(input: &ScoringInput) -> Decimal {
    weighted_score(input, &ScoringWeights::default(), RoundingConvention::HalfEven)
}

fn npv(initial_cost: Decimal, annual_benefit: Decimal, years: i32, rate: Decimal) -> Decimal {
    net_present_value(
        &NpvInput {
            initial_cost,
            annual_benefit,
            project_years: years,
            discount_rate_percent: rate,
        },
        RoundingConvention::HalfEven,
    )
}

proptest! {
    #[test]
    fn score_stays_within_twenty_and_one_hundred(input in scoring_input()) {
        let s = score(&input);
        prop_assert!(s >= Decimal::from(20) && s <= Decimal::ONE_HUNDRED, "score {}", s);
    }

    #[test]
    fn raising_a_favourable_rating_never_lowers_the_score(input in scoring_input()) {
        let base = score(&input);
        if input.business_value < 5 {
            let up = ScoringInput { business_value: input.business_value + 1, ..input };
            prop_assert!(score(&up) > base);
        }
        if input.strategic_alignment < 5 {
            let up = ScoringInput { strategic_alignment: input.strategic_alignment + 1, ..input };
            prop_assert!(score(&up) > base);
        }
        if input.urgency < 5 {
            let up = ScoringInput { urgency: input.urgency + 1, ..input };
            prop_assert!(score(&up) > base);
        }
    }

    #[test]
    fn raising_an_unfavourable_rating_never_raises_the_score(input in scoring_input()) {
        let base = score(&input);
        if input.cost_impact < 5 {
            let up = ScoringInput { cost_impact: input.cost_impact + 1, ..input };
            prop_assert!(score(&up) < base);
        }
        if input.risk < 5 {
            let up = ScoringInput { risk: input.risk + 1, ..input };
            prop_assert!(score(&up) < base);
        }
        if input.resource_need < 5 {
            let up = ScoringInput { resource_need: input.resource_need + 1, ..input };
            prop_assert!(score(&up) < base);
        }
    }

    #[test]
    fn zero_years_returns_negative_initial_cost(
        initial_cost in money(100_000_000_000),
        annual_benefit in money(100_000_000_000),
        rate in 0..=100i64,
    ) {
        prop_assert_eq!(npv(initial_cost, annual_benefit, 0, Decimal::from(rate)), -initial_cost);
    }

    #[test]
    fn nothing_in_nothing_out(years in 0..=50i32, rate in 0..=100i64) {
        prop_assert_eq!(npv(Decimal::ZERO, Decimal::ZERO, years, Decimal::from(rate)), Decimal::ZERO);
    }

    #[test]
    fn zero_rate_is_undiscounted_sum(
        initial_cost in money(100_000_000_000),
        annual_benefit in money(100_000_000_000),
        years in 0..=50i32,
    ) {
        let expected = annual_benefit * Decimal::from(years) - initial_cost;
        prop_assert_eq!(npv(initial_cost, annual_benefit, years, Decimal::ZERO), expected);
    }

    #[test]
    fn higher_rate_strictly_lowers_npv(
        initial_cost in money(100_000_000),
        annual_benefit in (10_000i64..=10_000_000).prop_map(Decimal::from),
        years in 1..=50i32,
        rate in 0..100i64,
    ) {
        let lower = npv(initial_cost, annual_benefit, years, Decimal::from(rate));
        let higher = npv(initial_cost, annual_benefit, years, Decimal::from(rate + 1));
        prop_assert!(higher < lower, "{} at {}% vs {} at {}%", higher, rate + 1, lower, rate);
    }

    #[test]
    fn longer_horizon_strictly_raises_npv(
        initial_cost in money(100_000_000),
        annual_benefit in (10_000i64..=10_000_000).prop_map(Decimal::from),
        years in 0..30i32,
        rate in 0..=20i64,
    ) {
        let shorter = npv(initial_cost, annual_benefit, years, Decimal::from(rate));
        let longer = npv(initial_cost, annual_benefit, years + 1, Decimal::from(rate));
        prop_assert!(longer > shorter, "{} years {} vs {} years {}", years + 1, longer, years, shorter);
    }

    #[test]
    fn rounding_is_idempotent(
        mantissa in -1_000_000_000_000i64..=1_000_000_000_000,
        scale in 0u32..=8,
        convention in rounding(),
        dp in 0u32..=4,
    ) {
        let once = convention.round(Decimal::new(mantissa, scale), dp);
        prop_assert_eq!(convention.round(once, dp), once);
    }
}

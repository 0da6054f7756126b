//! Priority ranking of competing demands.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::{PriorityCandidate, RankedDemand};

fn priority_order(a: &PriorityCandidate, b: &PriorityCandidate) -> Ordering {
    let score_a = a.weighted_score.unwrap_or(Decimal::ZERO);
    let score_b = b.weighted_score.unwrap_or(Decimal::ZERO);

    score_b
        .cmp(&score_a)
        .then_with(|| b.urgency.cmp(&a.urgency))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Ranks demands for delivery.
///
/// Highest weighted score first, unassessed demands counting as zero. Ties go
/// to the more urgent demand, then to the more recently created one. Demands
/// equal on all three keep their input order. Ranks start at 1.
pub fn rank_demands(mut candidates: Vec<PriorityCandidate>) -> Vec<RankedDemand> {
    candidates.sort_by(priority_order);
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| RankedDemand {
            rank: index + 1,
            candidate,
        })
        .collect()
}

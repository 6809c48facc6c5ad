//! Weighted assignment of an order's final status.
//!
//! One roll in `1..=100` is checked against the cumulative weights in a
//! fixed order (completed, then processing, then failed). Weights summing
//! past 100 are allowed; the later statuses simply become unreachable.

use crate::config::StatusWeights;
use crate::model::OrderStatus;
use rand::Rng;

/// Maps a roll in `1..=100` onto a status.
pub fn status_for_roll(roll: u32, weights: &StatusWeights) -> OrderStatus {
    let processing_ceiling = weights.completed_pct.saturating_add(weights.processing_pct);
    if roll <= weights.completed_pct {
        OrderStatus::Completed
    } else if roll <= processing_ceiling {
        OrderStatus::Processing
    } else {
        OrderStatus::Failed
    }
}

/// Rolls once and maps the result.
pub fn draw(weights: &StatusWeights, rng: &mut impl Rng) -> OrderStatus {
    status_for_roll(rng.gen_range(1..=100), weights)
}

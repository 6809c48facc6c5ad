//! # Firing Schedule
//!
//! Synthesis runs are not spaced on a fixed cadence. Each time the timer
//! is armed, a fresh delay is drawn uniformly from one second up to twice
//! the average gap (`period / orders_per_period`), so order timestamps
//! scatter across the period instead of pulsing on a grid while the
//! long-run rate still averages out to `orders_per_period`.
//!
//! At most one fire is ever pending. Arming again replaces the pending
//! fire rather than stacking a second one.

use crate::config::SimulatorConfig;
use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Picks the delay until the next synthesis.
///
/// Returns `None` when scheduling is disabled (`orders_per_period <= 0`).
/// The delay is a whole number of seconds in `1..=round(2 * average_gap)`,
/// never less than one second.
pub fn next_fire_delay(config: &SimulatorConfig, rng: &mut impl Rng) -> Option<Duration> {
    if config.orders_per_period <= 0 {
        return None;
    }
    let average_gap = config.period_seconds() / config.orders_per_period as f64;
    let upper = ((average_gap * 2.0).round() as u64).max(1);
    Some(Duration::from_secs(rng.gen_range(1..=upper)))
}

/// The single pending-fire slot.
#[derive(Debug, Default)]
pub struct FireSchedule {
    fire_at: Option<Instant>,
}

impl FireSchedule {
    pub fn new() -> Self {
        Self { fire_at: None }
    }

    pub fn is_pending(&self) -> bool {
        self.fire_at.is_some()
    }

    pub fn fire_at(&self) -> Option<Instant> {
        self.fire_at
    }

    /// Schedules a fire after `delay`, replacing any pending fire.
    pub fn arm(&mut self, delay: Duration) {
        self.fire_at = Some(Instant::now() + delay);
    }

    /// Schedules a fire after `delay` only if none is pending.
    pub fn maybe_arm(&mut self, delay: Duration) {
        if self.fire_at.is_none() {
            self.arm(delay);
        }
    }

    pub fn clear(&mut self) {
        self.fire_at = None;
    }
}

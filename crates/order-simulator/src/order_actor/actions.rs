//! Domain actions for the order actor.

use crate::model::OrderStatus;
use chrono::{DateTime, Utc};

/// Operations on an order beyond the lifecycle verbs.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Assigns the terminal status and stamps the creation time in one
    /// step, so no observer can see the new status with the old
    /// timestamp.
    AssignStatus {
        status: OrderStatus,
        created_at: DateTime<Utc>,
    },
}

/// Results from order actions; variants match 1:1 with [`OrderAction`].
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    AssignStatus(()),
}

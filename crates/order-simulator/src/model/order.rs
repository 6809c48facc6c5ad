use crate::model::{ContactProfile, CustomerId, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Payment method marker written to every synthesized order. The
/// simulator never exercises a real payment gateway; this marks the order
/// as paid offline by bank transfer.
pub const PAYMENT_METHOD: &str = "bacs";

/// Human-readable title matching [`PAYMENT_METHOD`].
pub const PAYMENT_METHOD_TITLE: &str = "Direct Bank Transfer";

/// Type-safe identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle state of an order.
///
/// New orders start `Pending`; the synthesizer immediately assigns one of
/// the three terminal states and never revisits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Processing,
    Failed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One product line on an order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A persisted order.
///
/// `total` is computed by the order actor at creation time from live
/// catalog prices, not supplied by the caller.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub lines: Vec<LineItem>,
    pub billing: ContactProfile,
    pub shipping: ContactProfile,
    pub payment_method: String,
    pub payment_method_title: String,
    pub status: OrderStatus,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub lines: Vec<LineItem>,
    pub billing: ContactProfile,
    pub shipping: ContactProfile,
    pub payment_method: String,
    pub payment_method_title: String,
}


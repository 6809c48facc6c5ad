//! # Simulator Configuration
//!
//! Settings are read from a TOML file. Every key has a documented
//! default, so an empty or absent file yields a working configuration.
//!
//! ```toml
//! time_period_hours = 24.0
//! orders_per_period = 30
//! min_order_products = 1
//! max_order_products = 5
//! create_users = true
//! products = []
//!
//! [status_weights]
//! completed_pct = 40
//! processing_pct = 50
//! failed_pct = 10
//! ```

use crate::model::ProductId;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Percentage weights for the final status of a synthesized order.
///
/// The three weights are checked against a single 1..=100 roll in order
/// (completed, then processing, then failed), so sums over 100 simply
/// mean the later statuses are crowded out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusWeights {
    pub completed_pct: u32,
    pub processing_pct: u32,
    pub failed_pct: u32,
}

impl Default for StatusWeights {
    fn default() -> Self {
        Self {
            completed_pct: 40,
            processing_pct: 50,
            failed_pct: 10,
        }
    }
}

/// Everything the scheduler and synthesizer need to know.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Length of one scheduling period, in hours. Fractional values work.
    pub time_period_hours: f64,
    /// Target number of orders per period. Zero disables scheduling.
    pub orders_per_period: i64,
    /// Fewest line items per order.
    pub min_order_products: u32,
    /// Most line items per order.
    pub max_order_products: u32,
    /// Whether a synthesized order may create a brand-new customer.
    pub create_users: bool,
    pub status_weights: StatusWeights,
    /// Explicit product pool. Empty means "every published product".
    pub products: Vec<ProductId>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            time_period_hours: 24.0,
            orders_per_period: 30,
            min_order_products: 1,
            max_order_products: 5,
            create_users: true,
            status_weights: StatusWeights::default(),
            products: Vec::new(),
        }
    }
}

impl SimulatorConfig {
    /// Parses and validates a TOML document. Missing keys fall back to
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file at `path`, or returns the defaults if it does not
    /// exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.time_period_hours.is_finite() || self.time_period_hours <= 0.0 {
            return Err(ConfigError::Invalid(
                "time_period_hours must be a positive number".to_string(),
            ));
        }
        if self.orders_per_period < 0 {
            return Err(ConfigError::Invalid(
                "orders_per_period cannot be negative".to_string(),
            ));
        }
        if self.min_order_products < 1 {
            return Err(ConfigError::Invalid(
                "min_order_products must be at least 1".to_string(),
            ));
        }
        if self.min_order_products > self.max_order_products {
            return Err(ConfigError::Invalid(
                "min_order_products cannot exceed max_order_products".to_string(),
            ));
        }
        Ok(())
    }

    /// The period length in seconds.
    pub fn period_seconds(&self) -> f64 {
        self.time_period_hours * 3600.0
    }
}

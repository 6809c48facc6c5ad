//! # Order Simulation
//!
//! Everything that turns the storefront actors into a stream of plausible
//! fake orders. The pieces:
//!
//! - [`schedule`]: randomized timer math and the single pending-fire slot.
//! - [`synthesizer`]: builds one order end to end (pick products, resolve
//!   a customer, submit, assign a final status).
//! - [`status`]: the weighted roll that picks the final order status.
//! - [`cache`]: the once-per-process list of reusable customers.
//! - [`service`]: the long-running task tying timer and synthesizer
//!   together, with a handle for manual triggers.

pub mod cache;
pub mod error;
pub mod schedule;
pub mod service;
pub mod status;
pub mod synthesizer;

pub use cache::CustomerCache;
pub use error::{SynthesisError, TriggerError};
pub use schedule::FireSchedule;
pub use service::{SimulatorHandle, SimulatorService};
pub use synthesizer::Synthesizer;

//! # Order Simulator Library
//!
//! Exposes the storefront actors, their clients and the simulation engine
//! for integration testing.

pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod directory_actor;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod sim;

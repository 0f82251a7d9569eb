//! Simulation harness for the mid-price edge trader
//!
//! Drives a `Strategy` tick by tick the way the market-simulation harness
//! does, while holding the long-lived trader state on its behalf.
//!
//! # Modules
//! - `harness`: Session driver and event log
//! - `feed`: Seeded synthetic order-book snapshots
//! - `metrics`: Session counters
//! - `replay`: Tick log and deterministic replay validation
//! - `export`: Session export to JSON

pub mod harness;
pub mod feed;
pub mod metrics;
pub mod replay;
pub mod export;

/// Crate version constant
pub const VERSION: &str = "1.0.0";

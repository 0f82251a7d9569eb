//! Trader Service
//!
//! Mid-price edge strategy invoked once per simulated tick:
//! - rank every resting order of an allowed product by its edge against
//!   the book mid price, keeping only those beyond the min edge
//! - walk the ranking and take the opposite side of each order that keeps
//!   the net position within the limit
//!
//! **Key Invariants:**
//! - Every ranked order has a strictly positive effective distance
//! - Ranking is non-increasing in effective distance
//! - |position| never exceeds the configured limit after a fill
//! - Same snapshot and ledger in, same orders and ledger out

pub mod config;
pub mod ranker;
pub mod ledger;
pub mod matcher;
pub mod strategy;

pub use config::TraderConfig;
pub use ledger::{Ledger, TraderState};
pub use strategy::{Strategy, Trader, TraderOutput};

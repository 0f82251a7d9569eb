//! Types library for the trading harness
//!
//! Datamodel exchanged between the simulation harness and a trading
//! strategy on every tick: order-book snapshots, outgoing orders and the
//! per-tick trading state.
//!
//! # Modules
//! - `ids`: Identifiers (ProductId, SessionId)
//! - `numeric`: Integer prices/volumes and the decimal mid price
//! - `order`: Order depth snapshots and outgoing orders
//! - `state`: Per-tick trading state handed to a strategy
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod state;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::state::*;
    pub use crate::errors::*;
}

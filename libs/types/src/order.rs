//! Order book snapshots and outgoing orders
//!
//! An `OrderDepth` is the harness view of one product's resting orders.
//! Buy-side volumes are negative and sell-side volumes positive; an
//! outgoing `Order` carries a signed quantity (positive buys, negative
//! sells).

use crate::ids::ProductId;
use crate::numeric::{Price, Volume};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Side of a signed order quantity. Zero has no side.
    pub fn of_quantity(quantity: Volume) -> Option<Self> {
        match quantity {
            q if q > 0 => Some(Side::BUY),
            q if q < 0 => Some(Side::SELL),
            _ => None,
        }
    }
}

/// Resting orders for one product at one tick.
///
/// Keys are unique per side; no ordering is implied by the harness, the
/// maps just happen to iterate in ascending price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDepth {
    pub buy_orders: BTreeMap<Price, Volume>,
    pub sell_orders: BTreeMap<Price, Volume>,
}

impl OrderDepth {
    /// Create an empty depth
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a depth from (price, volume) levels for each side
    pub fn from_levels(
        buys: impl IntoIterator<Item = (Price, Volume)>,
        sells: impl IntoIterator<Item = (Price, Volume)>,
    ) -> Self {
        Self {
            buy_orders: buys.into_iter().collect(),
            sell_orders: sells.into_iter().collect(),
        }
    }

    /// Highest resting buy price
    pub fn best_bid(&self) -> Option<Price> {
        self.buy_orders.keys().next_back().copied()
    }

    /// Lowest resting sell price
    pub fn best_ask(&self) -> Option<Price> {
        self.sell_orders.keys().next().copied()
    }

    /// Number of (buy, sell) price levels
    pub fn level_counts(&self) -> (usize, usize) {
        (self.buy_orders.len(), self.sell_orders.len())
    }

    /// True when neither side has a resting order
    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

/// Order instruction returned to the harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: ProductId,
    pub price: Price,
    /// Signed: positive buys, negative sells
    pub quantity: Volume,
}

impl Order {
    pub fn new(symbol: ProductId, price: Price, quantity: Volume) -> Self {
        Self { symbol, price, quantity }
    }

    /// Side of the instruction, None for a zero quantity
    pub fn side(&self) -> Option<Side> {
        Side::of_quantity(self.quantity)
    }
}

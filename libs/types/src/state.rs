//! Per-tick trading state delivered by the harness

use crate::ids::ProductId;
use crate::order::OrderDepth;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Auxiliary observations published alongside the books.
///
/// Strategies in this workspace do not read them; they are carried so the
/// snapshot round-trips intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observations {
    pub plain_value_observations: BTreeMap<ProductId, i64>,
}

/// Everything the harness hands a strategy for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingState {
    pub timestamp: i64,
    /// Free-form string returned by the strategy on the previous tick
    pub trader_data: String,
    pub order_depths: BTreeMap<ProductId, OrderDepth>,
    pub observations: Observations,
}

impl TradingState {
    /// Create a state with no books
    pub fn new(timestamp: i64, trader_data: impl Into<String>) -> Self {
        Self {
            timestamp,
            trader_data: trader_data.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper to attach a product's book
    pub fn with_depth(mut self, product: ProductId, depth: OrderDepth) -> Self {
        self.order_depths.insert(product, depth);
        self
    }

    /// Book for a product, if the harness sent one
    pub fn depth(&self, product: &ProductId) -> Option<&OrderDepth> {
        self.order_depths.get(product)
    }
}

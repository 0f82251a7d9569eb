//! Strategy seam and the mid-price edge trader
//!
//! The harness calls a `Strategy` once per tick with a fresh snapshot and
//! the session's `TraderState`. `Trader` prices each allowed product off
//! its book mid, ranks the resting orders and matches them greedily.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};
use types::errors::ConfigError;
use types::ids::ProductId;
use types::numeric::mid_price;
use types::order::{Order, OrderDepth, Side};
use types::state::TradingState;

use crate::config::TraderConfig;
use crate::ledger::TraderState;
use crate::matcher::{match_candidates, MatchDecision};
use crate::ranker::rank_depth;

/// What the harness receives back from one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderOutput {
    pub orders: BTreeMap<ProductId, Vec<Order>>,
    pub conversions: i64,
    /// Delivered back as `TradingState::trader_data` on the next tick
    pub trader_data: String,
}

/// Evaluation of one product within a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReport {
    pub product: ProductId,
    /// None when the book had no usable prices
    pub reference_price: Option<Decimal>,
    pub decisions: Vec<MatchDecision>,
}

impl ProductReport {
    /// Orders to send for the accepted fills, in ranking order
    pub fn orders(&self) -> Vec<Order> {
        self.decisions
            .iter()
            .filter_map(|d| d.fill())
            .map(|f| Order::new(self.product.clone(), f.price, f.quantity))
            .collect()
    }
}

/// Full evaluation of one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub timestamp: i64,
    pub products: Vec<ProductReport>,
    pub conversions: i64,
    pub trader_data: String,
}

impl TickReport {
    pub fn into_output(self) -> TraderOutput {
        let orders = self
            .products
            .iter()
            .map(|report| (report.product.clone(), report.orders()))
            .collect();
        TraderOutput {
            orders,
            conversions: self.conversions,
            trader_data: self.trader_data,
        }
    }
}

/// A per-tick trading callback.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Evaluate one snapshot, updating the session state.
    fn evaluate(&self, state: &TradingState, book: &mut TraderState) -> TickReport;

    /// Evaluate one snapshot and return only what the harness consumes.
    fn run(&self, state: &TradingState, book: &mut TraderState) -> TraderOutput {
        self.evaluate(state, book).into_output()
    }
}

/// Mid-price edge trader.
#[derive(Debug, Clone)]
pub struct Trader {
    config: TraderConfig,
}

impl Trader {
    pub fn new(config: TraderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TraderConfig {
        &self.config
    }

    /// Reference price for a book: mid of best bid and best ask, with a
    /// missing side counted as 0. None unless one of them is positive.
    pub fn reference_price(depth: &OrderDepth) -> Option<Decimal> {
        let best_bid = depth.best_bid().unwrap_or(0);
        let best_ask = depth.best_ask().unwrap_or(0);
        if best_bid > 0 || best_ask > 0 {
            Some(mid_price(best_bid, best_ask))
        } else {
            None
        }
    }

    fn evaluate_product(
        &self,
        product: &ProductId,
        depth: &OrderDepth,
        book: &mut TraderState,
    ) -> ProductReport {
        let (buy_levels, sell_levels) = depth.level_counts();
        debug!(%product, buy_levels, sell_levels, "Order depth");

        let reference_price = Self::reference_price(depth);
        let decisions = match reference_price {
            Some(target) => {
                debug!(%product, %target, "Acceptable price");
                let ranked = rank_depth(depth, target, self.config.min_edge);
                let ledger = book.ledger_mut(product);
                let decisions = match_candidates(&ranked, ledger, self.config.position_limit);

                for decision in &decisions {
                    match decision {
                        MatchDecision::Accepted(fill) => {
                            let side = Side::of_quantity(fill.quantity);
                            info!(
                                %product,
                                side = ?side,
                                volume = fill.quantity.abs(),
                                price = fill.price,
                                pnl = %fill.pnl_after,
                                position = fill.position_after,
                                "Order accepted"
                            );
                        }
                        MatchDecision::Skipped { candidate, prospective_position } => {
                            debug!(
                                %product,
                                price = candidate.price,
                                volume = candidate.volume,
                                prospective_position = ?prospective_position,
                                "Candidate exceeds position limit"
                            );
                        }
                    }
                }
                decisions
            }
            None => {
                debug!(%product, "No prices on either side, not trading");
                Vec::new()
            }
        };

        ProductReport {
            product: product.clone(),
            reference_price,
            decisions,
        }
    }
}

impl Default for Trader {
    fn default() -> Self {
        Self { config: TraderConfig::default() }
    }
}

impl Strategy for Trader {
    fn name(&self) -> &str {
        "mid-price-edge"
    }

    fn evaluate(&self, state: &TradingState, book: &mut TraderState) -> TickReport {
        trace!(trader_data = %state.trader_data, "Trader data");
        trace!(observations = ?state.observations, "Observations");

        let products = state
            .order_depths
            .iter()
            .filter(|(product, _)| self.config.trades(product))
            .map(|(product, depth)| self.evaluate_product(product, depth, book))
            .collect();

        TickReport {
            timestamp: state.timestamp,
            products,
            conversions: self.config.conversions,
            trader_data: state.trader_data.clone(),
        }
    }
}

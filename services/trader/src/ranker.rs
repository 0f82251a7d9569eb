//! Order ranking by effective distance
//!
//! Merges both sides of a product's book into one candidate list, scores
//! each resting order against a reference price, drops everything that is
//! not at least `min_edge` through the reference, and sorts best-first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::numeric::{Price, Volume};
use types::order::OrderDepth;

/// A resting order considered for matching.
///
/// Negative volume is a resting buy, positive a resting sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub price: Price,
    pub volume: Volume,
}

impl Candidate {
    pub fn new(price: Price, volume: Volume) -> Self {
        Self { price, volume }
    }
}

/// Profitability of taking the other side of `candidate`.
///
/// Positive only when the resting buy is more than `min_edge` above the
/// target, or the resting sell more than `min_edge` below it. Otherwise
/// the (nonpositive) signed gap on the wrong side. Zero volume scores 0.
pub fn effective_distance(candidate: &Candidate, target: Decimal, min_edge: Decimal) -> Decimal {
    let price = Decimal::from(candidate.price);
    if candidate.volume < 0 {
        if price > target + min_edge {
            price - target
        } else {
            -(target - price)
        }
    } else if candidate.volume > 0 {
        if price < target - min_edge {
            target - price
        } else {
            -(price - target)
        }
    } else {
        Decimal::ZERO
    }
}

/// Rank resting orders best-first.
///
/// Candidates are collected buy side then sell side, each in ascending
/// price, and sorted stably; equal distances keep that order.
pub fn rank(
    buy_orders: &BTreeMap<Price, Volume>,
    sell_orders: &BTreeMap<Price, Volume>,
    target: Decimal,
    min_edge: Decimal,
) -> Vec<Candidate> {
    let mut scored: Vec<(Decimal, Candidate)> = buy_orders
        .iter()
        .chain(sell_orders.iter())
        .map(|(&price, &volume)| Candidate::new(price, volume))
        .map(|c| (effective_distance(&c, target, min_edge), c))
        .filter(|(distance, _)| *distance > Decimal::ZERO)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, c)| c).collect()
}

/// `rank` over a full order depth.
pub fn rank_depth(depth: &OrderDepth, target: Decimal, min_edge: Decimal) -> Vec<Candidate> {
    rank(&depth.buy_orders, &depth.sell_orders, target, min_edge)
}

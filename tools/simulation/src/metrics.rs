//! Session metrics
//!
//! Tracks ticks, accepted orders, skipped candidates, traded volume and the
//! largest exposure the session ever held.

use crate::harness::SessionEvent;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{notional, Volume};

/// Aggregated session metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Product evaluations (one per allowed product per tick)
    pub evaluations: u64,
    /// Evaluations where the book gave no reference price
    pub evaluations_without_reference: u64,
    pub orders_accepted: u64,
    pub candidates_skipped: u64,
    pub bought_volume: Volume,
    pub sold_volume: Volume,
    /// Sum of |price * quantity| over accepted orders
    pub traded_notional: Decimal,
    pub max_abs_position: Volume,
    /// PnL summed over all products; starts flat
    pub total_pnl: Decimal,
}

impl SessionMetrics {
    /// Create empty metrics.
    pub fn new() -> Self {
        Self {
            evaluations: 0,
            evaluations_without_reference: 0,
            orders_accepted: 0,
            candidates_skipped: 0,
            bought_volume: 0,
            sold_volume: 0,
            traded_notional: Decimal::ZERO,
            max_abs_position: 0,
            total_pnl: Decimal::ZERO,
        }
    }

    /// Record a single event into metrics.
    pub fn record_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::TickEvaluated { reference_price, .. } => {
                self.evaluations += 1;
                if reference_price.is_none() {
                    self.evaluations_without_reference += 1;
                }
            }
            SessionEvent::OrderAccepted {
                price,
                quantity,
                position_after,
                ..
            } => {
                self.orders_accepted += 1;
                if *quantity > 0 {
                    self.bought_volume += *quantity;
                } else {
                    self.sold_volume += quantity.abs();
                }
                let traded = notional(*price, *quantity);
                self.traded_notional = self.traded_notional.saturating_add(traded.abs());
                self.total_pnl = self.total_pnl.saturating_add(traded);
                self.max_abs_position = self.max_abs_position.max(position_after.abs());
            }
            SessionEvent::CandidateSkipped { .. } => {
                self.candidates_skipped += 1;
            }
        }
    }

    /// Process all events from a session.
    pub fn ingest_events(&mut self, events: &[SessionEvent]) {
        for event in events {
            self.record_event(event);
        }
    }

    /// Share of ranked candidates that were filled.
    pub fn fill_ratio(&self) -> f64 {
        let ranked = self.orders_accepted + self.candidates_skipped;
        if ranked == 0 {
            return 0.0;
        }
        self.orders_accepted as f64 / ranked as f64
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "Evaluations: {} | Accepted: {} | Skipped: {} | Bought: {} | Sold: {} | Max |pos|: {} | Total PnL: {}",
            self.evaluations,
            self.orders_accepted,
            self.candidates_skipped,
            self.bought_volume,
            self.sold_volume,
            self.max_abs_position,
            self.total_pnl,
        )
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

//! Tick-driven session harness
//!
//! Owns the trader state for the lifetime of a session and hands it to the
//! strategy on every tick, strictly one tick at a time. Every decision the
//! strategy makes is appended to the session event log for metrics and
//! replay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use trader::matcher::MatchDecision;
use trader::strategy::TickReport;
use trader::{Ledger, Strategy, Trader, TraderConfig, TraderOutput, TraderState};
use types::errors::TraderError;
use types::ids::{ProductId, SessionId};
use types::numeric::{Price, Volume};
use types::state::TradingState;

/// Events emitted while driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    TickEvaluated {
        timestamp: i64,
        product: ProductId,
        reference_price: Option<Decimal>,
    },
    OrderAccepted {
        timestamp: i64,
        product: ProductId,
        price: Price,
        quantity: Volume,
        position_after: Volume,
        pnl_after: Decimal,
    },
    CandidateSkipped {
        timestamp: i64,
        product: ProductId,
        price: Price,
        volume: Volume,
        prospective_position: Option<Volume>,
    },
}

/// A trading session: one strategy, one long-lived state.
pub struct Session<S: Strategy> {
    pub id: SessionId,
    strategy: S,
    state: TraderState,
    pub events: Vec<SessionEvent>,
    pub ticks: u64,
}

impl Session<Trader> {
    /// Session around a `Trader` built from config.
    pub fn from_config(config: TraderConfig) -> Result<Self, TraderError> {
        Ok(Self::new(Trader::new(config)?))
    }
}

impl<S: Strategy> Session<S> {
    /// Start a session with flat ledgers.
    pub fn new(strategy: S) -> Self {
        Self::with_state(strategy, TraderState::new())
    }

    /// Resume a session from existing ledgers.
    pub fn with_state(strategy: S, state: TraderState) -> Self {
        let id = SessionId::new();
        info!(session_id = %id, strategy = strategy.name(), "Session started");
        Self {
            id,
            strategy,
            state,
            events: Vec::new(),
            ticks: 0,
        }
    }

    /// Evaluate one snapshot.
    pub fn tick(&mut self, snapshot: &TradingState) -> TraderOutput {
        let report = self.strategy.evaluate(snapshot, &mut self.state);
        self.ticks += 1;
        self.record(&report);
        report.into_output()
    }

    /// Evaluate snapshots in order, feeding each output's trader data into
    /// the next snapshot the way the harness does.
    pub fn run<I>(&mut self, snapshots: I) -> Vec<TraderOutput>
    where
        I: IntoIterator<Item = TradingState>,
    {
        let mut outputs: Vec<TraderOutput> = Vec::new();
        for mut snapshot in snapshots {
            if let Some(prev) = outputs.last() {
                snapshot.trader_data = prev.trader_data.clone();
            }
            outputs.push(self.tick(&snapshot));
        }
        info!(
            session_id = %self.id,
            ticks = self.ticks,
            total_pnl = %self.state.total_pnl(),
            "Session run complete"
        );
        outputs
    }

    fn record(&mut self, report: &TickReport) {
        let timestamp = report.timestamp;
        for product_report in &report.products {
            let product = &product_report.product;
            self.events.push(SessionEvent::TickEvaluated {
                timestamp,
                product: product.clone(),
                reference_price: product_report.reference_price,
            });
            for decision in &product_report.decisions {
                let event = match decision {
                    MatchDecision::Accepted(fill) => SessionEvent::OrderAccepted {
                        timestamp,
                        product: product.clone(),
                        price: fill.price,
                        quantity: fill.quantity,
                        position_after: fill.position_after,
                        pnl_after: fill.pnl_after,
                    },
                    MatchDecision::Skipped { candidate, prospective_position } => {
                        SessionEvent::CandidateSkipped {
                            timestamp,
                            product: product.clone(),
                            price: candidate.price,
                            volume: candidate.volume,
                            prospective_position: *prospective_position,
                        }
                    }
                };
                self.events.push(event);
            }
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn state(&self) -> &TraderState {
        &self.state
    }

    pub fn into_state(self) -> TraderState {
        self.state
    }

    /// Ledger of a product the session has traded.
    pub fn ledger(&self, product: &ProductId) -> Result<&Ledger, TraderError> {
        self.state.ledger(product).ok_or_else(|| TraderError::UnknownProduct {
            symbol: product.to_string(),
        })
    }

    /// Count accepted orders in event log.
    pub fn accepted_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SessionEvent::OrderAccepted { .. }))
            .count()
    }

    /// Count skipped candidates in event log.
    pub fn skipped_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SessionEvent::CandidateSkipped { .. }))
            .count()
    }

    /// Clear all events (for replay checkpointing).
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::order::OrderDepth;

    fn ink() -> ProductId {
        ProductId::new("SQUID_INK")
    }

    fn snapshot(timestamp: i64, depth: OrderDepth) -> TradingState {
        TradingState::new(timestamp, "").with_depth(ink(), depth)
    }

    #[test]
    fn test_state_persists_across_ticks() {
        let mut session = Session::new(Trader::default());

        session.tick(&snapshot(100, OrderDepth::from_levels([(110, -30)], [])));
        assert_eq!(session.state().position(&ink()), 30);

        // Another 30-lot would breach the limit; a 20-lot still fits
        let output = session.tick(&snapshot(
            200,
            OrderDepth::from_levels([(110, -30), (109, -20)], []),
        ));
        assert_eq!(output.orders[&ink()].len(), 1);
        assert_eq!(output.orders[&ink()][0].quantity, 20);
        assert_eq!(session.state().position(&ink()), 50);
        assert_eq!(session.ticks, 2);
    }

    #[test]
    fn test_event_log() {
        let mut session = Session::new(Trader::default());
        session.tick(&snapshot(100, OrderDepth::from_levels([(110, -10), (120, -60)], [(80, 5)])));

        // 120 ranks first but is too large; 110 and 80 fill
        assert_eq!(session.accepted_count(), 2);
        assert_eq!(session.skipped_count(), 1);
        assert!(matches!(
            session.events[0],
            SessionEvent::TickEvaluated { reference_price: Some(_), .. }
        ));
        assert!(matches!(
            session.events[1],
            SessionEvent::CandidateSkipped { price: 120, prospective_position: Some(60), .. }
        ));
    }

    #[test]
    fn test_empty_book_logs_no_reference() {
        let mut session = Session::new(Trader::default());
        let output = session.tick(&snapshot(100, OrderDepth::new()));

        assert!(output.orders[&ink()].is_empty());
        assert_eq!(
            session.events,
            vec![SessionEvent::TickEvaluated {
                timestamp: 100,
                product: ink(),
                reference_price: None,
            }]
        );
        assert!(session.ledger(&ink()).is_err());
    }

    #[test]
    fn test_run_threads_trader_data() {
        let mut session = Session::new(Trader::default());
        let mut first = snapshot(0, OrderDepth::new());
        first.trader_data = "seed".to_string();
        let second = snapshot(100, OrderDepth::new());

        let outputs = session.run(vec![first, second]);

        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[1].trader_data, "seed");
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = TraderConfig { position_limit: -1, ..Default::default() };
        let result = Session::from_config(config);
        assert!(matches!(result, Err(TraderError::Config(_))));
    }

    #[test]
    fn test_unknown_product_ledger() {
        let session = Session::new(Trader::default());
        let err = session.ledger(&ProductId::new("KELP")).unwrap_err();
        assert_eq!(err, TraderError::UnknownProduct { symbol: "KELP".to_string() });
    }

    #[test]
    fn test_resume_with_state() {
        let mut state = TraderState::new();
        state.ledger_mut(&ink()).position = -50;
        let mut session = Session::with_state(Trader::default(), state);

        // Buying back 10 fits; selling 15 from -40 would breach the limit
        session.tick(&snapshot(0, OrderDepth::from_levels([(110, -10)], [(80, 15)])));
        assert_eq!(session.ledger(&ink()).unwrap().position, -40);
        assert_eq!(session.skipped_count(), 1);
    }
}

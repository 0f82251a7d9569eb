//! Tick log and deterministic replay validation
//!
//! The trader is a pure function of (snapshot, ledgers), so feeding the same
//! tick log into a fresh session must reproduce the same final ledgers.

use crate::harness::Session;
use serde::{Deserialize, Serialize};
use trader::{Strategy, Trader, TraderConfig, TraderState};
use types::errors::TraderError;
use types::state::TradingState;

/// A snapshot of session state for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: TraderState,
    pub total_pnl: String,
    pub accepted_count: usize,
    pub skipped_count: usize,
    pub ticks: u64,
}

/// Capture a snapshot of the session state.
pub fn capture_snapshot<S: Strategy>(session: &Session<S>) -> SessionSnapshot {
    SessionSnapshot {
        state: session.state().clone(),
        total_pnl: session.state().total_pnl().to_string(),
        accepted_count: session.accepted_count(),
        skipped_count: session.skipped_count(),
        ticks: session.ticks,
    }
}

/// Replay a tick log into a fresh session and return the resulting snapshot.
pub fn replay_and_snapshot(
    config: TraderConfig,
    ticks: &[TradingState],
) -> Result<SessionSnapshot, TraderError> {
    let mut session = Session::new(Trader::new(config)?);
    for snapshot in ticks {
        session.tick(snapshot);
    }
    Ok(capture_snapshot(&session))
}

/// Validate replay determinism: run the tick log through a fresh session
/// and compare snapshots.
pub fn validate_replay(
    config: TraderConfig,
    ticks: &[TradingState],
    expected: &SessionSnapshot,
) -> Result<ReplayValidation, TraderError> {
    let replayed = replay_and_snapshot(config, ticks)?;
    let matches = replayed == *expected;

    Ok(ReplayValidation {
        matches,
        original: expected.clone(),
        replayed,
    })
}

/// Result of replay validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayValidation {
    pub matches: bool,
    pub original: SessionSnapshot,
    pub replayed: SessionSnapshot,
}

/// Export a tick log as JSON.
pub fn export_tick_log(ticks: &[TradingState]) -> String {
    serde_json::to_string_pretty(ticks).unwrap_or_default()
}

/// Import a tick log from JSON.
pub fn import_tick_log(json: &str) -> Result<Vec<TradingState>, serde_json::Error> {
    serde_json::from_str(json)
}

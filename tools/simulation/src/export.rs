//! Session export
//!
//! Serializes session metrics and final ledgers to JSON for external
//! consumption.

use crate::harness::Session;
use crate::metrics::SessionMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trader::{Strategy, TraderState};
use types::ids::SessionId;

/// Combined export containing all session outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    pub version: String,
    pub session_id: SessionId,
    pub strategy: String,
    pub generated_at: DateTime<Utc>,
    pub ticks: u64,
    pub metrics: SessionMetrics,
    pub final_state: TraderState,
    pub event_count: usize,
}

/// Build a complete session export.
pub fn build_export<S: Strategy>(session: &Session<S>) -> SessionExport {
    let mut metrics = SessionMetrics::new();
    metrics.ingest_events(&session.events);

    SessionExport {
        version: crate::VERSION.to_string(),
        session_id: session.id,
        strategy: session.strategy().name().to_string(),
        generated_at: Utc::now(),
        ticks: session.ticks,
        metrics,
        final_state: session.state().clone(),
        event_count: session.events.len(),
    }
}

/// Export complete session data as JSON.
pub fn export_json(export: &SessionExport) -> String {
    serde_json::to_string_pretty(export).unwrap_or_default()
}

/// Write export to a file path.
pub fn write_to_file(export: &SessionExport, path: &str) -> std::io::Result<()> {
    let json = export_json(export);
    std::fs::write(path, json)
}

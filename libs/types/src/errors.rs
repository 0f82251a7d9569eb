//! Error types for the trader and its harness
//!
//! The per-tick trading call is infallible; errors only come from
//! configuration and harness lookups.

use thiserror::Error;

/// Top-level trader error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraderError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown product: {symbol}")]
    UnknownProduct { symbol: String },

    #[error("Invalid product id: {0:?} (must not be empty)")]
    InvalidProductId(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid position limit: {limit} (must be within 1..={max})")]
    InvalidPositionLimit { limit: i64, max: i64 },

    #[error("Invalid min edge: {0} (must not be negative)")]
    NegativeMinEdge(String),

    #[error("Product allow-list is empty")]
    EmptyProductList,

    #[error("Malformed config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

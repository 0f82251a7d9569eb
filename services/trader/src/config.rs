//! Trader configuration
//!
//! Every knob the strategy hardcodes by default lives here so the harness
//! can override it from JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::ConfigError;
use types::ids::ProductId;
use types::numeric::Volume;

/// Default absolute position limit per product
pub const DEFAULT_POSITION_LIMIT: Volume = 50;

/// Default margin a price must clear beyond the mid to count as profitable
pub const DEFAULT_MIN_EDGE: i64 = 5;

/// Product traded when no allow-list is given
pub const DEFAULT_PRODUCT: &str = "SQUID_INK";

/// Upper bound on the position limit; keeps `price * quantity` well inside
/// Decimal range for any i64 price.
pub const MAX_POSITION_LIMIT: Volume = 1_000_000_000;

/// Configuration for the mid-price edge trader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraderConfig {
    /// Maximum absolute net position after any fill
    pub position_limit: Volume,
    /// Required edge beyond the mid price
    pub min_edge: Decimal,
    /// Products the strategy trades; others are ignored
    pub products: Vec<ProductId>,
    /// Conversions value returned to the harness on every tick
    pub conversions: i64,
}

impl Default for TraderConfig {
    fn default() -> Self {
        Self {
            position_limit: DEFAULT_POSITION_LIMIT,
            min_edge: Decimal::from(DEFAULT_MIN_EDGE),
            products: vec![ProductId::new(DEFAULT_PRODUCT)],
            conversions: 1,
        }
    }
}

impl TraderConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TraderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.position_limit < 1 || self.position_limit > MAX_POSITION_LIMIT {
            return Err(ConfigError::InvalidPositionLimit {
                limit: self.position_limit,
                max: MAX_POSITION_LIMIT,
            });
        }
        if self.min_edge < Decimal::ZERO {
            return Err(ConfigError::NegativeMinEdge(self.min_edge.to_string()));
        }
        if self.products.is_empty() {
            return Err(ConfigError::EmptyProductList);
        }
        Ok(())
    }

    /// Whether the strategy trades this product
    pub fn trades(&self, product: &ProductId) -> bool {
        self.products.contains(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TraderConfig::default();
        assert_eq!(config.position_limit, 50);
        assert_eq!(config.min_edge, Decimal::from(5));
        assert_eq!(config.conversions, 1);
        assert!(config.trades(&ProductId::new("SQUID_INK")));
        assert!(!config.trades(&ProductId::new("KELP")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = TraderConfig::from_json(r#"{"position_limit": 20}"#).unwrap();
        assert_eq!(config.position_limit, 20);
        assert_eq!(config.min_edge, Decimal::from(5));
        assert_eq!(config.products, vec![ProductId::new("SQUID_INK")]);
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "position_limit": 30,
            "min_edge": "2.5",
            "products": ["KELP", "SQUID_INK"],
            "conversions": 0
        }"#;
        let config = TraderConfig::from_json(json).unwrap();
        assert_eq!(config.min_edge, Decimal::new(25, 1));
        assert!(config.trades(&ProductId::new("KELP")));
        assert_eq!(config.conversions, 0);
    }

    #[test]
    fn test_invalid_position_limit() {
        let config = TraderConfig { position_limit: 0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPositionLimit { limit: 0, .. })
        ));

        let config = TraderConfig {
            position_limit: MAX_POSITION_LIMIT + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_min_edge() {
        let config = TraderConfig { min_edge: Decimal::from(-1), ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeMinEdge("-1".to_string()))
        );
    }

    #[test]
    fn test_empty_products() {
        let result = TraderConfig::from_json(r#"{"products": []}"#);
        assert_eq!(result, Err(ConfigError::EmptyProductList));
    }

    #[test]
    fn test_empty_product_name_rejected() {
        let result = TraderConfig::from_json(r#"{"products": [""]}"#);
        assert!(matches!(result, Err(ConfigError::Parse(msg)) if msg.contains("Invalid product id")));
    }

    #[test]
    fn test_malformed_json() {
        let result = TraderConfig::from_json("{position_limit: }");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = TraderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TraderConfig::from_json(&json).unwrap(), config);
    }
}

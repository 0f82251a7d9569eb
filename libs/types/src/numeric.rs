//! Price and volume types
//!
//! The harness quotes integer prices and signed integer volumes. Anything
//! derived from them (mid price, edge, PnL) uses rust_decimal so that
//! comparisons are exact and runs are deterministic.

use rust_decimal::Decimal;

/// Integer price level.
pub type Price = i64;

/// Signed integer volume. Sign convention depends on context: book volumes
/// are negative on the buy side, order quantities are positive for buys.
pub type Volume = i64;

/// Midpoint of two prices as an exact decimal.
pub fn mid_price(best_bid: Price, best_ask: Price) -> Decimal {
    (Decimal::from(best_bid) + Decimal::from(best_ask)) / Decimal::from(2)
}

/// Signed notional of trading `quantity` at `price`.
pub fn notional(price: Price, quantity: Volume) -> Decimal {
    Decimal::from(price) * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mid_price_whole() {
        assert_eq!(mid_price(110, 80), Decimal::from(95));
    }

    #[test]
    fn test_mid_price_half() {
        assert_eq!(mid_price(100, 91), Decimal::from_str("95.5").unwrap());
    }

    #[test]
    fn test_mid_price_one_side_missing() {
        assert_eq!(mid_price(0, 90), Decimal::from(45));
    }

    #[test]
    fn test_notional_sign() {
        assert_eq!(notional(110, 10), Decimal::from(1100));
        assert_eq!(notional(80, -5), Decimal::from(-400));
    }
}

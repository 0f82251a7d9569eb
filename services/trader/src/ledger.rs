//! Trader ledger carried across ticks
//!
//! The harness owns a `TraderState` for the whole session and lends it to
//! the strategy mutably on each tick. Each traded product keeps its own
//! net position and realized PnL.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::ids::ProductId;
use types::numeric::{Price, Volume};

/// Net position and cumulative PnL for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub position: Volume,
    pub pnl: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position after trading `quantity`, None on overflow.
    pub fn prospective(&self, quantity: Volume) -> Option<Volume> {
        self.position.checked_add(quantity)
    }

    /// Ledger after a fill of signed `quantity` at `price`, None if either
    /// the position or the PnL would overflow.
    ///
    /// PnL moves by `price * quantity`, position by `quantity`.
    pub fn after_fill(&self, price: Price, quantity: Volume) -> Option<Ledger> {
        let traded = Decimal::from(price).checked_mul(Decimal::from(quantity))?;
        Some(Ledger {
            position: self.position.checked_add(quantity)?,
            pnl: self.pnl.checked_add(traded)?,
        })
    }

    /// Book a fill of signed `quantity` at `price`. Returns false and leaves
    /// the ledger untouched on overflow.
    pub fn apply_fill(&mut self, price: Price, quantity: Volume) -> bool {
        match self.after_fill(price, quantity) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}

/// All ledgers of a trading session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderState {
    ledgers: BTreeMap<ProductId, Ledger>,
}

impl TraderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger for a product, if it was ever touched
    pub fn ledger(&self, product: &ProductId) -> Option<&Ledger> {
        self.ledgers.get(product)
    }

    /// Ledger for a product, created flat on first use
    pub fn ledger_mut(&mut self, product: &ProductId) -> &mut Ledger {
        self.ledgers.entry(product.clone()).or_default()
    }

    /// Net position (0 for untouched products)
    pub fn position(&self, product: &ProductId) -> Volume {
        self.ledger(product).map(|l| l.position).unwrap_or(0)
    }

    /// Realized PnL (0 for untouched products)
    pub fn pnl(&self, product: &ProductId) -> Decimal {
        self.ledger(product).map(|l| l.pnl).unwrap_or(Decimal::ZERO)
    }

    /// PnL summed over all products
    pub fn total_pnl(&self) -> Decimal {
        self.ledgers.values().map(|l| l.pnl).sum()
    }

    pub fn products(&self) -> impl Iterator<Item = (&ProductId, &Ledger)> {
        self.ledgers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_fill_buy_and_sell() {
        let mut ledger = Ledger::new();
        ledger.apply_fill(110, 10);
        assert_eq!(ledger.position, 10);
        assert_eq!(ledger.pnl, Decimal::from(1100));

        ledger.apply_fill(80, -5);
        assert_eq!(ledger.position, 5);
        assert_eq!(ledger.pnl, Decimal::from(700));
    }

    #[test]
    fn test_apply_fill_pnl_overflow_leaves_ledger() {
        let mut ledger = Ledger { position: 0, pnl: Decimal::MAX - Decimal::from(10) };
        let before = ledger.clone();

        assert!(!ledger.apply_fill(i64::MAX, 1));
        assert_eq!(ledger, before);
        assert!(ledger.after_fill(5, 1).is_some());
    }

    #[test]
    fn test_prospective_overflow() {
        let ledger = Ledger { position: i64::MAX, pnl: Decimal::ZERO };
        assert_eq!(ledger.prospective(1), None);
        assert_eq!(ledger.prospective(-1), Some(i64::MAX - 1));
    }

    #[test]
    fn test_untouched_product_is_flat() {
        let state = TraderState::new();
        let product = ProductId::new("SQUID_INK");
        assert!(state.ledger(&product).is_none());
        assert_eq!(state.position(&product), 0);
        assert_eq!(state.pnl(&product), Decimal::ZERO);
    }

    #[test]
    fn test_ledgers_are_per_product() {
        let mut state = TraderState::new();
        let ink = ProductId::new("SQUID_INK");
        let kelp = ProductId::new("KELP");

        state.ledger_mut(&ink).apply_fill(100, 3);
        state.ledger_mut(&kelp).apply_fill(20, -2);

        assert_eq!(state.position(&ink), 3);
        assert_eq!(state.position(&kelp), -2);
        assert_eq!(state.total_pnl(), Decimal::from(260));
        assert_eq!(state.products().count(), 2);
    }

    #[test]
    fn test_state_roundtrip() {
        let mut state = TraderState::new();
        state.ledger_mut(&ProductId::new("SQUID_INK")).apply_fill(101, -7);

        let json = serde_json::to_string(&state).unwrap();
        let parsed: TraderState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, parsed);
    }
}

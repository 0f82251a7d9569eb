//! Synthetic order-book feed
//!
//! Generates `TradingState` snapshots from a seeded random walk so that a
//! session can be driven without recorded market data. Books are laddered
//! around the walk's mid; with probability `dislocation_ratio` a product
//! also gets one resting order placed through the mid, which is what the
//! edge trader feeds on.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use types::ids::ProductId;
use types::numeric::{Price, Volume};
use types::order::OrderDepth;
use types::state::TradingState;

/// Harness timestamps advance by this much per tick.
pub const TICK_INTERVAL: i64 = 100;

/// Errors for invalid feed parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("feed needs at least one product")]
    NoProducts,

    #[error("start mid must be positive, got {0}")]
    NonPositiveMid(Price),

    #[error("levels must be at least 1")]
    NoLevels,

    #[error("max volume must be at least 1, got {0}")]
    InvalidVolume(Volume),

    #[error("half spread must be at least 1, got {0}")]
    InvalidSpread(Price),

    #[error("dislocation ratio must be within 0.0..=1.0, got {0}")]
    InvalidRatio(f64),
}

/// Configuration for the synthetic feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Products to publish books for
    pub products: Vec<ProductId>,
    /// Mid price at tick 0
    pub start_mid: Price,
    /// Largest mid move per tick, either direction
    pub max_step: Price,
    /// Price levels per side
    pub levels: usize,
    /// Largest resting volume at a level
    pub max_volume: Volume,
    /// Distance from mid to the first level on each side
    pub half_spread: Price,
    /// Probability a product gets an order placed through the mid
    pub dislocation_ratio: f64,
    pub seed: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            products: vec![ProductId::new("SQUID_INK"), ProductId::new("KELP")],
            start_mid: 2000,
            max_step: 3,
            levels: 3,
            max_volume: 30,
            half_spread: 1,
            dislocation_ratio: 0.3,
            seed: 42,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.products.is_empty() {
            return Err(FeedError::NoProducts);
        }
        if self.start_mid <= 0 {
            return Err(FeedError::NonPositiveMid(self.start_mid));
        }
        if self.levels == 0 {
            return Err(FeedError::NoLevels);
        }
        if self.max_volume < 1 {
            return Err(FeedError::InvalidVolume(self.max_volume));
        }
        if self.half_spread < 1 {
            return Err(FeedError::InvalidSpread(self.half_spread));
        }
        if !(0.0..=1.0).contains(&self.dislocation_ratio) {
            return Err(FeedError::InvalidRatio(self.dislocation_ratio));
        }
        Ok(())
    }
}

/// Seeded snapshot generator.
pub struct BookFeed {
    config: FeedConfig,
    mids: BTreeMap<ProductId, Price>,
    timestamp: i64,
    rng: ChaCha8Rng,
}

impl BookFeed {
    /// Create a feed with a deterministic seed.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        config.validate()?;
        let mids = config
            .products
            .iter()
            .map(|p| (p.clone(), config.start_mid))
            .collect();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            mids,
            timestamp: 0,
            rng,
        })
    }

    /// Current walk mid for a product
    pub fn mid(&self, product: &ProductId) -> Option<Price> {
        self.mids.get(product).copied()
    }

    /// Produce the next tick's snapshot.
    pub fn next_snapshot(&mut self) -> TradingState {
        let mut state = TradingState::new(self.timestamp, "");
        let products = self.config.products.clone();
        for product in products {
            let depth = self.next_depth(&product);
            state.order_depths.insert(product, depth);
        }
        self.timestamp += TICK_INTERVAL;
        state
    }

    /// Produce `count` consecutive snapshots.
    pub fn take(&mut self, count: usize) -> Vec<TradingState> {
        (0..count).map(|_| self.next_snapshot()).collect()
    }

    fn next_depth(&mut self, product: &ProductId) -> OrderDepth {
        let step = if self.config.max_step > 0 {
            self.rng.gen_range(-self.config.max_step..=self.config.max_step)
        } else {
            0
        };
        let prev = self.mids.get(product).copied().unwrap_or(self.config.start_mid);
        // Keep the whole ladder above zero
        let floor = self.config.half_spread + self.config.levels as Price + 1;
        let mid = (prev + step).max(floor);
        self.mids.insert(product.clone(), mid);

        let mut depth = OrderDepth::new();
        for level in 0..self.config.levels as Price {
            let bid = mid - self.config.half_spread - level;
            let ask = mid + self.config.half_spread + level;
            let bid_volume = self.rng.gen_range(1..=self.config.max_volume);
            let ask_volume = self.rng.gen_range(1..=self.config.max_volume);
            depth.buy_orders.insert(bid, -bid_volume);
            depth.sell_orders.insert(ask, ask_volume);
        }

        if self.rng.gen_bool(self.config.dislocation_ratio) {
            self.dislocate(mid, &mut depth);
        }
        depth
    }

    /// Rest one order well through the mid on a random side.
    fn dislocate(&mut self, mid: Price, depth: &mut OrderDepth) {
        let width = self.config.half_spread + self.config.levels as Price;
        let distance = self.rng.gen_range(width..=width * 4);
        let volume = self.rng.gen_range(1..=self.config.max_volume);
        if self.rng.gen_bool(0.5) {
            depth.buy_orders.insert(mid + distance, -volume);
        } else {
            let price = (mid - distance).max(1);
            depth.sell_orders.insert(price, volume);
        }
    }
}

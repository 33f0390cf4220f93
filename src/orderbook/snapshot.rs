//! Read-only view over both sides of the book.
//!
//! A snapshot borrows the book, so nothing can mutate it while the snapshot
//! is alive. Rendering lives in `report`; this module only traverses and
//! hashes.

use sha2::{Digest, Sha256};

use crate::error::EngineError;
use crate::orderbook::{BookSide, LevelView};
use crate::types::{Order, Side};

/// Borrowed view of the bid and ask sides.
#[derive(Debug, Clone, Copy)]
pub struct BookSnapshot<'a> {
    bids: &'a BookSide,
    asks: &'a BookSide,
}

impl<'a> BookSnapshot<'a> {
    pub fn new(bids: &'a BookSide, asks: &'a BookSide) -> Self {
        Self { bids, asks }
    }

    #[inline]
    pub fn bids(&self) -> &'a BookSide {
        self.bids
    }

    #[inline]
    pub fn asks(&self) -> &'a BookSide {
        self.asks
    }

    pub fn side(&self, side: Side) -> &'a BookSide {
        match side {
            Side::Buy => self.bids,
            Side::Sell => self.asks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Price levels of one side, best first
    pub fn levels(&self, side: Side) -> impl Iterator<Item = LevelView<'a>> + 'a {
        self.side(side).levels()
    }

    /// Best ask minus best bid, if both sides are present and uncrossed
    pub fn spread(&self) -> Option<u64> {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    /// SHA-256 over the SSZ encoding of every resting order
    ///
    /// Bids first, then asks; within a side in priority order, FIFO within
    /// a price. Equal books (same orders, same queue positions) hash equal.
    pub fn state_root(&self) -> Result<[u8; 32], EngineError> {
        let mut hasher = Sha256::new();

        for side in [self.bids, self.asks] {
            hasher.update((side.order_count() as u64).to_le_bytes());
            for order in side.resting_orders() {
                hasher.update(encode(order)?);
            }
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }
}

fn encode(order: &Order) -> Result<Vec<u8>, EngineError> {
    ssz_rs::serialize(order).map_err(|err| EngineError::Encode(format!("{err:?}")))
}

// ============================================================================
// Unit Tests
// ============================================================================

//! Session receipt: what a replay of an order stream did.
//!
//! The receipt accumulates counters while orders are submitted and is
//! sealed with the book state root once the session ends.

use crate::engine::{Disposition, SubmitOutcome};

/// Session summary, sealed with the end-of-session book state root.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 digest over the resting orders in
/// traversal order (see `BookSnapshot::state_root`). Two replays of the same
/// stream must produce the same root.
///
/// ## Example
///
/// ```
/// use auction_core::engine::MatchingEngine;
/// use auction_core::types::{Order, SessionReceipt, Side};
///
/// let mut engine = MatchingEngine::new();
/// let mut receipt = SessionReceipt::default();
///
/// let outcome = engine.submit(Order::limit(Side::Buy, 10, 100)).unwrap();
/// receipt.record(&outcome);
/// receipt.seal(engine.snapshot().state_root().unwrap());
///
/// assert_eq!(receipt.orders_processed, 1);
/// assert_eq!(receipt.orders_rested, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionReceipt {
    /// Orders accepted by the engine
    pub orders_processed: u64,

    /// Orders refused by the engine (e.g. insufficient liquidity)
    pub orders_rejected: u64,

    /// Individual fills executed
    pub fills_executed: u64,

    /// Total quantity matched across all fills
    pub quantity_matched: u64,

    /// Limit orders that left a remainder in the book
    pub orders_rested: u64,

    /// Market-order quantity dropped for lack of liquidity
    pub quantity_discarded: u64,

    /// Book state root at the end of the session
    pub state_root: [u8; 32],
}

impl SessionReceipt {
    /// Fold one submission into the counters
    pub fn record(&mut self, outcome: &SubmitOutcome) {
        self.orders_processed += 1;
        self.fills_executed += outcome.fills.len() as u64;
        self.quantity_matched += outcome.filled_quantity();

        match outcome.disposition {
            Disposition::Filled => {}
            Disposition::Rested { .. } => self.orders_rested += 1,
            Disposition::Discarded { unfilled } => self.quantity_discarded += unfilled,
        }
    }

    /// Count one refused submission
    pub fn record_rejection(&mut self) {
        self.orders_rejected += 1;
    }

    /// Attach the final book state root
    pub fn seal(&mut self, state_root: [u8; 32]) {
        self.state_root = state_root;
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

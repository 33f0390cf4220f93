//! # auction-core
//!
//! Single-instrument continuous double-auction matching engine.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Fill, SessionReceipt)
//! - **OrderBook**: Per-side price index over slab-backed FIFO levels
//! - **Engine**: Price-time priority matcher that owns both sides
//! - **Feed** / **Report**: Reading order records and rendering results,
//!   kept outside the matching path
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical order streams produce identical fills and books
//! 2. **Integer prices**: All prices and quantities are `u64`
//! 3. **Arena storage**: Resting orders live in a slab, addressed by handle
//! 4. **Synchronous Execution**: One `submit` at a time, run to completion
//!
//! ## Example
//!
//! ```
//! use auction_core::{MatchingEngine, Order, Side};
//!
//! let mut engine = MatchingEngine::new();
//! engine.submit(Order::limit(Side::Buy, 5, 101)).unwrap();
//! engine.submit(Order::limit(Side::Buy, 5, 100)).unwrap();
//!
//! let outcome = engine.submit(Order::limit(Side::Sell, 8, 100)).unwrap();
//! let fills: Vec<(u64, u64)> = outcome.fills.iter().map(|f| (f.price, f.quantity)).collect();
//! assert_eq!(fills, vec![(101, 5), (100, 3)]);
//! assert_eq!(engine.bids().depth(100), 2);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Fill, SessionReceipt
pub mod types;

/// Order book: slab-backed price levels per side
pub mod orderbook;

/// Matching engine: price-time priority matching
pub mod engine;

/// Error types
pub mod error;

/// Order record reader
pub mod feed;

/// Text rendering of submissions and the book
pub mod report;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Order, OrderType, Side, Fill, SessionReceipt};
pub use orderbook::{BookSide, BookSnapshot, OrderHandle, PriceLevel};
pub use engine::{Disposition, EngineConfig, MarketResiduePolicy, MatchingEngine, SubmitOutcome};
pub use error::{BookError, EngineError, FeedError, RecordError};

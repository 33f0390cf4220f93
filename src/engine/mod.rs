//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input stream always produces the same fills and book
//! 2. **Synchronous Execution**: `submit` runs to completion, no async
//! 3. **Price-Time Priority**: Best price first, then FIFO
//! 4. **Structured results**: `submit` returns fills and a disposition;
//!    rendering belongs to the caller
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first)
//! - **Sell orders** match against bids (highest price first)
//! - **Limit orders** match while the best opposite price is at or inside
//!   the limit; equal prices cross
//! - **Market orders** match while the opposite side has orders
//! - **Trade price** is always the resting order's price
//! - **Unfilled limit quantity** rests on the book
//! - **Unfilled market quantity** is discarded or rejected, per
//!   [`MarketResiduePolicy`]
//!
//! ## Example
//!
//! ```
//! use auction_core::engine::{Disposition, MatchingEngine};
//! use auction_core::types::{Order, Side};
//!
//! let mut engine = MatchingEngine::new();
//! engine.submit(Order::limit(Side::Buy, 6, 100)).unwrap();
//!
//! let outcome = engine.submit(Order::market(Side::Sell, 10)).unwrap();
//! assert_eq!(outcome.filled_quantity(), 6);
//! assert_eq!(outcome.disposition, Disposition::Discarded { unfilled: 4 });
//! assert!(engine.bids().is_empty());
//! ```

pub mod config;
pub mod matcher;

pub use config::{EngineConfig, MarketResiduePolicy};
pub use matcher::{Disposition, MatchingEngine, SubmitOutcome};

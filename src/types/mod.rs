//! Core data types for the auction matching engine
//!
//! ## Types
//!
//! - [`Order`]: A market or limit order
//! - [`Side`]: Buy or Sell
//! - [`OrderType`]: Market or Limit
//! - [`Fill`]: One execution against a resting order
//! - [`SessionReceipt`]: Summary of a replayed order stream

mod order;
mod fill;
mod receipt;

// Re-export all types at module level
pub use order::{Order, Side, OrderType};
pub use fill::Fill;
pub use receipt::SessionReceipt;

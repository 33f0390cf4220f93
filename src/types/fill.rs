//! Fill type: one execution between the incoming order and a resting order.

use crate::orderbook::OrderHandle;

/// A fill is a single quantity exchange against one resting order.
///
/// ## Price Discovery
///
/// The fill always executes at the resting order's price. An incoming buy
/// limited at 105 that lifts an ask at 100 fills at 100.
///
/// ## Example
///
/// ```
/// use auction_core::engine::MatchingEngine;
/// use auction_core::types::{Order, Side};
///
/// let mut engine = MatchingEngine::new();
/// engine.submit(Order::limit(Side::Sell, 5, 100)).unwrap();
///
/// let outcome = engine.submit(Order::limit(Side::Buy, 3, 105)).unwrap();
/// assert_eq!(outcome.fills[0].price, 100);
/// assert_eq!(outcome.fills[0].quantity, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    /// Execution price (the resting order's price)
    pub price: u64,

    /// Executed quantity
    pub quantity: u64,

    /// The resting order that traded
    pub resting: OrderHandle,
}

impl Fill {
    pub fn new(price: u64, quantity: u64, resting: OrderHandle) -> Self {
        Self {
            price,
            quantity,
            resting,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

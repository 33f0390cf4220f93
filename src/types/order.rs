//! Order types for the auction matching engine.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs so a resting order has one
//! fixed-size little-endian encoding. Book state roots are hashed over it.
//!
//! ## Prices
//!
//! Prices and quantities are plain `u64` ticks/units. A market order stores
//! price 0 and exposes no limit price; the engine never compares it on price.

use ssz_rs::prelude::*;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Represented as u8 for SSZ compatibility:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid)
    #[default]
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Whether an incoming order on this side with `limit` may trade against
    /// a resting opposite order priced at `resting`. Equal prices cross.
    #[inline]
    pub fn crosses(self, limit: u64, resting: u64) -> bool {
        match self {
            Side::Buy => resting <= limit,
            Side::Sell => resting >= limit,
        }
    }
}

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    /// Market order - takes whatever the opposite side offers, never rests
    Market,
    /// Limit order - executes at the limit price or better, rests the remainder
    #[default]
    Limit,
}

impl OrderType {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            OrderType::Market => 0,
            OrderType::Limit => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderType::Market),
            1 => Some(OrderType::Limit),
            _ => None,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// An anonymous order: kind, side, quantity and (for limits) a price.
///
/// `quantity` is the open quantity. It only ever moves down, through
/// [`Order::fill`], and never below zero.
///
/// ## SSZ Layout
///
/// Fixed-size container, 18 bytes: `order_type_raw` (1) + `side_raw` (1)
/// + `quantity` (8) + `price` (8).
///
/// ## Example
///
/// ```
/// use auction_core::types::{Order, OrderType, Side};
///
/// let bid = Order::limit(Side::Buy, 10, 100);
/// assert_eq!(bid.order_type(), OrderType::Limit);
/// assert_eq!(bid.limit_price(), Some(100));
///
/// let sweep = Order::market(Side::Sell, 4);
/// assert_eq!(sweep.limit_price(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Order type as u8 (0=Market, 1=Limit)
    pub(crate) order_type_raw: u8,

    /// Order side as u8 (0=Buy, 1=Sell)
    pub(crate) side_raw: u8,

    /// Open quantity, decremented as the order is matched
    pub quantity: u64,

    /// Limit price; 0 and meaningless for market orders
    pub price: u64,
}

impl Order {
    /// Create a limit order
    pub fn limit(side: Side, quantity: u64, price: u64) -> Self {
        Self {
            order_type_raw: OrderType::Limit.to_u8(),
            side_raw: side.to_u8(),
            quantity,
            price,
        }
    }

    /// Create a market order
    pub fn market(side: Side, quantity: u64) -> Self {
        Self {
            order_type_raw: OrderType::Market.to_u8(),
            side_raw: side.to_u8(),
            quantity,
            price: 0,
        }
    }

    /// Get the order side
    pub fn side(&self) -> Side {
        Side::from_u8(self.side_raw).expect("invariant: side_raw is only set from a Side")
    }

    /// Get the order type
    pub fn order_type(&self) -> OrderType {
        OrderType::from_u8(self.order_type_raw).expect("invariant: order_type_raw is only set from an OrderType")
    }

    #[inline]
    pub fn is_market(&self) -> bool {
        self.order_type() == OrderType::Market
    }

    #[inline]
    pub fn is_limit(&self) -> bool {
        self.order_type() == OrderType::Limit
    }

    /// The limit price, or `None` for a market order
    #[inline]
    pub fn limit_price(&self) -> Option<u64> {
        match self.order_type() {
            OrderType::Limit => Some(self.price),
            OrderType::Market => None,
        }
    }

    /// Check if nothing is left to fill
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (less than requested if the order has
    /// less open quantity)
    pub fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.quantity);
        self.quantity -= actual_fill;
        actual_fill
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

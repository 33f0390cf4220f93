//! Human-readable rendering of orders, fills and the book.
//!
//! Nothing in the engine depends on this module.

use std::fmt::{self, Write as _};

use crate::engine::{Disposition, SubmitOutcome};
use crate::orderbook::{BookSide, BookSnapshot};
use crate::types::{Fill, Order, OrderType, Side, SessionReceipt};

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        })
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderType::Market => "Market",
            OrderType::Limit => "Limit",
        })
    }
}

/// `Limit Buy 10 @ 100`, `Market Sell 4`
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.order_type(), self.side(), self.quantity)?;
        match self.limit_price() {
            Some(price) => write!(f, " @ {price}"),
            None => Ok(()),
        }
    }
}

/// `filled 4 @ 100`
impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "filled {} @ {}", self.quantity, self.price)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Filled => f.write_str("fully filled"),
            Disposition::Rested { quantity, .. } => write!(f, "rested {quantity}"),
            Disposition::Discarded { unfilled } => write!(f, "discarded {unfilled} unfilled"),
        }
    }
}

/// Two lines, `Bids: ...` then `Asks: ...`, best price first and oldest
/// order first within a price.
impl fmt::Display for BookSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bids: ")?;
        write_side(f, self.bids())?;
        write!(f, "\nAsks: ")?;
        write_side(f, self.asks())
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &BookSide) -> fmt::Result {
    for (i, order) in side.resting_orders().enumerate() {
        if i > 0 {
            f.write_str(" | ")?;
        }
        write!(f, "{order}")?;
    }
    Ok(())
}

impl fmt::Display for SessionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "orders processed: {}", self.orders_processed)?;
        writeln!(f, "orders rejected:  {}", self.orders_rejected)?;
        writeln!(f, "fills executed:   {}", self.fills_executed)?;
        writeln!(f, "quantity matched: {}", self.quantity_matched)?;
        writeln!(f, "orders rested:    {}", self.orders_rested)?;
        writeln!(f, "qty discarded:    {}", self.quantity_discarded)?;
        write!(f, "state root:       {}", self.state_root_hex())
    }
}

/// Render one submission: the incoming order, each fill, then what became of
/// the remainder.
///
/// ```
/// use auction_core::engine::MatchingEngine;
/// use auction_core::report::render_submission;
/// use auction_core::types::{Order, Side};
///
/// let mut engine = MatchingEngine::new();
/// engine.submit(Order::limit(Side::Buy, 6, 100)).unwrap();
///
/// let order = Order::market(Side::Sell, 10);
/// let outcome = engine.submit(order.clone()).unwrap();
///
/// assert_eq!(
///     render_submission(&order, &outcome),
///     "Handling order: Market Sell 10\n  filled 6 @ 100\n  discarded 4 unfilled\n",
/// );
/// ```
pub fn render_submission(order: &Order, outcome: &SubmitOutcome) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "Handling order: {order}");
    for fill in &outcome.fills {
        let _ = writeln!(out, "  {fill}");
    }
    let _ = writeln!(out, "  {}", outcome.disposition);
    out
}

// ============================================================================
// Unit Tests
// ============================================================================

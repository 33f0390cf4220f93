//! One side of the book: a price index over FIFO price levels.
//!
//! ## Architecture
//!
//! - **Slab**: arena holding every resting order of this side
//! - **BTreeMap**: price -> `PriceLevel`, each level a queue threaded
//!   through the slab
//!
//! ## Price Ordering
//!
//! - **Bids**: best = highest price, i.e. the last key of the map
//! - **Asks**: best = lowest price, i.e. the first key of the map
//!
//! ## Invariants
//!
//! - Every price key present maps to a non-empty level
//! - Every resting order has quantity > 0
//!
//! Both are maintained here; callers cannot leave an empty level or a
//! zero-quantity order behind through any public method.
//!
//! ## Example
//!
//! ```
//! use auction_core::orderbook::BookSide;
//! use auction_core::types::{Order, Side};
//!
//! let mut bids = BookSide::with_capacity(Side::Buy, 1_000);
//! bids.insert(Order::limit(Side::Buy, 10, 99)).unwrap();
//! let best = bids.insert(Order::limit(Side::Buy, 5, 100)).unwrap();
//!
//! assert_eq!(bids.best_price(), Some(100));
//! assert!(bids.remove(best));
//! assert!(!bids.remove(best));
//! assert_eq!(bids.best_price(), Some(99));
//! ```

use std::collections::BTreeMap;

use slab::Slab;

use crate::error::BookError;
use crate::orderbook::{LevelOrders, OrderHandle, OrderNode, PriceLevel};
use crate::types::{Fill, Order, Side};

/// Resting orders of one side of the book.
#[derive(Debug)]
pub struct BookSide {
    side: Side,

    /// Arena of resting orders
    /// Key: slab index, Value: OrderNode
    orders: Slab<OrderNode>,

    /// Price levels in ascending price order
    levels: BTreeMap<u64, PriceLevel>,

    /// Sequence number handed to the next resting order
    next_seq: u64,
}

impl BookSide {
    /// Create an empty side
    pub fn new(side: Side) -> Self {
        Self::with_capacity(side, 0)
    }

    /// Create a side with `order_capacity` pre-allocated slots
    pub fn with_capacity(side: Side, order_capacity: usize) -> Self {
        Self {
            side,
            orders: Slab::with_capacity(order_capacity),
            levels: BTreeMap::new(),
            next_seq: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Number of resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Number of distinct prices
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Open quantity across every level
    pub fn total_quantity(&self) -> u64 {
        self.levels
            .values()
            .fold(0u64, |acc, level| acc.saturating_add(level.total_quantity))
    }

    /// Open quantity resting at `price` (0 if there is no such level)
    pub fn depth(&self, price: u64) -> u64 {
        self.levels.get(&price).map_or(0, |level| level.total_quantity)
    }

    // ========================================================================
    // Best of Book
    // ========================================================================

    /// The best price level
    pub fn best_level(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values().next_back(),
            Side::Sell => self.levels.values().next(),
        }
    }

    #[inline]
    pub fn best_price(&self) -> Option<u64> {
        self.best_level().map(|level| level.price)
    }

    /// Slab key of the first order at the best level
    fn best_key(&self) -> Option<usize> {
        let level = self.best_level()?;
        Some(level.peek_head().expect("invariant: price levels in the book are never empty"))
    }

    /// First order at the best price: the next one to trade
    pub fn best_order(&self) -> Option<&Order> {
        let key = self.best_key()?;
        self.orders.get(key).map(|node| &node.order)
    }

    pub fn best_handle(&self) -> Option<OrderHandle> {
        let key = self.best_key()?;
        self.orders.get(key).map(|node| node.handle(key))
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Rest a limit order at the back of its price level
    ///
    /// The order is now behind every order already resting at its price and
    /// ahead of every later one.
    ///
    /// # Errors
    ///
    /// Market orders, orders for the other side and zero-quantity orders are
    /// refused; the book is unchanged.
    pub fn insert(&mut self, order: Order) -> Result<OrderHandle, BookError> {
        if order.is_market() {
            return Err(BookError::MarketOrder);
        }
        if order.side() != self.side {
            return Err(BookError::WrongSide {
                expected: self.side,
                got: order.side(),
            });
        }
        if order.quantity == 0 {
            return Err(BookError::ZeroQuantity);
        }

        let price = order.price;
        let seq = self.next_seq;
        self.next_seq += 1;

        let key = self.orders.insert(OrderNode::new(order, seq));
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(key, &mut self.orders);

        Ok(OrderHandle { key, seq })
    }

    /// Remove a resting order
    ///
    /// # Returns
    ///
    /// `false` if the handle names no resting order (already filled, already
    /// removed, or a reused slot). This is a normal outcome, not an error.
    pub fn remove(&mut self, handle: OrderHandle) -> bool {
        self.take(handle).is_some()
    }

    /// Remove a resting order and hand it back
    pub fn take(&mut self, handle: OrderHandle) -> Option<Order> {
        let node = self.orders.get(handle.key)?;
        if node.seq != handle.seq {
            return None;
        }
        let price = node.price();

        let level = self
            .levels
            .get_mut(&price)
            .expect("invariant: a resting order's price level exists");
        level.remove(handle.key, &mut self.orders);
        if level.is_empty() {
            self.levels.remove(&price);
        }

        Some(self.orders.remove(handle.key).order)
    }

    /// Look up a resting order
    pub fn get(&self, handle: OrderHandle) -> Option<&Order> {
        self.orders
            .get(handle.key)
            .filter(|node| node.seq == handle.seq)
            .map(|node| &node.order)
    }

    #[inline]
    pub fn contains(&self, handle: OrderHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Execute up to `quantity` against the first order at the best price
    ///
    /// The order keeps its queue position after a partial fill. Once its
    /// quantity reaches zero it is removed, and its level with it if that
    /// leaves the level empty.
    ///
    /// # Returns
    ///
    /// The fill at the resting order's price, or None if this side is empty
    pub fn fill_best(&mut self, quantity: u64) -> Option<Fill> {
        debug_assert!(quantity > 0, "a fill must execute a positive quantity");

        let mut entry = match self.side {
            Side::Buy => self.levels.last_entry()?,
            Side::Sell => self.levels.first_entry()?,
        };
        let level = entry.get_mut();
        let key = level
            .peek_head()
            .expect("invariant: price levels in the book are never empty");

        let node = self
            .orders
            .get_mut(key)
            .expect("invariant: level head is a live slot");
        let executed = node.fill(quantity);
        let fill = Fill::new(node.price(), executed, node.handle(key));
        let exhausted = node.is_filled();

        level.reduce_quantity(executed);
        if exhausted {
            level.remove(key, &mut self.orders);
            self.orders.remove(key);
            if level.is_empty() {
                entry.remove();
            }
        }

        Some(fill)
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Price levels in priority order, best first
    pub fn levels(&self) -> Box<dyn Iterator<Item = LevelView<'_>> + '_> {
        let orders = &self.orders;
        let views = self
            .levels
            .values()
            .map(move |level| LevelView { level, orders });

        match self.side {
            Side::Buy => Box::new(views.rev()),
            Side::Sell => Box::new(views),
        }
    }

    /// Resting orders in priority order: best price first, FIFO within a price
    pub fn resting_orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.levels()
            .flat_map(|view| view.orders().map(|(_, order)| order))
    }

    /// Panic if any book invariant does not hold
    ///
    /// Walks every level and order; meant for tests and debugging.
    pub fn assert_invariants(&self) {
        let mut linked = 0usize;

        for (&price, level) in &self.levels {
            assert_eq!(price, level.price, "level keyed at {price} holds price {}", level.price);
            assert!(!level.is_empty(), "empty price level {price} left in the {:?} book", self.side);

            let mut count = 0usize;
            let mut total = 0u64;
            for (_, order) in level.orders(&self.orders) {
                assert!(order.quantity > 0, "zero-quantity order resting at {price}");
                assert!(order.is_limit(), "market order resting at {price}");
                assert_eq!(order.price, price, "order queued under the wrong price");
                assert_eq!(order.side(), self.side, "order resting on the wrong side");
                count += 1;
                total += order.quantity;
            }

            assert_eq!(count, level.order_count, "order count out of sync at {price}");
            assert_eq!(total, level.total_quantity, "level quantity out of sync at {price}");
            linked += count;
        }

        assert_eq!(linked, self.orders.len(), "slab holds orders not linked into any level");
    }
}

/// Read-only view of one price level and its queue.
#[derive(Debug, Clone, Copy)]
pub struct LevelView<'a> {
    level: &'a PriceLevel,
    orders: &'a Slab<OrderNode>,
}

impl<'a> LevelView<'a> {
    #[inline]
    pub fn price(&self) -> u64 {
        self.level.price
    }

    #[inline]
    pub fn total_quantity(&self) -> u64 {
        self.level.total_quantity
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.level.order_count
    }

    /// Orders at this price, oldest first
    pub fn orders(&self) -> LevelOrders<'a> {
        self.level.orders(self.orders)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

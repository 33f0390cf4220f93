//! Price level management for orders at the same price.
//!
//! ## Design
//!
//! A `PriceLevel` represents all resting orders at a single price point.
//! Orders are kept in a doubly-linked list threaded through the side's slab
//! for FIFO ordering (time priority within a price).
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> order2 <-> order3 <-> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Matching consumes orders from the head
//! - Any order can be removed in O(1) using the slab key
//! - A partial fill never moves an order within the queue

use slab::Slab;

use crate::orderbook::{OrderHandle, OrderNode};
use crate::types::Order;

/// A price level containing orders at a single price.
///
/// The order data lives in the slab; this struct only holds the queue
/// metadata. The owning book side drops a level as soon as it is empty.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// Price for this level
    pub price: u64,

    /// Total open quantity at this level
    /// Updated when orders are added/removed/filled
    pub total_quantity: u64,

    /// Head of the order queue (oldest order, slab key)
    /// This is the first order to be matched
    pub head: Option<usize>,

    /// Tail of the order queue (newest order, slab key)
    pub tail: Option<usize>,

    /// Number of orders at this price level
    pub order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new(price: u64) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Add an order to the tail of the queue
    ///
    /// # Panics
    ///
    /// Panics if `key` or the current tail is not a live slab entry, which
    /// means the book's links are corrupt.
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let node = slab.get_mut(key).expect("invariant: pushed key is a live slot");
        let quantity = node.remaining();

        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = slab.get_mut(tail_key).expect("invariant: level tail is a live slot");
            tail_node.next = Some(key);
        } else {
            // Empty list - this is also the head
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity = self.total_quantity.saturating_add(quantity);
    }

    /// Unlink an order from the queue by slab key
    ///
    /// The node stays in the slab; the caller frees it.
    ///
    /// # Returns
    ///
    /// The open quantity of the unlinked order
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> u64 {
        let node = slab.get(key).expect("invariant: removed key is a live slot");
        let quantity = node.remaining();
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            let prev_node = slab.get_mut(prev).expect("invariant: prev link is a live slot");
            prev_node.next = next_key;
        } else {
            self.head = next_key;
        }

        if let Some(next) = next_key {
            let next_node = slab.get_mut(next).expect("invariant: next link is a live slot");
            next_node.prev = prev_key;
        } else {
            self.tail = prev_key;
        }

        let node = slab.get_mut(key).expect("invariant: removed key is a live slot");
        node.prev = None;
        node.next = None;

        self.order_count -= 1;
        self.total_quantity = self.total_quantity.saturating_sub(quantity);

        quantity
    }

    /// Get the head order's slab key (oldest order)
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Update the total quantity after a partial fill
    pub fn reduce_quantity(&mut self, filled_quantity: u64) {
        self.total_quantity = self.total_quantity.saturating_sub(filled_quantity);
    }

    /// Walk the queue from head to tail
    pub fn orders<'a>(&'a self, slab: &'a Slab<OrderNode>) -> LevelOrders<'a> {
        LevelOrders {
            slab,
            cursor: self.head,
        }
    }
}

/// FIFO iterator over one price level, oldest order first.
#[derive(Debug, Clone)]
pub struct LevelOrders<'a> {
    slab: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for LevelOrders<'a> {
    type Item = (OrderHandle, &'a Order);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        let node = self.slab.get(key)?;
        self.cursor = node.next;
        Some((node.handle(key), &node.order))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

//! Order node for slab-based storage.
//!
//! ## Design
//!
//! `OrderNode` wraps a resting `Order` with doubly-linked list pointers so
//! it can be unlinked from its price level in O(1) given its slab key.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! Because keys are reused, a key alone is not a stable identity. Each node
//! also carries the insertion sequence number of its book side, and an
//! [`OrderHandle`] names both.

use crate::types::Order;

/// Stable identity of a resting order within one book side.
///
/// `key` is the slab slot, `seq` the side's insertion sequence number at the
/// time the order rested. A handle whose slot has since been freed and
/// reused no longer matches and is treated as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderHandle {
    pub key: usize,
    pub seq: u64,
}

/// Order node stored in the slab.
///
/// ## Memory Layout
///
/// ```text
/// OrderNode {
///     order: Order
///     seq:   u64
///     next:  Option<usize>
///     prev:  Option<usize>
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The resting order
    pub order: Order,

    /// Insertion sequence number on this book side
    pub seq: u64,

    /// Next order in the price level queue (slab key)
    /// None if this is the tail (newest order)
    pub next: Option<usize>,

    /// Previous order in the price level queue (slab key)
    /// None if this is the head (oldest order)
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub fn new(order: Order, seq: u64) -> Self {
        Self {
            order,
            seq,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (not part of any price level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Handle for this node stored at `key`
    #[inline]
    pub fn handle(&self, key: usize) -> OrderHandle {
        OrderHandle { key, seq: self.seq }
    }

    #[inline]
    pub fn price(&self) -> u64 {
        self.order.price
    }

    /// Open quantity of the resting order
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.order.quantity
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (may be less than requested)
    #[inline]
    pub fn fill(&mut self, quantity: u64) -> u64 {
        self.order.fill(quantity)
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.order.is_filled()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

//! Price-time priority matcher.

use tracing::{debug, info, warn};

use crate::engine::{EngineConfig, MarketResiduePolicy};
use crate::error::EngineError;
use crate::orderbook::{BookSide, BookSnapshot, OrderHandle};
use crate::types::{Fill, Order, Side};

/// What became of the incoming order once matching stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Nothing left over
    Filled,

    /// A limit order's remainder now rests in the book
    Rested { handle: OrderHandle, quantity: u64 },

    /// A market order's remainder was dropped for lack of liquidity
    Discarded { unfilled: u64 },
}

/// Result of one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Executions in the order they happened
    pub fills: Vec<Fill>,

    /// The incoming order with its quantity reduced by every fill
    pub remaining: Order,

    pub disposition: Disposition,
}

impl SubmitOutcome {
    /// Total quantity executed across all fills
    pub fn filled_quantity(&self) -> u64 {
        self.fills.iter().map(|fill| fill.quantity).sum()
    }

    #[inline]
    pub fn is_fully_filled(&self) -> bool {
        self.disposition == Disposition::Filled
    }

    /// Handle of the rested remainder, if any
    pub fn rested(&self) -> Option<OrderHandle> {
        match self.disposition {
            Disposition::Rested { handle, .. } => Some(handle),
            _ => None,
        }
    }
}

/// Single-instrument matching engine.
///
/// Owns the bid and ask sides. `submit` runs to completion and is the only
/// mutation path; wrap the engine in a single lock or single-consumer queue
/// if orders arrive from several threads.
#[derive(Debug)]
pub struct MatchingEngine {
    bids: BookSide,
    asks: BookSide,
    config: EngineConfig,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            bids: BookSide::with_capacity(Side::Buy, config.order_capacity),
            asks: BookSide::with_capacity(Side::Sell, config.order_capacity),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn bids(&self) -> &BookSide {
        &self.bids
    }

    #[inline]
    pub fn asks(&self) -> &BookSide {
        &self.asks
    }

    pub fn book(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn book_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Read-only view of both sides for end-of-session rendering
    pub fn snapshot(&self) -> BookSnapshot<'_> {
        BookSnapshot::new(&self.bids, &self.asks)
    }

    /// Match an incoming order and rest any limit remainder
    ///
    /// The order trades against the best opposite price, oldest order first,
    /// until it is filled, the opposite side is empty, or (for a limit
    /// order) the best opposite price no longer crosses its limit. Each fill
    /// executes at the resting order's price. A limit remainder then rests
    /// on its own side; a market remainder never rests.
    ///
    /// # Errors
    ///
    /// With [`MarketResiduePolicy::Reject`], a market order larger than the
    /// opposite side's total quantity returns
    /// [`EngineError::InsufficientLiquidity`] and leaves the book untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use auction_core::engine::{Disposition, MatchingEngine};
    /// use auction_core::types::{Order, Side};
    ///
    /// let mut engine = MatchingEngine::new();
    /// engine.submit(Order::limit(Side::Buy, 10, 100)).unwrap();
    ///
    /// let outcome = engine.submit(Order::limit(Side::Sell, 4, 100)).unwrap();
    /// assert_eq!(outcome.filled_quantity(), 4);
    /// assert_eq!(outcome.disposition, Disposition::Filled);
    /// assert_eq!(engine.bids().depth(100), 6);
    /// ```
    pub fn submit(&mut self, mut order: Order) -> Result<SubmitOutcome, EngineError> {
        let side = order.side();
        let limit = order.limit_price();

        if limit.is_none() && self.config.market_residue == MarketResiduePolicy::Reject {
            let available = self.book(side.opposite()).total_quantity();
            if available < order.quantity {
                info!(?side, requested = order.quantity, available, "market order rejected");
                return Err(EngineError::InsufficientLiquidity {
                    requested: order.quantity,
                    available,
                });
            }
        }

        let mut fills = Vec::new();
        let opposite = self.book_mut(side.opposite());

        while order.quantity > 0 {
            let (best_price, best_quantity) = match opposite.best_order() {
                Some(best) => (best.price, best.quantity),
                None => break,
            };
            if let Some(limit) = limit {
                if !side.crosses(limit, best_price) {
                    break;
                }
            }

            let execute = order.quantity.min(best_quantity);
            let fill = opposite
                .fill_best(execute)
                .expect("invariant: best order exists while the side is non-empty");
            order.fill(fill.quantity);

            debug!(?side, price = fill.price, quantity = fill.quantity, "fill");
            fills.push(fill);
        }

        let disposition = if order.is_filled() {
            Disposition::Filled
        } else if order.is_limit() {
            let quantity = order.quantity;
            let handle = self.book_mut(side).insert(order.clone())?;
            debug!(?side, price = order.price, quantity, "rested");
            Disposition::Rested { handle, quantity }
        } else {
            warn!(?side, unfilled = order.quantity, "market order residue discarded");
            Disposition::Discarded {
                unfilled: order.quantity,
            }
        };

        Ok(SubmitOutcome {
            fills,
            remaining: order,
            disposition,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

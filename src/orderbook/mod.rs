//! Order book module.
//!
//! ## Architecture
//!
//! Each side of the book is a [`BookSide`]:
//!
//! - **Slab-based storage**: O(1) insert, removal and lookup of resting orders
//! - **Price levels**: orders grouped by price in a BTreeMap
//! - **Price-time priority**: FIFO ordering at each price level
//!
//! ## Components
//!
//! - [`OrderNode`]: a resting `Order` with linked-list pointers
//! - [`OrderHandle`]: stable identity of a resting order (slot + sequence)
//! - [`PriceLevel`]: FIFO queue of orders at a single price
//! - [`BookSide`]: price index and arena for one side
//! - [`BookSnapshot`]: read-only traversal of both sides
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert order | O(log n) |
//! | Remove order by handle | O(log n) |
//! | Best price / best order | O(log n) |
//! | Fill best order | O(log n) |
//!
//! n is the number of distinct price levels on the side.
//!
//! ## Example
//!
//! ```
//! use auction_core::orderbook::BookSide;
//! use auction_core::types::{Order, Side};
//!
//! let mut asks = BookSide::with_capacity(Side::Sell, 10_000);
//! asks.insert(Order::limit(Side::Sell, 5, 101)).unwrap();
//! asks.insert(Order::limit(Side::Sell, 5, 100)).unwrap();
//!
//! assert_eq!(asks.best_price(), Some(100));
//! ```

pub mod node;
pub mod level;
pub mod side;
pub mod snapshot;

pub use node::{OrderHandle, OrderNode};
pub use level::{LevelOrders, PriceLevel};
pub use side::{BookSide, LevelView};
pub use snapshot::BookSnapshot;

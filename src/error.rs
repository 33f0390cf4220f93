//! Error types.
//!
//! Invariant violations (an empty price level, a dangling queue link) are not
//! represented here. They are bugs and panic with an "invariant" message.

use thiserror::Error;

use crate::types::Side;

/// Refusals from a single book side.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("market orders never rest in the book")]
    MarketOrder,

    #[error("{got:?} order offered to the {expected:?} side of the book")]
    WrongSide { expected: Side, got: Side },

    #[error("an order with zero quantity cannot rest")]
    ZeroQuantity,
}

/// Refusals from the matching engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Raised under `MarketResiduePolicy::Reject` before the book is touched
    #[error("insufficient liquidity: market order for {requested} against {available} available")]
    InsufficientLiquidity { requested: u64, available: u64 },

    #[error(transparent)]
    Book(#[from] BookError),

    #[error("failed to encode book state: {0}")]
    Encode(String),
}

/// What is wrong with one feed record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("unknown order type {0:?}, expected M or L")]
    UnknownType(String),

    #[error("unknown side {0:?}, expected B or S")]
    UnknownSide(String),

    #[error("invalid {field} {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unexpected trailing field {0:?}")]
    TrailingField(String),
}

/// Failures while reading an order feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read order feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RecordError,
    },
}

impl FeedError {
    /// Whether the reader can carry on with the next line. Bad records and
    /// lines that are not valid UTF-8 only cost that line.
    pub fn is_recoverable(&self) -> bool {
        match self {
            FeedError::Malformed { .. } => true,
            FeedError::Io(err) => err.kind() == std::io::ErrorKind::InvalidData,
        }
    }
}

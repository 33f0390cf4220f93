//! Order feed: one `type,side,quantity,price` record per line.
//!
//! ## Record Format
//!
//! ```text
//! <M|L>,<B|S>,quantity,price
//! ```
//!
//! - `M` = Market, `L` = Limit, `B` = Buy, `S` = Sell
//! - quantity and price are unsigned integers
//! - a market record's price is ignored and may be omitted
//! - blank lines are skipped, whitespace around fields is trimmed
//!
//! A malformed line yields an error for that line only; iteration carries on
//! with the next one.
//!
//! ## Example
//!
//! ```
//! use auction_core::feed::OrderReader;
//! use auction_core::types::{Order, Side};
//!
//! let input = "L,B,10,100\nM,S,4,0\n";
//! let orders: Vec<Order> = OrderReader::new(input.as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(orders, vec![Order::limit(Side::Buy, 10, 100), Order::market(Side::Sell, 4)]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{FeedError, RecordError};
use crate::types::{Order, OrderType, Side};

/// Lazy reader of order records.
#[derive(Debug)]
pub struct OrderReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl OrderReader<BufReader<File>> {
    /// Open a trades file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> OrderReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Number of the last line read (1-based)
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for OrderReader<R> {
    type Item = Result<Order, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let read = self.lines.next()?;
            self.line += 1;

            let text = match read {
                Ok(text) => text,
                Err(err) => return Some(Err(FeedError::Io(err))),
            };

            if text.trim().is_empty() {
                continue;
            }

            let line = self.line;
            return Some(parse_record(&text).map_err(|source| FeedError::Malformed { line, source }));
        }
    }
}

/// Parse a single record
pub fn parse_record(record: &str) -> Result<Order, RecordError> {
    let mut fields = record.split(',').map(str::trim);

    let order_type = match fields.next().filter(|f| !f.is_empty()) {
        Some("M") => OrderType::Market,
        Some("L") => OrderType::Limit,
        Some(other) => return Err(RecordError::UnknownType(other.to_string())),
        None => return Err(RecordError::MissingField("type")),
    };

    let side = match fields.next().filter(|f| !f.is_empty()) {
        Some("B") => Side::Buy,
        Some("S") => Side::Sell,
        Some(other) => return Err(RecordError::UnknownSide(other.to_string())),
        None => return Err(RecordError::MissingField("side")),
    };

    let quantity = number("quantity", fields.next())?;

    let order = match order_type {
        OrderType::Limit => Order::limit(side, quantity, number("price", fields.next())?),
        OrderType::Market => {
            if let Some(price) = fields.next().filter(|f| !f.is_empty()) {
                number("price", Some(price))?;
            }
            Order::market(side, quantity)
        }
    };

    match fields.next() {
        Some(extra) => Err(RecordError::TrailingField(extra.to_string())),
        None => Ok(order),
    }
}

fn number(field: &'static str, raw: Option<&str>) -> Result<u64, RecordError> {
    let raw = raw
        .filter(|r| !r.is_empty())
        .ok_or(RecordError::MissingField(field))?;
    raw.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_record() {
        assert_eq!(parse_record("L,B,10,100"), Ok(Order::limit(Side::Buy, 10, 100)));
        assert_eq!(parse_record(" L , S , 3 , 99 "), Ok(Order::limit(Side::Sell, 3, 99)));
    }

    #[test]
    fn test_parse_market_record() {
        assert_eq!(parse_record("M,S,10,0"), Ok(Order::market(Side::Sell, 10)));
        assert_eq!(parse_record("M,B,7"), Ok(Order::market(Side::Buy, 7)));
        // The price column is ignored but still has to be a number
        assert_eq!(parse_record("M,B,7,123"), Ok(Order::market(Side::Buy, 7)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_record("X,B,1,1"), Err(RecordError::UnknownType("X".into())));
        assert_eq!(parse_record("L,Q,1,1"), Err(RecordError::UnknownSide("Q".into())));
        assert_eq!(parse_record("L"), Err(RecordError::MissingField("side")));
        assert_eq!(parse_record("L,B,5"), Err(RecordError::MissingField("price")));
        assert_eq!(
            parse_record("L,B,-5,100"),
            Err(RecordError::InvalidNumber { field: "quantity", value: "-5".into() })
        );
        assert_eq!(
            parse_record("M,B,5,abc"),
            Err(RecordError::InvalidNumber { field: "price", value: "abc".into() })
        );
        assert_eq!(parse_record("L,B,5,100,9"), Err(RecordError::TrailingField("9".into())));
    }

    #[test]
    fn test_reader_skips_blank_lines_and_counts_lines() {
        let input = "L,B,10,100\n\n   \nL,S,4,100\r\n";
        let mut reader = OrderReader::new(input.as_bytes());

        assert_eq!(reader.next().unwrap().unwrap(), Order::limit(Side::Buy, 10, 100));
        assert_eq!(reader.line(), 1);
        assert_eq!(reader.next().unwrap().unwrap(), Order::limit(Side::Sell, 4, 100));
        assert_eq!(reader.line(), 4);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reader_continues_after_malformed_line() {
        let input = "L,B,10,100\nnot an order\nM,S,4,0\n";
        let results: Vec<_> = OrderReader::new(input.as_bytes()).collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(FeedError::Malformed { line, source }) => {
                assert_eq!(*line, 2);
                assert_eq!(*source, RecordError::UnknownType("not an order".into()));
            }
            other => panic!("expected a malformed record, got {other:?}"),
        }
        assert_eq!(results[2].as_ref().unwrap(), &Order::market(Side::Sell, 4));
    }

    #[test]
    fn test_unreadable_line_is_counted_and_skippable() {
        let input: &[u8] = b"L,B,1,1\n\xff\xfe\nbogus\nL,S,1,1\n";
        let mut reader = OrderReader::new(input);

        assert_eq!(reader.next().unwrap().unwrap(), Order::limit(Side::Buy, 1, 1));

        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(reader.line(), 2);
        assert!(err.is_recoverable());
        assert!(matches!(err, FeedError::Io(ref io) if io.kind() == std::io::ErrorKind::InvalidData));

        match reader.next().unwrap() {
            Err(FeedError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a malformed record, got {other:?}"),
        }

        assert_eq!(reader.next().unwrap().unwrap(), Order::limit(Side::Sell, 1, 1));
        assert_eq!(reader.line(), 4);
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let err = OrderReader::open("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
        assert!(!err.is_recoverable());
    }
}

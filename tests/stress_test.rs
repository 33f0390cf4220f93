//! Stress tests for the matching engine.
//!
//! These tests verify:
//! 1. The book invariants survive long random order streams
//! 2. Determinism is preserved across runs (identical state roots)
//! 3. Insert, removal by handle and fills agree with a simple FIFO model
//!
//! ## Running Stress Tests
//!
//! ```bash
//! # Release mode recommended
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use auction_core::{BookSide, MatchingEngine, Order, OrderHandle, Side};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Orders for the main stress run
const STRESS_ORDER_COUNT: usize = 200_000;

/// Centre of the random price band
const BASE_PRICE: u64 = 10_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate deterministic orders for stress testing.
///
/// Uses a seeded RNG for reproducibility. Same seed = same orders.
/// Roughly one order in ten is a market order.
fn generate_deterministic_orders(count: usize, seed: u64, band: i64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for _ in 0..count {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let quantity: u64 = rng.gen_range(1..=100);

        let order = if rng.gen_bool(0.1) {
            Order::market(side, quantity)
        } else {
            let offset: i64 = rng.gen_range(-band..=band);
            Order::limit(side, quantity, (BASE_PRICE as i64 + offset) as u64)
        };
        orders.push(order);
    }

    orders
}

/// Run a deterministic order sequence and return the final state root.
fn run_deterministic_sequence(seed: u64, count: usize) -> [u8; 32] {
    let mut engine = MatchingEngine::new();

    for order in generate_deterministic_orders(count, seed, 100) {
        engine.submit(order).expect("discard policy never rejects");
    }

    engine.snapshot().state_root().expect("state root")
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Process a long random stream and check the book at checkpoints.
#[test]
fn stress_random_flow_keeps_invariants() {
    println!("\n=== STRESS TEST: {} Orders ===\n", STRESS_ORDER_COUNT);

    let orders = generate_deterministic_orders(STRESS_ORDER_COUNT, 42, 100);
    let mut engine = MatchingEngine::new();

    let start = Instant::now();
    let mut fill_count = 0usize;
    let mut submitted_quantity = 0u64;
    let mut matched_quantity = 0u64;

    for (i, order) in orders.into_iter().enumerate() {
        submitted_quantity += order.quantity;
        let outcome = engine.submit(order).expect("discard policy never rejects");
        fill_count += outcome.fills.len();
        matched_quantity += outcome.filled_quantity();

        if i % 10_000 == 0 {
            engine.bids().assert_invariants();
            engine.asks().assert_invariants();
        }
    }

    let elapsed = start.elapsed();
    let throughput = STRESS_ORDER_COUNT as f64 / elapsed.as_secs_f64();

    println!("  Fills generated:   {:>12}", fill_count);
    println!("  Bid orders:        {:>12}", engine.bids().order_count());
    println!("  Ask orders:        {:>12}", engine.asks().order_count());
    println!("  Elapsed time:      {:>12.2?}", elapsed);
    println!("  Throughput:        {:>12.0} orders/sec", throughput);

    engine.bids().assert_invariants();
    engine.asks().assert_invariants();

    assert!(fill_count > 0, "Expected some fills to occur");
    // Each unit matched consumes a unit on both sides
    assert!(matched_quantity * 2 <= submitted_quantity);

    if let (Some(bid), Some(ask)) = (engine.bids().best_price(), engine.asks().best_price()) {
        assert!(bid < ask, "book left crossed: bid {bid} ask {ask}");
    }
}

/// Verify determinism: Same sequence produces identical state root.
#[test]
fn verify_determinism() {
    const TEST_COUNT: usize = 10_000;
    const SEED: u64 = 12345;

    let root1 = run_deterministic_sequence(SEED, TEST_COUNT);
    let root2 = run_deterministic_sequence(SEED, TEST_COUNT);

    println!("  Run 1 state root: {}", hex::encode(root1));
    println!("  Run 2 state root: {}", hex::encode(root2));

    assert_eq!(root1, root2, "State roots must match for determinism");

    let root3 = run_deterministic_sequence(SEED + 1, TEST_COUNT);
    assert_ne!(root1, root3, "Different seeds should produce different roots");
}

/// Drive one book side with random inserts, removals and fills, checking it
/// against a plain per-price FIFO model.
#[test]
fn stress_book_side_against_model() {
    const OPERATIONS: usize = 20_000;

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut book = BookSide::new(Side::Sell);
    let mut model: BTreeMap<u64, VecDeque<(OrderHandle, u64)>> = BTreeMap::new();
    let mut handles: Vec<OrderHandle> = Vec::new();

    let mut removed = 0usize;
    let mut already_gone = 0usize;

    for _ in 0..OPERATIONS {
        match rng.gen_range(0..10) {
            // Insert
            0..=4 => {
                let price = BASE_PRICE + rng.gen_range(0..50);
                let quantity = rng.gen_range(1..=100);
                let handle = book.insert(Order::limit(Side::Sell, quantity, price)).unwrap();
                model.entry(price).or_default().push_back((handle, quantity));
                handles.push(handle);
            }
            // Remove a previously seen handle, possibly already filled
            5..=6 if !handles.is_empty() => {
                let handle = handles.swap_remove(rng.gen_range(0..handles.len()));
                let in_model = model.iter().find_map(|(&price, queue)| {
                    queue.iter().position(|(h, _)| *h == handle).map(|pos| (price, pos))
                });

                match in_model {
                    Some((price, pos)) => {
                        assert!(book.remove(handle));
                        let queue = model.get_mut(&price).unwrap();
                        queue.remove(pos);
                        if queue.is_empty() {
                            model.remove(&price);
                        }
                        removed += 1;
                    }
                    None => {
                        assert!(!book.remove(handle));
                        already_gone += 1;
                    }
                }
            }
            // Fill against the best order
            _ => {
                let quantity = rng.gen_range(1..=60);
                let fill = book.fill_best(quantity);

                let Some(mut entry) = model.first_entry() else {
                    assert!(fill.is_none());
                    continue;
                };
                let price = *entry.key();
                let queue = entry.get_mut();
                let (handle, open) = queue.front_mut().unwrap();
                let executed = quantity.min(*open);

                let fill = fill.expect("model has a best order");
                assert_eq!((fill.price, fill.quantity, fill.resting), (price, executed, *handle));

                *open -= executed;
                if *open == 0 {
                    queue.pop_front();
                    if queue.is_empty() {
                        entry.remove();
                    }
                }
            }
        }
    }

    book.assert_invariants();

    let expected: Vec<(u64, u64)> = model
        .iter()
        .flat_map(|(&price, queue)| queue.iter().map(move |&(_, qty)| (price, qty)))
        .collect();
    let actual: Vec<(u64, u64)> = book.resting_orders().map(|o| (o.price, o.quantity)).collect();
    assert_eq!(actual, expected);

    println!("  Removed live:      {:>12}", removed);
    println!("  Already filled:    {:>12}", already_gone);
    assert!(removed > 0);
    assert!(already_gone > 0);
}

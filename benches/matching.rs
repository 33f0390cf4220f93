//! Benchmarks for the matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- single_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use auction_core::{BookSide, MatchingEngine, Order, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

const BASE_PRICE: u64 = 10_000;

/// Engine with `count` resting asks, one per price level from `base_price` up.
fn engine_with_asks(count: usize, base_price: u64, quantity: u64) -> MatchingEngine {
    let mut engine = MatchingEngine::new();
    for i in 0..count {
        let order = Order::limit(Side::Sell, quantity, base_price + i as u64);
        engine.submit(order).expect("resting order");
    }
    engine
}

/// Generate a vector of deterministic orders for throughput testing.
fn generate_order_batch(count: usize, seed: u64) -> Vec<Order> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut orders = Vec::with_capacity(count);

    for _ in 0..count {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let quantity: u64 = rng.gen_range(1..=100);
        let order = if rng.gen_bool(0.1) {
            Order::market(side, quantity)
        } else {
            let offset: i64 = rng.gen_range(-50i64..=50);
            Order::limit(side, quantity, (BASE_PRICE as i64 + offset) as u64)
        };
        orders.push(order);
    }

    orders
}

// ============================================================================
// BENCHMARK: Single Match Latency
// ============================================================================

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");
    group.measurement_time(Duration::from_secs(10));

    // Match a buy against the best ask of a 1,000-level book
    group.bench_function("against_1k_levels", |b| {
        b.iter_batched(
            || engine_with_asks(1_000, BASE_PRICE, 10),
            |mut engine| black_box(engine.submit(Order::limit(Side::Buy, 10, BASE_PRICE))),
            BatchSize::SmallInput,
        );
    });

    // A buy large enough to sweep ten levels
    group.bench_function("multi_level_sweep", |b| {
        b.iter_batched(
            || engine_with_asks(100, BASE_PRICE, 10),
            |mut engine| black_box(engine.submit(Order::limit(Side::Buy, 100, BASE_PRICE + 10))),
            BatchSize::SmallInput,
        );
    });

    // No cross: the buy rests
    group.bench_function("no_match_rest_on_book", |b| {
        b.iter_batched(
            || engine_with_asks(1_000, BASE_PRICE, 10),
            |mut engine| black_box(engine.submit(Order::limit(Side::Buy, 10, BASE_PRICE - 1))),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Book Operations
// ============================================================================

fn bench_book_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_operations");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("insert_into_1k_book", |b| {
        b.iter_batched(
            || {
                let mut bids = BookSide::with_capacity(Side::Buy, 2_000);
                for i in 0..1_000u64 {
                    bids.insert(Order::limit(Side::Buy, 10, BASE_PRICE - i)).expect("insert");
                }
                bids
            },
            |mut bids| black_box(bids.insert(Order::limit(Side::Buy, 10, BASE_PRICE - 500))),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("remove_from_1k_book", |b| {
        b.iter_batched(
            || {
                let mut bids = BookSide::with_capacity(Side::Buy, 2_000);
                let mut middle = None;
                for i in 0..1_000u64 {
                    let handle = bids.insert(Order::limit(Side::Buy, 10, BASE_PRICE - i)).expect("insert");
                    if i == 500 {
                        middle = Some(handle);
                    }
                }
                (bids, middle.expect("middle handle"))
            },
            |(mut bids, handle)| black_box(bids.remove(handle)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(BenchmarkId::new("orders", batch_size), &batch_size, |b, &size| {
            let orders = generate_order_batch(size, 42);

            b.iter_batched(
                || orders.clone(),
                |orders| {
                    let mut engine = MatchingEngine::new();
                    for order in orders {
                        let _ = black_box(engine.submit(order));
                    }
                    engine.bids().order_count() + engine.asks().order_count()
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_single_match, bench_book_operations, bench_throughput);

criterion_main!(benches);

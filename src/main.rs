//! auction-core - replay a trades file through the matching engine
//!
//! Prints each submission as it is handled, then the end-of-day book and
//! the session receipt. Set `RUST_LOG=debug` to also see per-fill events.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use auction_core::engine::{EngineConfig, MarketResiduePolicy, MatchingEngine};
use auction_core::error::EngineError;
use auction_core::feed::OrderReader;
use auction_core::report::render_submission;
use auction_core::types::SessionReceipt;

#[derive(Parser)]
#[command(name = "auction-core")]
#[command(about = "Replay an order file through a continuous double-auction matching engine")]
#[command(after_help = "File format, one order per line:\n\n\t<M|L>,<B|S>,quantity,price\n\n\
    where M = Market, L = Limit, B = Buy, S = Sell; quantity and price are unsigned integers")]
struct Cli {
    /// Orders file (CSV)
    trades_file: PathBuf,

    /// Reject market orders the opposite side cannot fill completely
    #[arg(long)]
    reject_unfilled_market: bool,

    /// Resting-order slots to pre-allocate per side
    #[arg(long, default_value_t = 1_024)]
    capacity: usize,

    /// Only print the end-of-day book and receipt
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(file = %cli.trades_file.display(), "{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let policy = if cli.reject_unfilled_market {
        MarketResiduePolicy::Reject
    } else {
        MarketResiduePolicy::Discard
    };
    let config = EngineConfig::default()
        .market_residue(policy)
        .order_capacity(cli.capacity);

    let mut engine = MatchingEngine::with_config(config);
    let mut receipt = SessionReceipt::default();

    info!(file = %cli.trades_file.display(), ?policy, "replaying orders");

    let mut reader = OrderReader::open(&cli.trades_file)?;
    while let Some(record) = reader.next() {
        let order = match record {
            Ok(order) => order,
            Err(err) if err.is_recoverable() => {
                warn!(line = reader.line(), "skipping record: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match engine.submit(order.clone()) {
            Ok(outcome) => {
                if !cli.quiet {
                    print!("{}", render_submission(&order, &outcome));
                    println!("-----------------------");
                }
                receipt.record(&outcome);
            }
            Err(err @ EngineError::InsufficientLiquidity { .. }) => {
                if !cli.quiet {
                    println!("Handling order: {order}\n  rejected: {err}");
                    println!("-----------------------");
                }
                receipt.record_rejection();
            }
            Err(err) => return Err(err.into()),
        }
    }

    let snapshot = engine.snapshot();
    receipt.seal(snapshot.state_root()?);

    println!();
    println!("EOD Book");
    println!("{snapshot}");
    println!();
    println!("{receipt}");

    Ok(())
}

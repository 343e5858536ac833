//! Coinmate Public API Example
//!
//! Loads markets and prints a ticker and the top of the order book.
//! Run with `RUST_LOG=ccxt_coinmate=debug` to see every request.
//! Setting COINMATE_API_KEY, COINMATE_SECRET and COINMATE_UID also prints balances.

use ccxt_coinmate::client::ExchangeConfig;
use ccxt_coinmate::types::Exchange;
use ccxt_coinmate::{CcxtResult, Coinmate};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> CcxtResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Coinmate Public API Example ===\n");

    let mut config = ExchangeConfig::new().with_timeout(10_000);
    if let (Ok(key), Ok(secret), Ok(uid)) = (
        std::env::var("COINMATE_API_KEY"),
        std::env::var("COINMATE_SECRET"),
        std::env::var("COINMATE_UID"),
    ) {
        config = config.with_credentials(key, secret).with_uid(uid);
    }
    let has_credentials = config.has_credentials();
    let exchange = Coinmate::new(config)?;

    let registry = exchange.load_markets(false).await?;
    println!("{} markets: {}", registry.len(), registry.symbols().join(", "));

    let symbol = "BTC/EUR";
    let ticker = exchange.fetch_ticker(symbol).await?;
    println!(
        "\n{} last={:?} bid={:?} ask={:?} at {}",
        symbol,
        ticker.last,
        ticker.bid,
        ticker.ask,
        ticker.datetime.as_deref().unwrap_or("-")
    );

    let book = exchange.fetch_order_book(symbol, Some(5)).await?;
    println!("\nTop of book (spread {:?}):", book.spread());
    for (bid, ask) in book.bids.iter().zip(book.asks.iter()) {
        println!("  {:>12} x {:<12} | {:>12} x {:<12}", bid.price, bid.amount, ask.price, ask.amount);
    }

    let trades = exchange.fetch_trades(symbol, None, Some(5)).await?;
    println!("\n{} trades in the last 10 minutes (showing up to 5)", trades.len());

    if has_credentials {
        let balances = exchange.fetch_balance().await?;
        for code in balances.non_zero_currencies() {
            println!("  {code}: {:?}", balances.total(code));
        }
    }

    Ok(())
}

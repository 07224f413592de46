//! Walks the public Bonfida market-data endpoints and logs what comes back.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example markets --features tracing
//! ```

use bonfida_client_sdk::Client;
use bonfida_client_sdk::types::{HistoricalPricesRequest, PoolTradesRequest};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const MARKET: &str = "SOLUSDC";
const DAY: i64 = 24 * 60 * 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::default();

    match client.pairs().await {
        Ok(pairs) => info!(
            endpoint = "pairs",
            count = pairs.as_array().map_or(0, Vec::len)
        ),
        Err(e) => error!(endpoint = "pairs", error = %e),
    }

    match client.orderbook(MARKET).await {
        Ok(book) => info!(endpoint = "orderbooks", market = MARKET, book = %book),
        Err(e) => error!(endpoint = "orderbooks", market = MARKET, error = %e),
    }

    let end_time: i64 = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs()
        .try_into()?;
    let candles = HistoricalPricesRequest::builder()
        .market(MARKET)
        .resolution(3600)
        .start_time(end_time - DAY)
        .end_time(end_time)
        .limit(24)
        .build();
    match client.historical_prices(&candles).await {
        Ok(candles) => info!(
            endpoint = "candles",
            market = MARKET,
            count = candles.as_array().map_or(0, Vec::len)
        ),
        Err(e) => error!(endpoint = "candles", market = MARKET, error = %e),
    }

    let swaps = PoolTradesRequest::builder()
        .symbol_source("SOL")
        .symbol_destination("USDC")
        .both_directions(true)
        .build();
    match client.pool_trades(&swaps).await {
        Ok(trades) => info!(endpoint = "pools/trades", trades = %trades),
        Err(e) => error!(endpoint = "pools/trades", error = %e),
    }

    Ok(())
}

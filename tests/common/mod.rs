#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Each test binary only uses the endpoints of its own API half"
)]

use bonfida_client_sdk::error::{Kind, Remote, Status};
use bonfida_client_sdk::types::{
    HistoricalPricesRequest, PoolRequest, PoolTradesRequest, SwapHistoryRequest, Value,
};
use bonfida_client_sdk::{Client, Result};
use httpmock::{Method::GET, MockServer};
use reqwest::StatusCode;
use serde_json::json;

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// One call per client method, with the path the mock server sees for it.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint {
    Pairs,
    RecentTrades,
    AllRecentTrades,
    Volume,
    Orderbook,
    HistoricalPrices,
    AllPools,
    Pool,
    PoolTrades,
    SwapVolume,
    SwapHistoricalVolume,
    SwapHistoricalLiquidity,
}

pub const DEX: [Endpoint; 6] = [
    Endpoint::Pairs,
    Endpoint::RecentTrades,
    Endpoint::AllRecentTrades,
    Endpoint::Volume,
    Endpoint::Orderbook,
    Endpoint::HistoricalPrices,
];

pub const SWAP: [Endpoint; 6] = [
    Endpoint::AllPools,
    Endpoint::Pool,
    Endpoint::PoolTrades,
    Endpoint::SwapVolume,
    Endpoint::SwapHistoricalVolume,
    Endpoint::SwapHistoricalLiquidity,
];

impl Endpoint {
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Endpoint::Pairs => "/pairs".to_owned(),
            Endpoint::RecentTrades => "/trades/BTCUSDC".to_owned(),
            Endpoint::AllRecentTrades => "/trades/all/recent".to_owned(),
            Endpoint::Volume => "/volumes/BTCUSDC".to_owned(),
            Endpoint::Orderbook => "/orderbooks/BTCUSDC".to_owned(),
            Endpoint::HistoricalPrices => "/candles/BTCUSDC".to_owned(),
            Endpoint::AllPools => "/pools".to_owned(),
            Endpoint::Pool => format!("/pools/{SOL_MINT}/{USDC_MINT}"),
            Endpoint::PoolTrades => "/pools/trades".to_owned(),
            Endpoint::SwapVolume => "/pools/volumes/recent".to_owned(),
            Endpoint::SwapHistoricalVolume => "/pools/volumes".to_owned(),
            Endpoint::SwapHistoricalLiquidity => "/pools/liquidity".to_owned(),
        }
    }

    pub async fn call(self, client: &Client) -> Result<Value> {
        let history = SwapHistoryRequest::builder()
            .mint_a(SOL_MINT)
            .mint_b(USDC_MINT)
            .start_time(0)
            .end_time(100)
            .limit(10)
            .build();

        match self {
            Endpoint::Pairs => client.pairs().await,
            Endpoint::RecentTrades => client.recent_trades("BTCUSDC").await,
            Endpoint::AllRecentTrades => client.all_recent_trades().await,
            Endpoint::Volume => client.volume("BTCUSDC").await,
            Endpoint::Orderbook => client.orderbook("BTCUSDC").await,
            Endpoint::HistoricalPrices => {
                let request = HistoricalPricesRequest::builder()
                    .market("BTCUSDC")
                    .resolution(60)
                    .start_time(0)
                    .end_time(100)
                    .limit(10)
                    .build();
                client.historical_prices(&request).await
            }
            Endpoint::AllPools => client.all_pools().await,
            Endpoint::Pool => {
                let request = PoolRequest::builder()
                    .mint_a(SOL_MINT)
                    .mint_b(USDC_MINT)
                    .start_time(0)
                    .end_time(100)
                    .limit(10)
                    .build();
                client.pool(&request).await
            }
            Endpoint::PoolTrades => {
                let request = PoolTradesRequest::builder()
                    .symbol_source("SOL")
                    .symbol_destination("USDC")
                    .both_directions(true)
                    .build();
                client.pool_trades(&request).await
            }
            Endpoint::SwapVolume => client.swap_volume().await,
            Endpoint::SwapHistoricalVolume => client.swap_historical_volume(&history).await,
            Endpoint::SwapHistoricalLiquidity => {
                client.swap_historical_liquidity(&history).await
            }
        }
    }
}

/// Serves `body` with `status` on the endpoint's path and calls it.
pub async fn respond(
    endpoint: Endpoint,
    status: StatusCode,
    body: &str,
) -> anyhow::Result<Result<Value>> {
    let server = MockServer::start();
    let client = Client::new(&server.base_url())?;

    let mock = server.mock(|when, then| {
        when.method(GET).path(endpoint.path());
        then.status(status).body(body);
    });

    let result = endpoint.call(&client).await;
    mock.assert();

    Ok(result)
}

pub async fn assert_success_returns_data(endpoint: Endpoint) -> anyhow::Result<()> {
    let data = json!([{"endpoint": endpoint.path(), "price": 1.5, "size": 2}]);
    let body = json!({"success": true, "data": data.clone()}).to_string();

    let response = respond(endpoint, StatusCode::OK, &body).await??;

    assert_eq!(response, data, "{endpoint:?}");
    Ok(())
}

pub async fn assert_failure_is_remote(endpoint: Endpoint) -> anyhow::Result<()> {
    let body = json!({"success": false, "error": "msg"}).to_string();

    let err = respond(endpoint, StatusCode::OK, &body).await?.unwrap_err();

    assert_eq!(err.kind(), Kind::Remote, "{endpoint:?}");
    assert_eq!(
        err.downcast_ref::<Remote>().unwrap().message,
        "msg",
        "{endpoint:?}"
    );
    Ok(())
}

pub async fn assert_server_error_is_status(endpoint: Endpoint) -> anyhow::Result<()> {
    let err = respond(
        endpoint,
        StatusCode::INTERNAL_SERVER_ERROR,
        "<html>Internal Server Error</html>",
    )
    .await?
    .unwrap_err();

    assert_eq!(err.kind(), Kind::Status, "{endpoint:?}");
    let status = err.downcast_ref::<Status>().unwrap();
    assert_eq!(
        status.status_code,
        StatusCode::INTERNAL_SERVER_ERROR,
        "{endpoint:?}"
    );
    assert_eq!(status.path, endpoint.path(), "{endpoint:?}");
    Ok(())
}

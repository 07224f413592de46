//! Request types for the parameterised endpoints.
//!
//! Every type uses the [`bon`](https://docs.rs/bon) builder pattern. Query parameters
//! are serialized in field declaration order, so the field order below is the order the
//! service sees on the wire. Fields marked `#[serde(skip)]` are path segments.

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;

use crate::ToQueryParams as _;

/// Request parameters for the `candles/{market}` endpoint.
///
/// # Example
///
/// ```
/// use bonfida_client_sdk::types::HistoricalPricesRequest;
///
/// let request = HistoricalPricesRequest::builder()
///     .market("BTCUSDC")
///     .resolution(60)
///     .start_time(0)
///     .end_time(100)
///     .limit(10)
///     .build();
///
/// assert_eq!(
///     request.path(),
///     "candles/BTCUSDC?resolution=60&startTime=0&endTime=100&limit=10"
/// );
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPricesRequest {
    /// Market symbol, e.g. `BTCUSDC`.
    #[serde(skip)]
    pub market: String,
    /// Candle width in seconds.
    pub resolution: u32,
    /// Window start, seconds since the Unix epoch.
    pub start_time: i64,
    /// Window end, seconds since the Unix epoch.
    pub end_time: i64,
    /// Maximum number of candles.
    pub limit: u32,
}

impl HistoricalPricesRequest {
    /// Path and query string relative to the API host.
    #[must_use]
    pub fn path(&self) -> String {
        format!("candles/{}{}", self.market, self.query_params())
    }
}

/// Request parameters for the `pools/{mintA}/{mintB}` endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct PoolRequest {
    /// Mint address of the first pool leg.
    #[serde(skip)]
    pub mint_a: String,
    /// Mint address of the second pool leg.
    #[serde(skip)]
    pub mint_b: String,
    /// Window start, seconds since the Unix epoch.
    pub start_time: i64,
    /// Window end, seconds since the Unix epoch.
    pub end_time: i64,
    /// Maximum number of entries.
    pub limit: u32,
}

impl PoolRequest {
    /// Path and query string relative to the API host.
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "pools/{}/{}{}",
            self.mint_a,
            self.mint_b,
            self.query_params()
        )
    }
}

/// Request parameters for the `pools/trades` endpoint.
///
/// # Example
///
/// ```
/// use bonfida_client_sdk::types::PoolTradesRequest;
///
/// let request = PoolTradesRequest::builder()
///     .symbol_source("A")
///     .symbol_destination("B")
///     .both_directions(true)
///     .build();
///
/// assert_eq!(
///     request.path(),
///     "pools/trades?symbolSource=A&symbolDestination=B&bothDirections=true"
/// );
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct PoolTradesRequest {
    /// Symbol of the token swapped from.
    pub symbol_source: String,
    /// Symbol of the token swapped to.
    pub symbol_destination: String,
    /// Include swaps going the other way as well.
    pub both_directions: bool,
}

impl PoolTradesRequest {
    /// Path and query string relative to the API host.
    #[must_use]
    pub fn path(&self) -> String {
        format!("pools/trades{}", self.query_params())
    }
}

/// Request parameters shared by the `pools/volumes` and `pools/liquidity` endpoints.
///
/// Query parameters are sent in the order `mintA, mintB, endTime, startTime, limit`.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct SwapHistoryRequest {
    /// Mint address of the first pool leg.
    pub mint_a: String,
    /// Mint address of the second pool leg.
    pub mint_b: String,
    /// Window end, seconds since the Unix epoch.
    pub end_time: i64,
    /// Window start, seconds since the Unix epoch.
    pub start_time: i64,
    /// Maximum number of entries.
    pub limit: u32,
}

impl SwapHistoryRequest {
    /// Path and query string for the historical volume endpoint.
    #[must_use]
    pub fn volume_path(&self) -> String {
        format!("pools/volumes{}", self.query_params())
    }

    /// Path and query string for the historical liquidity endpoint.
    #[must_use]
    pub fn liquidity_path(&self) -> String {
        format!("pools/liquidity{}", self.query_params())
    }
}

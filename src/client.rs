//! Client for the Bonfida Serum market-data API.
//!
//! The API has two halves: Serum DEX market data (pairs, trades, volumes, order
//! books, candles) and Serum Swap pool statistics. Both are served from the same
//! host and answer with the same `{success, data, error}` envelope.
//!
//! # Example
//!
//! ```no_run
//! use bonfida_client_sdk::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let pairs = client.pairs().await?;
//! let orderbook = client.orderbook("BTCUSDC").await?;
//! println!("{pairs}\n{orderbook}");
//! # Ok(())
//! # }
//! ```

use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use serde_json::Value;
use url::Url;

use crate::types::request::{
    HistoricalPricesRequest, PoolRequest, PoolTradesRequest, SwapHistoryRequest,
};
use crate::{DEFAULT_HOST, Result};

/// HTTP client for the Bonfida market-data API.
///
/// Every method returns the envelope's `data` payload untouched. Cloning is cheap
/// and clones share one connection pool.
///
/// When the service answers `success: false` the error has kind
/// [`Kind::Remote`](crate::error::Kind::Remote); downcast it to
/// [`Remote`](crate::error::Remote) to get the exact service message.
///
/// # Example
///
/// ```no_run
/// use bonfida_client_sdk::Client;
///
/// // Create client with default endpoint
/// let client = Client::default();
///
/// // Or with a custom endpoint
/// let client = Client::new("https://custom-api.example.com").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST).expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client bound to a custom host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client fails to build.
    pub fn new(host: &str) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_static("bonfida_client_sdk"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: Url::parse(host)?,
            client,
        })
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let request = self
            .client
            .request(Method::GET, format!("{}{path}", self.host))
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Lists the symbols of all Serum markets.
    pub async fn pairs(&self) -> Result<Value> {
        self.get("pairs").await
    }

    /// Recent trades on one market, e.g. `BTCUSDC`.
    pub async fn recent_trades(&self, market: &str) -> Result<Value> {
        self.get(&format!("trades/{market}")).await
    }

    /// Recent trades across every market.
    pub async fn all_recent_trades(&self) -> Result<Value> {
        self.get("trades/all/recent").await
    }

    /// Traded volume on one market.
    pub async fn volume(&self, market: &str) -> Result<Value> {
        self.get(&format!("volumes/{market}")).await
    }

    /// Current order book of one market.
    pub async fn orderbook(&self, market: &str) -> Result<Value> {
        self.get(&format!("orderbooks/{market}")).await
    }

    /// Historical candles for a market.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bonfida_client_sdk::Client;
    /// use bonfida_client_sdk::types::HistoricalPricesRequest;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = HistoricalPricesRequest::builder()
    ///     .market("SOLUSDC")
    ///     .resolution(3600)
    ///     .start_time(1_620_000_000)
    ///     .end_time(1_620_086_400)
    ///     .limit(24)
    ///     .build();
    ///
    /// let candles = client.historical_prices(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn historical_prices(&self, request: &HistoricalPricesRequest) -> Result<Value> {
        self.get(&request.path()).await
    }

    /// Lists every Serum Swap liquidity pool.
    pub async fn all_pools(&self) -> Result<Value> {
        self.get("pools").await
    }

    /// History of the pool between two mints.
    pub async fn pool(&self, request: &PoolRequest) -> Result<Value> {
        self.get(&request.path()).await
    }

    /// Swaps between two token symbols, optionally in both directions.
    pub async fn pool_trades(&self, request: &PoolTradesRequest) -> Result<Value> {
        self.get(&request.path()).await
    }

    /// Recent swap volume across all pools.
    pub async fn swap_volume(&self) -> Result<Value> {
        self.get("pools/volumes/recent").await
    }

    /// Historical swap volume of the pool between two mints.
    pub async fn swap_historical_volume(&self, request: &SwapHistoryRequest) -> Result<Value> {
        self.get(&request.volume_path()).await
    }

    /// Historical liquidity of the pool between two mints.
    pub async fn swap_historical_liquidity(
        &self,
        request: &SwapHistoryRequest,
    ) -> Result<Value> {
        self.get(&request.liquidity_path()).await
    }
}

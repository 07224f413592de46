//! Request and response types for the Bonfida market-data API.
//!
//! Request types only exist for endpoints that take query parameters; endpoints keyed
//! by a single market symbol take a `&str` directly on [`Client`](crate::Client).

pub mod request;
pub mod response;

pub use request::{HistoricalPricesRequest, PoolRequest, PoolTradesRequest, SwapHistoryRequest};
pub use response::Envelope;
/// Untyped JSON payload returned by every endpoint.
pub use serde_json::Value;

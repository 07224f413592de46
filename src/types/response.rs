use serde::Deserialize;
use serde_json::Value;

use crate::Result;
use crate::error::Error;

/// The `{success, data, error}` wrapper every endpoint responds with.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Envelope {
    pub success: bool,
    /// Endpoint-specific payload. Its shape is not validated.
    #[serde(default)]
    pub data: Option<Value>,
    /// Service-supplied failure message, present when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Unwraps the payload, or turns `success: false` into a [`Remote`](crate::error::Remote)
    /// error carrying the service message.
    ///
    /// A successful envelope without `data` yields [`Value::Null`].
    pub fn into_data(self) -> Result<Value> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            Err(Error::remote(self.error.unwrap_or_default()))
        }
    }
}

#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod error;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::Request;
use serde::Serialize;
use serde_json::Value;

pub use crate::client::Client;
use crate::error::Error;
use crate::types::response::Envelope;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the public Bonfida Serum API.
pub const DEFAULT_HOST: &str = "https://serum-api.bonfida.com/";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields, in declaration order,
/// into a query string. Booleans become `true`/`false`.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Sends `request` and unwraps the response envelope.
///
/// The body is decoded before the status is looked at: an envelope with
/// `success: false` is a [`Remote`](error::Remote) error whatever the status. Only
/// when the body is not an envelope does a non-2xx status become a
/// [`Status`](error::Status) error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<Value> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let body = response.text().await?;
    let envelope = serde_json::from_str::<Value>(&body)
        .map_err(Error::from)
        .and_then(serde_helpers::deserialize_with_warnings::<Envelope>);

    match envelope {
        Ok(envelope) => {
            #[cfg(feature = "tracing")]
            {
                if !envelope.success {
                    tracing::warn!(
                        method = %method,
                        path = %path,
                        message = envelope.error.as_deref().unwrap_or_default(),
                        "API reported failure"
                    );
                }
            }

            envelope.into_data()
        }
        Err(_) if !status_code.is_success() => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status_code,
                method = %method,
                path = %path,
                message = %body,
                "API request failed"
            );

            Err(Error::status(status_code, method, path, body))
        }
        Err(e) => Err(e),
    }
}

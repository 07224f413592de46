//! Envelope decoding helpers.
//!
//! With the `tracing` feature enabled, decoding reports fields the envelope type does
//! not know about, which is the first sign the service changed its response shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize `value` into `T`, logging unknown fields at `warn`.
///
/// Unknown fields never fail the decode. On failure the offending path is logged at
/// `error` before the error is returned.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "deserializing JSON");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let path_result: Result<T, _> = serde_path_to_error::deserialize(original.clone());
        if let Err(path_err) = path_result {
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path_err.path(),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        let field_value = original
            .get(&path)
            .map_or_else(|| "<missing>".to_owned(), Value::to_string);
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %field_value,
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

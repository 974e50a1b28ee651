//! Conversions out of raw JSON bytes.
//!
//! Every model-producing path in the crate ends in [try_decode].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ConvertError, ConvertResult, JsonMap};

/// Returned by [to_text] when the bytes are not valid UTF-8.
pub const INVALID_TEXT_PLACEHOLDER: &str = "UNABLE TO GET STRING";

/// Parses `bytes` as a JSON document whose top level is an object.
pub fn try_to_map(bytes: &[u8]) -> ConvertResult<JsonMap> {
    let value = serde_json::from_slice::<Value>(bytes)
        .map_err(|err| ConvertError::Parse(err.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConvertError::NotAMap {
            found: json_kind(&other),
        }),
    }
}

/// Same as [try_to_map], but returns an empty map on failure.
///
/// An empty result is ambiguous: the input was either `{}` or could not be
/// parsed into an object. Use [try_to_map] to tell them apart.
pub fn to_map(bytes: &[u8]) -> JsonMap {
    try_to_map(bytes).unwrap_or_else(|err| {
        tracing::debug!(len = bytes.len(), error = %err, "Falling back to an empty JSON map");
        JsonMap::new()
    })
}

pub fn try_to_text(bytes: &[u8]) -> ConvertResult<String> {
    String::from_utf8(bytes.to_vec()).map_err(|err| ConvertError::TextEncoding(err.to_string()))
}

/// Same as [try_to_text], but returns [INVALID_TEXT_PLACEHOLDER] on failure.
pub fn to_text(bytes: &[u8]) -> String {
    try_to_text(bytes).unwrap_or_else(|err| {
        tracing::debug!(len = bytes.len(), error = %err, "Falling back to the text placeholder");
        INVALID_TEXT_PLACEHOLDER.to_string()
    })
}

/// Decodes `bytes` into `T`, honoring `T`'s serde key mapping.
///
/// Malformed JSON, missing fields and type mismatches all fail with
/// [ConvertError::Decode]; no partially populated value is ever returned.
pub fn try_decode<T>(bytes: &[u8]) -> ConvertResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice::<T>(bytes).map_err(ConvertError::decode::<T>)
}

/// Same as [try_decode], but returns `None` on failure.
pub fn decode<T>(bytes: &[u8]) -> Option<T>
where
    T: DeserializeOwned,
{
    try_decode(bytes)
        .inspect_err(|err| tracing::debug!(error = %err, "Unable to decode model"))
        .ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

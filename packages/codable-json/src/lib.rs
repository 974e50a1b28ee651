//! Helpers for moving a serde model between JSON bytes, a generic JSON
//! object and JSON text.
//!
//! Every conversion comes in two flavors. The `try_*` functions return a
//! [ConvertResult]. The plain ones swallow the error and hand back a fallback
//! instead: `None` for models, an empty map for maps, and
//! [bytes::INVALID_TEXT_PLACEHOLDER] for text.

pub mod base64;
pub mod bytes;
mod encoding;
mod error;
mod finite;
pub mod map;
mod model;
pub mod text;

pub use encoding::{EncodeOptions, encode, encode_with, try_encode, try_encode_with};
pub use error::*;
pub use model::*;

/// A JSON object with string keys, iterated in insertion order.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

pub use serde_json::Value as JsonValue;

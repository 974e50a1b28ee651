//! Conversions out of a generic JSON object.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::{
    ConvertResult, EncodeOptions, JsonMap, bytes,
    encoding::{SortedMap, write},
};

/// Writes `map` as compact JSON text, members in insertion order.
///
/// The output is always valid JSON, so [crate::text::try_to_map] reads back an
/// equal map.
pub fn to_text(map: &JsonMap) -> String {
    to_text_with(map, EncodeOptions::default())
}

pub fn to_text_with(map: &JsonMap, options: EncodeOptions) -> String {
    Written { map, options }.to_string()
}

/// A borrowed map formatted with the given options.
///
/// Keys are strings and a `serde_json::Number` is always finite, so writing
/// never fails.
struct Written<'a> {
    map: &'a JsonMap,
    options: EncodeOptions,
}

impl fmt::Display for Written<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let written = if self.options.sorted_keys {
            write(&SortedMap(self.map), self.options)
        } else {
            write(self.map, self.options)
        };
        let written = written.map_err(|_| fmt::Error)?;

        f.write_str(std::str::from_utf8(&written).map_err(|_| fmt::Error)?)
    }
}

/// UTF-8 bytes of [to_text].
pub fn to_bytes(map: &JsonMap) -> Vec<u8> {
    to_text(map).into_bytes()
}

pub fn to_bytes_with(map: &JsonMap, options: EncodeOptions) -> Vec<u8> {
    to_text_with(map, options).into_bytes()
}

pub fn try_decode<T>(map: &JsonMap) -> ConvertResult<T>
where
    T: DeserializeOwned,
{
    bytes::try_decode(&to_bytes(map))
}

pub fn decode<T>(map: &JsonMap) -> Option<T>
where
    T: DeserializeOwned,
{
    bytes::decode(&to_bytes(map))
}

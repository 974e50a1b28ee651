use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use crate::{ConvertError, ConvertResult, JsonMap, finite::check_finite};

/// Output formatting switches applied when a model or map is written as JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent nested values by two spaces, one member per line.
    pub pretty_printed: bool,
    /// Emit object members ordered by key, at every nesting level.
    pub sorted_keys: bool,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self {
            pretty_printed: true,
            ..Self::default()
        }
    }

    pub fn sorted() -> Self {
        Self {
            sorted_keys: true,
            ..Self::default()
        }
    }

    pub fn with_pretty_printed(mut self, pretty_printed: bool) -> Self {
        self.pretty_printed = pretty_printed;
        self
    }

    pub fn with_sorted_keys(mut self, sorted_keys: bool) -> Self {
        self.sorted_keys = sorted_keys;
        self
    }
}

/// Encodes `model` as compact JSON bytes, keys in declaration order.
///
/// Fails with [ConvertError::Encode] when the model holds a NaN or infinite
/// float, since JSON has no way to spell one.
pub fn try_encode<T>(model: &T) -> ConvertResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    try_encode_with(model, EncodeOptions::default())
}

pub fn try_encode_with<T>(model: &T, options: EncodeOptions) -> ConvertResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    check_finite(model).map_err(ConvertError::encode::<T, _>)?;

    let result = if options.sorted_keys {
        serde_json::to_value(model).and_then(|value| write(&SortedKeys(&value), options))
    } else {
        write(model, options)
    };

    result.map_err(ConvertError::encode::<T, _>)
}

/// Same as [try_encode], but logs the failure and returns `None` instead of an error.
pub fn encode<T>(model: &T) -> Option<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    encode_with(model, EncodeOptions::default())
}

pub fn encode_with<T>(model: &T, options: EncodeOptions) -> Option<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    try_encode_with(model, options)
        .inspect_err(|err| {
            tracing::warn!(
                model = std::any::type_name::<T>(),
                error = %err,
                "Unable to encode data from model"
            )
        })
        .ok()
}

pub(crate) fn write<T>(value: &T, options: EncodeOptions) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    if options.pretty_printed {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
}

/// Serializes a borrowed JSON value with object members ordered by key, at
/// every nesting level.
pub(crate) struct SortedKeys<'a>(pub(crate) &'a Value);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => SortedMap(map).serialize(serializer),
            Value::Array(items) => serializer.collect_seq(items.iter().map(SortedKeys)),
            other => other.serialize(serializer),
        }
    }
}

pub(crate) struct SortedMap<'a>(pub(crate) &'a JsonMap);

impl Serialize for SortedMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&String, &Value)> = self.0.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, &SortedKeys(value))?;
        }
        map.end()
    }
}

//! Lenient field decoders for loosely structured payloads.
//!
//! Rows and UI objects arrive as JSON where any field may be absent, `null`,
//! or carry the wrong type. These decoders are used with
//! `#[serde(default, deserialize_with = "...")]` and never fail: a value of
//! the wrong shape decodes as "absent" and the mapper's default table takes
//! over from there.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::trades;

/// Decode a JSON value, swallowing shape errors.
fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Ok(Value::deserialize(deserializer).unwrap_or(Value::Null))
}

/// Text field. Numbers are accepted and rendered as text (Postgres numeric
/// columns such as `contract_duration` come back as JSON numbers).
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Text field that falls back to `""`.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text(deserializer)?.unwrap_or_default())
}

/// Whole-number field. Integral floats (`4.0`) are accepted.
pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

/// 32-bit whole-number field; out-of-range values decode as absent.
pub fn integer32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(integer(deserializer)?.and_then(|n| i32::try_from(n).ok()))
}

/// 32-bit whole number that falls back to `0`.
pub fn integer32_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(integer32(deserializer)?.unwrap_or_default())
}

/// Floating point field.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

/// List of strings. Non-string entries are dropped.
pub fn text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Trade list stored either as a Postgres `text[]` (JSON array) or, in
/// older rows, as a single delimited string.
pub fn trade_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::String(s) => Some(trades::split(&s)),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// JSON object field (weather blobs and the like).
pub fn object<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Map<String, Value>>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}

/// Nested record field. A value that is not an object, or that fails to
/// decode, yields `None`.
pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match raw(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Sequence of nested records. Entries that fail to decode are skipped.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    Ok(match raw(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Tri-state values
// ---------------------------------------------------------------------------

/// A field that distinguishes "not supplied" from an explicit `null`.
///
/// Equipment usage needs this: an explicit `null` for hours means the
/// machine sat idle, while a missing field says nothing about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Null | Nullable::Absent => serializer.serialize_none(),
        }
    }
}

/// Tri-state number. Only called when the key is present, so absence is
/// handled by `#[serde(default)]`; a mistyped value counts as absent.
pub fn nullable_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Nullable<f64>, D::Error> {
    Ok(match raw(deserializer)? {
        Value::Null => Nullable::Null,
        Value::Number(n) => n.as_f64().map_or(Nullable::Absent, Nullable::Value),
        _ => Nullable::Absent,
    })
}

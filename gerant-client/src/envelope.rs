//! Response envelope decoding
//!
//! The backend wraps payloads inconsistently. Each resource names its key and
//! the accepted shapes are tried in a fixed order.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// Decode a collection body.
///
/// Shapes, in order: `[...]`, `{key: [...]}`, `{data: [...]}`,
/// `{data: {key: [...]}}`.
pub fn decode_list<T: DeserializeOwned>(body: Value, key: &str) -> ClientResult<Vec<T>> {
    let array = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove(key) {
                items
            } else {
                match map.remove("data") {
                    Some(Value::Array(items)) => items,
                    Some(Value::Object(mut data)) => match data.remove(key) {
                        Some(Value::Array(items)) => items,
                        _ => return Err(no_list(key)),
                    },
                    _ => return Err(no_list(key)),
                }
            }
        }
        _ => return Err(no_list(key)),
    };

    array
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ClientError::from))
        .collect()
}

/// Decode a single-record body.
///
/// Shapes, in order: `{data: {key: {...}}}`, `{key: {...}}`, `{data: {...}}`,
/// bare object.
pub fn decode_one<T: DeserializeOwned>(body: Value, key: &str) -> ClientResult<T> {
    let Value::Object(mut map) = body else {
        return Err(ClientError::InvalidResponse(format!(
            "expected a `{key}` object"
        )));
    };

    let record = match map.get_mut("data") {
        Some(Value::Object(data)) if matches!(data.get(key), Some(Value::Object(_))) => {
            data.remove(key)
        }
        _ => None,
    };
    let record = match record {
        Some(record) => record,
        None => match map.remove(key) {
            Some(inner @ Value::Object(_)) => inner,
            Some(other) => {
                map.insert(key.to_string(), other);
                unwrap_data(map)
            }
            None => unwrap_data(map),
        },
    };

    Ok(serde_json::from_value(record)?)
}

fn unwrap_data(mut map: serde_json::Map<String, Value>) -> Value {
    match map.remove("data") {
        Some(data @ Value::Object(_)) => data,
        Some(other) => {
            map.insert("data".to_string(), other);
            Value::Object(map)
        }
        None => Value::Object(map),
    }
}

fn no_list(key: &str) -> ClientError {
    ClientError::InvalidResponse(format!("no `{key}` array in response"))
}

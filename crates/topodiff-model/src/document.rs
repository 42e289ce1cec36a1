//! Field access helpers shared by the entity parsers.
//!
//! Missing fields (and explicit `null`) read as empty values. Values of the
//! wrong JSON type in a structural position are reported with their path.

use serde_json::{Map, Value};

use crate::consts::DIFF_STATE_KEY;
use crate::diff_state::DiffState;
use crate::error::{ModelError, ModelResult};

pub(crate) type Object = Map<String, Value>;

pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> ModelResult<&'a Object> {
    value.as_object().ok_or_else(|| ModelError::UnexpectedType {
        path: path.to_string(),
        expected: "object",
    })
}

/// Optional nested object; absent reads as `None`.
pub(crate) fn object_field<'a>(
    map: &'a Object,
    key: &str,
    path: &str,
) -> ModelResult<Option<&'a Object>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_object(value, &format!("{path}/{key}")).map(Some),
    }
}

pub(crate) fn str_field(map: &Object, key: &str, path: &str) -> ModelResult<String> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ModelError::UnexpectedType {
            path: format!("{path}/{key}"),
            expected: "string",
        }),
    }
}

/// Parse every element of an optional array field with `parse`.
pub(crate) fn list_field<T, F>(map: &Object, key: &str, path: &str, parse: F) -> ModelResult<Vec<T>>
where
    F: Fn(&Value, &str) -> ModelResult<T>,
{
    let items = match map.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ModelError::UnexpectedType {
                path: format!("{path}/{key}"),
                expected: "array",
            })
        }
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse(item, &format!("{path}/{key}[{i}]")))
        .collect()
}

/// Copy of `map` without the reserved diff-state key.
pub(crate) fn without_marker(map: &Object) -> Object {
    map.iter()
        .filter(|(k, _)| k.as_str() != DIFF_STATE_KEY)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub(crate) fn insert_state(map: &mut Object, state: Option<&DiffState>) {
    if let Some(state) = state {
        map.insert(DIFF_STATE_KEY.to_string(), state.to_value());
    }
}

pub(crate) fn list_value<T>(items: &[T], to_value: impl Fn(&T) -> Value) -> Value {
    Value::Array(items.iter().map(to_value).collect())
}

//! Response envelope normalization.
//!
//! The API does not wrap its responses consistently: the same kind of list
//! may come back as `{"data": [...]}`, as a bare array or under a plural key,
//! and single entities may or may not be nested under their singular name.
//! Each entity kind declares an ordered table of [`Envelope`] candidates; the
//! first candidate that matches the body wins.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::{ApiError, Error};
use crate::Result;

use super::JsonResponse;

/// One way a response body may wrap its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// Payload is nested under this key.
    ///
    /// For single entities the nested value must be a JSON object, so an
    /// entity whose own `"object"` field is the string `"object"` is not
    /// mistaken for a wrapper. For lists it must be an array.
    Key(&'static str),
    /// The body itself is the entity.
    Bare,
    /// The body itself is the list.
    Array,
}

impl Envelope {
    fn matches_one(self, body: &Value) -> bool {
        match self {
            Envelope::Key(key) => body.get(key).is_some_and(Value::is_object),
            Envelope::Bare => body.is_object(),
            Envelope::Array => false,
        }
    }

    fn matches_many(self, body: &Value) -> bool {
        match self {
            Envelope::Key(key) => body.get(key).is_some_and(Value::is_array),
            Envelope::Array => body.is_array(),
            Envelope::Bare => false,
        }
    }
}

/// Unwrap a single entity. Falls back to the body itself when no candidate
/// matches, leaving the error to schema validation.
pub(crate) fn unwrap_one(body: Value, candidates: &[Envelope]) -> Value {
    let matched = candidates.iter().copied().find(|c| c.matches_one(&body));
    match (matched, body) {
        (Some(Envelope::Key(key)), Value::Object(mut map)) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        (_, body) => body,
    }
}

/// Unwrap a list, or `None` if no candidate matches.
pub(crate) fn unwrap_many(body: Value, candidates: &[Envelope]) -> Option<Vec<Value>> {
    let matched = candidates.iter().copied().find(|c| c.matches_many(&body))?;
    match (matched, body) {
        (Envelope::Key(key), Value::Object(mut map)) => match map.remove(key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        (Envelope::Array, Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Decode a single entity from a response.
pub(crate) fn decode_one<T: DeserializeOwned>(
    response: JsonResponse,
    candidates: &[Envelope],
) -> Result<T> {
    let JsonResponse { raw, body } = response;
    let value = unwrap_one(body, candidates);
    serde_json::from_value(value).map_err(|e| ApiError::validation(e, &raw).into())
}

/// Decode a list of entities from a response.
///
/// A body that matches none of the candidates yields an empty list and a
/// warning. An element that does not fit `T` fails the whole call.
pub(crate) fn decode_many<T: DeserializeOwned>(
    response: JsonResponse,
    candidates: &[Envelope],
    kind: &str,
) -> Result<Vec<T>> {
    let JsonResponse { raw, body } = response;
    let shape = shape_of(&body);

    let Some(items) = unwrap_many(body, candidates) else {
        warn!(kind, shape, "Unexpected list response format, returning no items");
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| Error::from(ApiError::validation(e, &raw))))
        .collect()
}

fn shape_of(body: &Value) -> &'static str {
    match body {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPACE_LIST: &[Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("spaces")];
    const OBJECT_ONE: &[Envelope] = &[Envelope::Key("object"), Envelope::Bare];

    #[test]
    fn list_under_data_key() {
        let items = unwrap_many(json!({"data": [{"id": "a"}], "pagination": {}}), SPACE_LIST).unwrap();
        assert_eq!(items, vec![json!({"id": "a"})]);
    }

    #[test]
    fn list_as_bare_array() {
        let items = unwrap_many(json!([{"id": "a"}, {"id": "b"}]), SPACE_LIST).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn list_under_plural_key() {
        let items = unwrap_many(json!({"spaces": [{"id": "a"}]}), SPACE_LIST).unwrap();
        assert_eq!(items, vec![json!({"id": "a"})]);
    }

    #[test]
    fn data_must_be_an_array() {
        let items = unwrap_many(json!({"data": {"id": "a"}, "spaces": []}), SPACE_LIST).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn unrecognized_list_shape_is_none() {
        assert!(unwrap_many(json!({"items": []}), SPACE_LIST).is_none());
        assert!(unwrap_many(json!("nope"), SPACE_LIST).is_none());
    }

    #[test]
    fn single_nested_under_key() {
        let value = unwrap_one(json!({"object": {"id": "o1"}}), OBJECT_ONE);
        assert_eq!(value, json!({"id": "o1"}));
    }

    #[test]
    fn single_bare() {
        let value = unwrap_one(json!({"id": "o1", "name": "n"}), OBJECT_ONE);
        assert_eq!(value["id"], "o1");
    }

    #[test]
    fn string_field_named_like_the_wrapper_is_not_unwrapped() {
        let body = json!({"object": "object", "id": "o1", "name": "n"});
        let value = unwrap_one(body.clone(), OBJECT_ONE);
        assert_eq!(value, body);
    }

    #[test]
    fn single_falls_back_to_body() {
        let value = unwrap_one(json!([1, 2]), OBJECT_ONE);
        assert_eq!(value, json!([1, 2]));
    }
}

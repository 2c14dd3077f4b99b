//! Borrowed, typed access into an arbitrary JSON document.
//!
//! Custody documents have no fixed schema; every field is optional. Accessors
//! therefore return a tri-state [`Field`] instead of silently coercing:
//! a key can be absent, present with the wrong JSON type, or present with a
//! usable value.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("document root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Read-only view over one JSON object.
///
/// The view never mutates or clones the underlying value; evaluators hold it
/// only for the duration of one analysis.
#[derive(Clone, Copy, Debug)]
pub struct Document<'a> {
    fields: &'a Map<String, Value>,
}

/// Tri-state result of a typed field lookup.
#[derive(Clone, Copy, Debug)]
pub enum Field<'a, T> {
    /// The key is not present at all.
    Missing,
    /// The key is present but holds a different JSON type.
    WrongType(&'a Value),
    /// The key is present with the expected type.
    Value(T),
}

impl<'a, T> Field<'a, T> {
    /// The usable value, if any. Wrong-typed data is as unusable as absent
    /// data for rule evaluation, so both collapse to `None`.
    pub fn ok(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Missing | Field::WrongType(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

impl<'a> Document<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(map) => Ok(Self { fields: map }),
            other => Err(DocumentError::NotAnObject {
                found: json_type_name(other),
            }),
        }
    }

    /// View over an already-extracted object, e.g. a list entry.
    pub fn of(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    pub fn str_field(&self, key: &str) -> Field<'a, &'a str> {
        self.typed(key, Value::as_str)
    }

    pub fn int_field(&self, key: &str) -> Field<'a, i64> {
        self.typed(key, Value::as_i64)
    }

    pub fn array_field(&self, key: &str) -> Field<'a, &'a [Value]> {
        self.typed(key, |v| v.as_array().map(Vec::as_slice))
    }

    pub fn object_field(&self, key: &str) -> Field<'a, Document<'a>> {
        self.typed(key, |v| v.as_object().map(Document::of))
    }

    fn typed<T>(&self, key: &str, extract: impl Fn(&'a Value) -> Option<T>) -> Field<'a, T> {
        match self.fields.get(key) {
            None => Field::Missing,
            Some(value) => match extract(value) {
                Some(typed) => Field::Value(typed),
                None => Field::WrongType(value),
            },
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
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

    #[test]
    fn rejects_non_object_roots() {
        let value = json!([1, 2, 3]);
        let err = Document::from_value(&value).unwrap_err();
        assert_eq!(err, DocumentError::NotAnObject { found: "array" });
        assert!(err.to_string().contains("found array"));
    }

    #[test]
    fn field_tri_state() {
        let value = json!({"name": "alpha", "count": "ten"});
        let doc = Document::from_value(&value).expect("object");

        assert!(matches!(doc.str_field("name"), Field::Value("alpha")));
        assert!(matches!(doc.int_field("count"), Field::WrongType(_)));
        assert!(doc.int_field("absent").is_missing());

        assert_eq!(doc.str_field("name").ok(), Some("alpha"));
        assert_eq!(doc.int_field("count").ok(), None);
    }

    #[test]
    fn nested_object_view() {
        let value = json!({"parameters": {"type": "TRANSACTION_TYPE_ETHEREUM"}});
        let doc = Document::from_value(&value).expect("object");
        let params = doc.object_field("parameters").ok().expect("nested object");
        assert_eq!(params.str_field("type").ok(), Some("TRANSACTION_TYPE_ETHEREUM"));
    }
}

//! Structural normalizer
//!
//! Every comparison happens over `serde_json::Value`. Arbitrary typed values
//! are laundered through `serde` into this generic document model so two
//! different concrete types compare equal when their encoded shapes match.

use crate::errors::{JaclError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Convert any serializable value into its generic structured form.
///
/// # Errors
///
/// `Evaluation` when the value has no structural encoding (a `Serialize`
/// impl that fails, map keys that are not strings, ...).
pub fn normalize<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| JaclError::evaluation("normalize", e))
}

/// Borrow a normalized value as a list of items.
///
/// `Null` is the absent collection and reads as an empty list.
///
/// # Errors
///
/// `Evaluation` when the value is neither a list nor `Null`.
pub fn as_list<'a>(value: &'a Value, op: &'static str) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Null => Ok(&[][..]),
        other => Err(JaclError::shape(op, "list", kind_name(other))),
    }
}

/// Borrow a normalized value as a record.
///
/// # Errors
///
/// `Evaluation` when the value is not a record.
pub fn as_record<'a>(value: &'a Value, op: &'static str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| JaclError::shape(op, "record", kind_name(value)))
}

/// True for `Null`, `Bool`, `Number` and `String`.
pub fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Absent or empty collection.
pub fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Short name of a value's variant, for diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "record",
    }
}

/// Render a normalized value for diagnostics (compact JSON).
pub fn render(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde_json::json;

    #[derive(Serialize)]
    struct Narrow {
        a: &'static str,
    }

    #[derive(Serialize)]
    struct Wide {
        a: &'static str,
        b: &'static str,
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _s: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("no structural encoding"))
        }
    }

    #[test]
    fn test_normalize_struct_to_record() {
        let v = normalize(&Wide { a: "a", b: "b" }).unwrap();
        assert_eq!(v, json!({"a": "a", "b": "b"}));
    }

    #[test]
    fn test_different_types_same_shape() {
        let n = normalize(&Narrow { a: "x" }).unwrap();
        let m = normalize(&json!({"a": "x"})).unwrap();
        assert_eq!(n, m);
    }

    #[test]
    fn test_normalize_failure_is_evaluation() {
        let err = normalize(&Unencodable).unwrap_err();
        assert!(err.is_evaluation());
        assert!(err.to_string().contains("no structural encoding"));
    }

    #[test]
    fn test_as_list_accepts_null() {
        assert!(as_list(&Value::Null, "t").unwrap().is_empty());
        let items = json!(["a"]);
        assert_eq!(as_list(&items, "t").unwrap(), [json!("a")]);
    }

    #[test]
    fn test_as_list_rejects_record() {
        let err = as_list(&json!({"a": 1}), "collection.cmp").unwrap_err();
        assert!(err.is_evaluation());
        assert_eq!(
            err.to_string(),
            "collection.cmp: expected list, found record"
        );
    }

    #[test]
    fn test_as_record() {
        let v = json!({"a": 1});
        assert_eq!(as_record(&v, "t").unwrap().len(), 1);
        assert!(as_record(&json!([1]), "t").unwrap_err().is_evaluation());
    }

    #[test]
    fn test_scalar_and_empty_classification() {
        assert!(is_scalar(&Value::Null));
        assert!(is_scalar(&json!(1.5)));
        assert!(!is_scalar(&json!([])));
        assert!(is_empty_collection(&Value::Null));
        assert!(is_empty_collection(&json!([])));
        assert!(!is_empty_collection(&json!(["a"])));
        assert!(!is_empty_collection(&json!({})));
    }

    #[test]
    fn test_render_is_compact_json() {
        assert_eq!(render(&json!({"a": ["b", 1]})), r#"{"a":["b",1]}"#);
    }
}

//! Subset comparison over normalized values.
//!
//! `expected` must be contained in `actual`: records may carry extra keys on
//! the actual side, lists must line up position by position.

use crate::errors::Result;
use crate::value::normalize;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Answer true if `actual` contains every value present in `expected`.
pub fn subset_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) => false,
        (Value::Bool(e), Value::Bool(a)) => e == a,
        (Value::String(e), Value::String(a)) => e == a,
        (Value::Object(e), Value::Object(a)) => record_subset(e, a),
        (Value::Array(e), Value::Array(a)) => list_subset(e, a),
        (Value::Number(e), Value::Number(a)) => numbers_equal(e, a),
        (e, a) => e == a,
    }
}

/// Every key of `expected` must exist in `actual` and subset-match there.
pub fn record_subset(expected: &Map<String, Value>, actual: &Map<String, Value>) -> bool {
    expected.iter().all(|(key, want)| {
        actual
            .get(key)
            .is_some_and(|have| subset_match(want, have))
    })
}

/// Equal length, then pairwise subset match in order.
pub fn list_subset(expected: &[Value], actual: &[Value]) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(want, have)| subset_match(want, have))
}

/// Subset match in both directions.
pub fn structurally_equal(a: &Value, b: &Value) -> bool {
    subset_match(a, b) && subset_match(b, a)
}

/// Compare two scalars of the same variant.
///
/// Returns `None` when the pair is not comparable as scalars (either side is
/// composite, or the variants differ).
pub fn scalar_match(expected: &Value, actual: &Value) -> Option<bool> {
    match (expected, actual) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Bool(e), Value::Bool(a)) => Some(e == a),
        (Value::String(e), Value::String(a)) => Some(e == a),
        (Value::Number(e), Value::Number(a)) => Some(numbers_equal(e, a)),
        _ => None,
    }
}

// Integers compare exactly; anything involving a float compares as f64.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Normalize two values and answer whether `actual` contains `expected`.
///
/// # Errors
///
/// `Evaluation` when either side cannot be normalized.
pub fn compare<E, A>(expected: &E, actual: &A) -> Result<bool>
where
    E: Serialize + ?Sized,
    A: Serialize + ?Sized,
{
    let expected = normalize(expected)?;
    let actual = normalize(actual)?;
    Ok(subset_match(&expected, &actual))
}

use crate::compare::{record_subset, scalar_match};
use crate::errors::{have_want, JaclError, Result};
use crate::value::{as_record, is_scalar, render};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Compares one expected value against one actual value.
///
/// Scalars of the same variant compare directly, and `null` only matches
/// `null`. Otherwise both sides must be records and the expected record must
/// be a subset of the actual one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleMatcher {
    #[serde(rename = "a", default, skip_serializing_if = "Value::is_null")]
    expected: Value,
}

impl SingleMatcher {
    pub fn new(expected: Value) -> Self {
        Self { expected }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// # Errors
    ///
    /// - `Comparison`: scalar mismatch, `null` against a present value, or
    ///   a record that is not a subset of the actual record
    /// - `Evaluation`: a side that must be a record is a list or a scalar
    pub fn cmp(&self, actual: &Value) -> Result<()> {
        let op = "single.cmp";

        let matched = match scalar_match(&self.expected, actual) {
            Some(matched) => matched,
            None if self.expected.is_null() || actual.is_null() => false,
            None if is_scalar(&self.expected) && is_scalar(actual) => false,
            None => {
                let want = as_record(&self.expected, op)?;
                let have = as_record(actual, op)?;
                record_subset(want, have)
            }
        };

        if matched {
            return Ok(());
        }
        Err(JaclError::comparison(have_want(
            render(actual),
            render(&self.expected),
        )))
    }
}

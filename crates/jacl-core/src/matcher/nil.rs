use crate::errors::{have_want, JaclError, Result};
use crate::value::render;
use serde_json::Value;

/// Passes only when the actual value is absent (`null` once normalized).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NilMatcher;

impl NilMatcher {
    /// # Errors
    ///
    /// `Comparison` when `actual` is present.
    pub fn cmp(&self, actual: &Value) -> Result<()> {
        if actual.is_null() {
            return Ok(());
        }
        Err(JaclError::comparison(have_want(render(actual), "nil")))
    }
}

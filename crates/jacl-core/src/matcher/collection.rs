//! Collection matcher
//!
//! Compares an expected list of items against an actual list:
//!
//! 1. An empty expectation with no overlay functions matches an absent or
//!    empty actual collection outright.
//! 2. The actual value is coerced into a list.
//! 3. Overlay functions run over the whole actual list, in attach order. The
//!    first failure aborts. With no expected items, passing them is a match.
//! 4. When every item on both sides is a record, each expected item is
//!    paired with an actual item, by position or by identity key, and must
//!    be a subset of its partner. Otherwise the lists are compared literally:
//!    same length, then position by position.
//!
//! Unpaired actual items are always allowed.

use crate::compare::{structurally_equal, subset_match};
use crate::envelope::OverlayEnvelope;
use crate::errors::{have_want, have_want_length, JaclError, Result};
use crate::overlay::{Overlay, OverlayFn};
use crate::value::{as_list, is_empty_collection, render};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionMatcher {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    keys: Vec<String>,
    #[serde(rename = "a", default, skip_serializing_if = "Vec::is_empty")]
    expected: Vec<Value>,
    #[serde(rename = "fn", default, skip_serializing_if = "Vec::is_empty")]
    funcs: Vec<OverlayEnvelope>,
}

impl CollectionMatcher {
    pub fn new(keys: Vec<String>, expected: Vec<Value>, funcs: Vec<OverlayFn>) -> Self {
        Self {
            keys,
            expected,
            funcs: funcs.into_iter().map(OverlayEnvelope::new).collect(),
        }
    }

    /// Identity fields; empty means positional pairing.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn expected(&self) -> &[Value] {
        &self.expected
    }

    /// Overlay functions in attach order. Functions persisted under a tag
    /// this build does not know decode as absent and are skipped.
    pub fn funcs(&self) -> impl Iterator<Item = &OverlayFn> {
        self.funcs.iter().filter_map(OverlayEnvelope::get)
    }

    /// # Errors
    ///
    /// - `Comparison`: an overlay function failed, an expected item has no
    ///   partner, or an item is not a subset of its partner
    /// - `Evaluation`: `actual` is not a list
    pub fn cmp(&self, actual: &Value) -> Result<()> {
        if self.expected.is_empty() && self.funcs.is_empty() && is_empty_collection(actual) {
            return Ok(());
        }

        let items = as_list(actual, "collection.cmp")?;

        for f in &self.funcs {
            f.eval(items)?;
        }
        if self.expected.is_empty() {
            return Ok(());
        }

        if self.expected.iter().all(Value::is_object) && items.iter().all(Value::is_object) {
            self.match_records(items)
        } else {
            tracing::debug!(
                expected_len = self.expected.len(),
                actual_len = items.len(),
                "non-record items, comparing collections literally"
            );
            match_literal(&self.expected, items)
        }
    }

    fn match_records(&self, items: &[Value]) -> Result<()> {
        for (index, want) in self.expected.iter().enumerate() {
            let have = self.find_partner(index, want, items).ok_or_else(|| {
                if self.keys.is_empty() {
                    JaclError::comparison(have_want_length(items.len(), self.expected.len()))
                } else {
                    JaclError::comparison(format!(
                        "no match for key {}: want {}",
                        self.keys.join(","),
                        render(want)
                    ))
                }
            })?;
            if !subset_match(want, have) {
                return Err(JaclError::comparison(have_want(render(have), render(want))));
            }
        }
        Ok(())
    }

    /// Positional partner, or the first actual item whose identity fields
    /// all equal the expected item's. An expected item missing an identity
    /// field has no partner.
    fn find_partner<'a>(&self, index: usize, want: &Value, items: &'a [Value]) -> Option<&'a Value> {
        if self.keys.is_empty() {
            return items.get(index);
        }
        let identity: Vec<&Value> = self
            .keys
            .iter()
            .map(|key| want.get(key))
            .collect::<Option<_>>()?;
        items.iter().find(|have| {
            self.keys.iter().zip(&identity).all(|(key, id)| {
                have.get(key)
                    .is_some_and(|value| structurally_equal(id, value))
            })
        })
    }
}

fn match_literal(expected: &[Value], items: &[Value]) -> Result<()> {
    if expected.len() != items.len() {
        return Err(JaclError::comparison(have_want_length(
            items.len(),
            expected.len(),
        )));
    }
    for (want, have) in expected.iter().zip(items) {
        if !subset_match(want, have) {
            return Err(JaclError::comparison(have_want(render(have), render(want))));
        }
    }
    Ok(())
}

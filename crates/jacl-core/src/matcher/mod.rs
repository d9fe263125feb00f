//! Matchers
//!
//! A [`Matcher`] owns an expected value and answers whether an actual value
//! contains it. Matchers are immutable: `cmp` never mutates them, so one
//! matcher can be shared across threads and invoked any number of times.
//!
//! ## Variants
//!
//! - [`NilMatcher`]: the actual value must be absent.
//! - [`SingleMatcher`]: one expected record (or scalar) against one actual.
//! - [`CollectionMatcher`]: an expected list against an actual list, paired
//!   by position or by identity key, plus overlay functions.

pub mod collection;
pub mod nil;
pub mod single;

pub use collection::CollectionMatcher;
pub use nil::NilMatcher;
pub use single::SingleMatcher;

use crate::envelope::{Decoder, MatcherEnvelope, Variant};
use crate::errors::Result;
use crate::value::normalize;
use crate::{log_op_end, log_op_error, log_op_start};
use jacl_core_types::schema::{
    ENVELOPE_MATCHER_KEY, TAG_COLLECTION_MATCHER, TAG_NIL_MATCHER, TAG_SINGLE_MATCHER,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Instant;

/// The closed set of matchers
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    Nil(NilMatcher),
    Single(SingleMatcher),
    Collection(CollectionMatcher),
}

impl Matcher {
    /// Answer `Ok` if `actual` contains every value of the expected side.
    ///
    /// `actual` is normalized once, then compared.
    ///
    /// # Errors
    ///
    /// - `Comparison`: the data does not satisfy the subset relation
    /// - `Evaluation`: `actual` could not be normalized, or has a shape the
    ///   matcher cannot compare against
    pub fn cmp<A: Serialize + ?Sized>(&self, actual: &A) -> Result<()> {
        let op = "matcher.cmp";
        log_op_start!(op, tag = self.tag());
        let start = Instant::now();

        let result = normalize(actual).and_then(|actual| self.cmp_value(&actual));

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!(op, duration_ms = duration_ms, tag = self.tag());
            }
            Err(err) => {
                log_op_error!(op, err, duration_ms = duration_ms, tag = self.tag());
            }
        }
        result
    }

    /// Compare against an already-normalized actual value.
    ///
    /// # Errors
    ///
    /// See [`Matcher::cmp`].
    pub fn cmp_value(&self, actual: &Value) -> Result<()> {
        match self {
            Matcher::Nil(m) => m.cmp(actual),
            Matcher::Single(m) => m.cmp(actual),
            Matcher::Collection(m) => m.cmp(actual),
        }
    }

    /// Discriminant tag used when persisting this matcher.
    pub fn tag(&self) -> &'static str {
        match self {
            Matcher::Nil(_) => TAG_NIL_MATCHER,
            Matcher::Single(_) => TAG_SINGLE_MATCHER,
            Matcher::Collection(_) => TAG_COLLECTION_MATCHER,
        }
    }

    /// Wrap this matcher for persistence.
    pub fn into_envelope(self) -> MatcherEnvelope {
        MatcherEnvelope::new(self)
    }
}

impl From<NilMatcher> for Matcher {
    fn from(m: NilMatcher) -> Self {
        Matcher::Nil(m)
    }
}

impl From<SingleMatcher> for Matcher {
    fn from(m: SingleMatcher) -> Self {
        Matcher::Single(m)
    }
}

impl From<CollectionMatcher> for Matcher {
    fn from(m: CollectionMatcher) -> Self {
        Matcher::Collection(m)
    }
}

fn decode_nil(_payload: Value) -> std::result::Result<Matcher, serde_json::Error> {
    Ok(Matcher::Nil(NilMatcher))
}

fn decode_single(payload: Value) -> std::result::Result<Matcher, serde_json::Error> {
    serde_json::from_value(payload).map(Matcher::Single)
}

fn decode_collection(payload: Value) -> std::result::Result<Matcher, serde_json::Error> {
    serde_json::from_value(payload).map(Matcher::Collection)
}

impl Variant for Matcher {
    const PAYLOAD_KEY: &'static str = ENVELOPE_MATCHER_KEY;

    const DECODERS: &'static [(&'static str, Decoder<Self>)] = &[
        (TAG_NIL_MATCHER, decode_nil),
        (TAG_SINGLE_MATCHER, decode_single),
        (TAG_COLLECTION_MATCHER, decode_collection),
    ];

    fn tag(&self) -> &'static str {
        Matcher::tag(self)
    }

    fn payload(&self) -> std::result::Result<Value, serde_json::Error> {
        match self {
            Matcher::Nil(_) => Ok(Value::Object(Map::new())),
            Matcher::Single(m) => serde_json::to_value(m),
            Matcher::Collection(m) => serde_json::to_value(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_matchers_are_send_and_sync() {
        assert_send_sync::<Matcher>();
        assert_send_sync::<MatcherEnvelope>();
    }

    #[test]
    fn test_tags() {
        assert_eq!(Matcher::Nil(NilMatcher).tag(), "jacl-nilcmp");
        assert_eq!(
            Matcher::from(SingleMatcher::new(json!("a"))).tag(),
            "jacl-singlecmp"
        );
        assert_eq!(
            Matcher::from(CollectionMatcher::default()).tag(),
            "jacl-slicecmp"
        );
    }

    #[test]
    fn test_cmp_normalizes_actual() {
        #[derive(Serialize)]
        struct Row {
            a: &'static str,
            b: &'static str,
        }

        let m = Matcher::from(SingleMatcher::new(json!({"a": "x"})));
        assert!(m.cmp(&Row { a: "x", b: "y" }).is_ok());
        assert!(m.cmp(&Row { a: "z", b: "y" }).unwrap_err().is_comparison());
    }

    #[test]
    fn test_nil_payload_is_empty_record() {
        let env = Matcher::Nil(NilMatcher).into_envelope();
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"key": "jacl-nilcmp", "cmper": {}})
        );
    }
}

//! Overlay functions
//!
//! Predicates evaluated against a whole actual collection, independent of
//! item-by-item comparison. Each variant is its own payload type
//! implementing [`Overlay`]; [`OverlayFn`] is the closed set the collection
//! matcher and the envelope know about.

use crate::envelope::{Decoder, Variant};
use crate::errors::{JaclError, Result};
use jacl_core_types::schema::{ENVELOPE_OVERLAY_KEY, TAG_KEY_OF, TAG_NOT_EXISTS, TAG_SIZE_IS};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A predicate over the raw items of an actual collection
pub trait Overlay {
    /// Evaluate against the normalized actual items.
    ///
    /// # Errors
    ///
    /// `Comparison` when the collection violates the predicate.
    fn eval(&self, items: &[Value]) -> Result<()>;
}

/// Identity fields used to pair expected and actual items.
///
/// Carries no truth value: it only tells the builder which argument
/// configures pairing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOf {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
}

impl Overlay for KeyOf {
    fn eval(&self, _items: &[Value]) -> Result<()> {
        Ok(())
    }
}

/// Fails if any item contains a value at `path`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotExists {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
}

impl NotExists {
    /// Walk `path` through nested records. Non-record segments end the walk:
    /// a string, number, bool, null or list cannot contain a field.
    fn exists_in(&self, item: &Value) -> bool {
        if self.path.is_empty() {
            return false;
        }
        let mut cursor = item;
        for segment in &self.path {
            match cursor.as_object().and_then(|record| record.get(segment)) {
                Some(next) => cursor = next,
                None => return false,
            }
        }
        true
    }
}

impl Overlay for NotExists {
    fn eval(&self, items: &[Value]) -> Result<()> {
        if items.iter().any(|item| self.exists_in(item)) {
            return Err(JaclError::comparison(format!(
                "exists: {}",
                self.path.join(".")
            )));
        }
        Ok(())
    }
}

/// Fails unless the collection holds exactly `size` items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeIs {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: usize,
}

fn is_zero(size: &usize) -> bool {
    *size == 0
}

impl Overlay for SizeIs {
    fn eval(&self, items: &[Value]) -> Result<()> {
        if items.len() == self.size {
            return Ok(());
        }
        Err(JaclError::comparison(format!(
            "size mismatch, have {} want {}",
            items.len(),
            self.size
        )))
    }
}

/// The closed set of overlay functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayFn {
    KeyOf(KeyOf),
    NotExists(NotExists),
    SizeIs(SizeIs),
}

impl OverlayFn {
    pub fn key_of<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OverlayFn::KeyOf(KeyOf {
            keys: keys.into_iter().map(Into::into).collect(),
        })
    }

    pub fn not_exists<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OverlayFn::NotExists(NotExists {
            path: path.into_iter().map(Into::into).collect(),
        })
    }

    pub fn size_is(size: usize) -> Self {
        OverlayFn::SizeIs(SizeIs { size })
    }

    /// Discriminant tag used when persisting this function.
    pub fn tag(&self) -> &'static str {
        match self {
            OverlayFn::KeyOf(_) => TAG_KEY_OF,
            OverlayFn::NotExists(_) => TAG_NOT_EXISTS,
            OverlayFn::SizeIs(_) => TAG_SIZE_IS,
        }
    }

    /// Identity fields, if this function configures pairing.
    pub fn identity_keys(&self) -> Option<&[String]> {
        match self {
            OverlayFn::KeyOf(k) => Some(&k.keys),
            _ => None,
        }
    }
}

impl Overlay for OverlayFn {
    fn eval(&self, items: &[Value]) -> Result<()> {
        match self {
            OverlayFn::KeyOf(f) => f.eval(items),
            OverlayFn::NotExists(f) => f.eval(items),
            OverlayFn::SizeIs(f) => f.eval(items),
        }
    }
}

fn decode_key_of(payload: Value) -> std::result::Result<OverlayFn, serde_json::Error> {
    serde_json::from_value(payload).map(OverlayFn::KeyOf)
}

fn decode_not_exists(payload: Value) -> std::result::Result<OverlayFn, serde_json::Error> {
    serde_json::from_value(payload).map(OverlayFn::NotExists)
}

fn decode_size_is(payload: Value) -> std::result::Result<OverlayFn, serde_json::Error> {
    serde_json::from_value(payload).map(OverlayFn::SizeIs)
}

impl Variant for OverlayFn {
    const PAYLOAD_KEY: &'static str = ENVELOPE_OVERLAY_KEY;

    const DECODERS: &'static [(&'static str, Decoder<Self>)] = &[
        (TAG_KEY_OF, decode_key_of),
        (TAG_NOT_EXISTS, decode_not_exists),
        (TAG_SIZE_IS, decode_size_is),
    ];

    fn tag(&self) -> &'static str {
        OverlayFn::tag(self)
    }

    fn payload(&self) -> std::result::Result<Value, serde_json::Error> {
        match self {
            OverlayFn::KeyOf(f) => serde_json::to_value(f),
            OverlayFn::NotExists(f) => serde_json::to_value(f),
            OverlayFn::SizeIs(f) => serde_json::to_value(f),
        }
    }
}

//! Builder surface
//!
//! Constructors that turn typed test data into matchers:
//!
//! ```
//! use jacl_core::{cmps, key, size_is};
//! use serde_json::json;
//!
//! let m = cmps()
//!     .func(key(["id"]))
//!     .func(size_is(2))
//!     .item(&json!({"id": 2}))
//!     .build()?;
//! m.cmp(&json!([{"id": 1}, {"id": 2, "name": "b"}]))?;
//! # Ok::<(), jacl_core::JaclError>(())
//! ```

use crate::errors::{JaclError, Result};
use crate::matcher::{CollectionMatcher, Matcher, NilMatcher, SingleMatcher};
use crate::overlay::OverlayFn;
use crate::value::normalize;
use serde::Serialize;
use serde_json::Value;

/// Matcher for a single expected value.
///
/// # Errors
///
/// `Evaluation` when `expected` cannot be normalized.
pub fn cmp<T: Serialize + ?Sized>(expected: &T) -> Result<Matcher> {
    Ok(SingleMatcher::new(normalize(expected)?).into())
}

/// Matcher asserting the actual value is absent.
pub fn cmp_nil() -> Matcher {
    NilMatcher.into()
}

/// Start a collection matcher.
pub fn cmps() -> CollectionBuilder {
    CollectionBuilder::default()
}

/// Pair expected and actual items by these identity fields.
pub fn key<I, S>(fields: I) -> OverlayFn
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OverlayFn::key_of(fields)
}

/// Require the actual collection to hold exactly `size` items.
pub fn size_is(size: usize) -> OverlayFn {
    OverlayFn::size_is(size)
}

/// Require that no actual item has a value at `path`.
pub fn not_exists<I, S>(path: I) -> OverlayFn
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OverlayFn::not_exists(path)
}

/// Accumulates expected items and overlay functions for a
/// [`CollectionMatcher`].
#[derive(Debug, Default)]
pub struct CollectionBuilder {
    keys: Vec<String>,
    items: Vec<Value>,
    funcs: Vec<OverlayFn>,
    error: Option<JaclError>,
}

impl CollectionBuilder {
    /// Append one expected item. A normalization failure is kept and
    /// returned by [`CollectionBuilder::build`].
    pub fn item<T: Serialize + ?Sized>(mut self, item: &T) -> Self {
        if self.error.is_none() {
            match normalize(item) {
                Ok(value) => self.items.push(value),
                Err(err) => self.error = Some(err),
            }
        }
        self
    }

    pub fn items<'a, I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Serialize + 'a,
    {
        items.into_iter().fold(self, |builder, item| builder.item(item))
    }

    /// Attach an overlay function. A [`key`] function sets the identity
    /// fields instead; the last one wins.
    pub fn func(mut self, f: OverlayFn) -> Self {
        match f {
            OverlayFn::KeyOf(k) => self.keys = k.keys,
            other => self.funcs.push(other),
        }
        self
    }

    /// # Errors
    ///
    /// The first `Evaluation` error raised while normalizing an item.
    pub fn build(self) -> Result<Matcher> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(CollectionMatcher::new(self.keys, self.items, self.funcs).into())
    }
}

//! jacl core - structural subset comparison for test assertions
//!
//! A test states only the fields it cares about; the actual data may carry
//! anything else. This crate provides:
//! - A structural normalizer laundering any `Serialize` value into
//!   `serde_json::Value`
//! - The subset comparator over that generic form
//! - Nil, single and collection matchers, with positional or identity-key
//!   pairing of collection items
//! - Overlay functions (`SizeIs`, `NotExists`, `KeyOf`) evaluated against a
//!   whole actual collection
//! - A tagged envelope persisting matchers and overlay functions, so
//!   expectations can be stored as fixtures and reloaded
//!
//! ```
//! use jacl_core::cmp;
//! use serde_json::json;
//!
//! let m = cmp(&json!({"name": "a"}))?;
//! m.cmp(&json!({"name": "a", "id": 7}))?;
//! assert!(m.cmp(&json!({"name": "b"})).unwrap_err().is_comparison());
//! # Ok::<(), jacl_core::JaclError>(())
//! ```

pub mod builder;
pub mod compare;
pub mod envelope;
pub mod errors;
pub mod logging_facility;
pub mod matcher;
pub mod overlay;
pub mod value;

// Re-export commonly used types
pub use builder::{cmp, cmp_nil, cmps, key, not_exists, size_is, CollectionBuilder};
pub use compare::{compare, subset_match};
pub use envelope::{Envelope, MatcherEnvelope, OverlayEnvelope, Variant};
pub use errors::{ErrorKind, EvaluationCause, JaclError, Result};
pub use matcher::{CollectionMatcher, Matcher, NilMatcher, SingleMatcher};
pub use overlay::{Overlay, OverlayFn};
pub use value::normalize;

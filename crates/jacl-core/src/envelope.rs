//! Polymorphic envelope
//!
//! Persists a value from a closed set of variants as a tagged record and
//! reconstructs the same variant on decode:
//!
//! ```json
//! { "key": "jacl-singlecmp", "cmper": { "a": { "id": "1" } } }
//! ```
//!
//! ## Guarantees
//!
//! - **Stable tags**: each variant owns one compile-time tag; decoding an
//!   encoded value yields the variant that produced it.
//! - **Closed decoder table**: tags map to decode functions through a static,
//!   read-only table per variant family. There is no runtime registration.
//! - **Forward compatibility**: an unknown tag decodes to an absent value,
//!   never an error. Absent matchers and overlay functions always pass.
//! - **Empty is empty**: an absent value encodes as `{}`; neither field is
//!   ever emitted as `null`.

use crate::errors::Result;
use crate::matcher::Matcher;
use crate::overlay::{Overlay, OverlayFn};
use crate::value::kind_name;
use jacl_core_types::schema::ENVELOPE_TAG_KEY;
use serde::de::Error as _;
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Decode function for one tag.
pub type Decoder<T> = fn(Value) -> std::result::Result<T, serde_json::Error>;

/// A closed family of variants that can travel inside an [`Envelope`].
pub trait Variant: Sized + 'static {
    /// Record key holding the wrapped payload.
    const PAYLOAD_KEY: &'static str;

    /// Tag to decoder table covering every variant of the family.
    const DECODERS: &'static [(&'static str, Decoder<Self>)];

    /// Discriminant tag of this value.
    fn tag(&self) -> &'static str;

    /// Opaque payload of this value.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures of the payload.
    fn payload(&self) -> std::result::Result<Value, serde_json::Error>;
}

/// A possibly-absent variant with a tagged persistent form.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T>(Option<T>);

/// Persistent form of a matcher
pub type MatcherEnvelope = Envelope<Matcher>;

/// Persistent form of an overlay function
pub type OverlayEnvelope = Envelope<OverlayFn>;

impl<T> Envelope<T> {
    pub fn new(value: T) -> Self {
        Self(Some(value))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Envelope<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Variant> Envelope<T> {
    /// Tag and payload of the wrapped value; `None` when absent.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures of the payload.
    pub fn encode(&self) -> std::result::Result<Option<(&'static str, Value)>, serde_json::Error> {
        match &self.0 {
            Some(inner) => Ok(Some((inner.tag(), inner.payload()?))),
            None => Ok(None),
        }
    }

    /// Rebuild the variant named by `tag` from its payload.
    ///
    /// A missing payload decodes to the variant's defaults. An unknown tag
    /// yields an absent envelope.
    ///
    /// # Errors
    ///
    /// The tag is known but the payload does not decode into its variant.
    pub fn decode(tag: &str, payload: Value) -> std::result::Result<Self, serde_json::Error> {
        let Some((_, decode)) = T::DECODERS.iter().find(|(known, _)| *known == tag) else {
            if !tag.is_empty() {
                tracing::warn!(tag, "unknown envelope tag, decoding as absent");
            }
            return Ok(Self::empty());
        };
        let payload = match payload {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };
        decode(payload).map(Self::new)
    }
}

impl<T: Variant> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let encoded = self.encode().map_err(S::Error::custom)?;
        let mut map = serializer.serialize_map(None)?;
        if let Some((tag, payload)) = encoded {
            map.serialize_entry(ENVELOPE_TAG_KEY, tag)?;
            if !payload.is_null() {
                map.serialize_entry(T::PAYLOAD_KEY, &payload)?;
            }
        }
        map.end()
    }
}

impl<'de, T: Variant> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut record = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        let tag = match record.remove(ENVELOPE_TAG_KEY) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "envelope `{}` must be a string, found {}",
                    ENVELOPE_TAG_KEY,
                    kind_name(&other)
                )))
            }
        };
        let payload = record.remove(T::PAYLOAD_KEY).unwrap_or(Value::Null);
        Self::decode(&tag, payload).map_err(D::Error::custom)
    }
}

impl Envelope<Matcher> {
    /// Run the wrapped matcher. An absent matcher passes.
    ///
    /// # Errors
    ///
    /// See [`Matcher::cmp`].
    pub fn cmp<A: Serialize + ?Sized>(&self, actual: &A) -> Result<()> {
        match &self.0 {
            Some(matcher) => matcher.cmp(actual),
            None => Ok(()),
        }
    }
}

impl Overlay for Envelope<OverlayFn> {
    fn eval(&self, items: &[Value]) -> Result<()> {
        match &self.0 {
            Some(f) => f.eval(items),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_encodes_as_empty_record() {
        let env = MatcherEnvelope::empty();
        assert_eq!(serde_json::to_value(&env).unwrap(), json!({}));
        let env = OverlayEnvelope::empty();
        assert_eq!(serde_json::to_string(&env).unwrap(), "{}");
    }

    #[test]
    fn test_empty_record_decodes_as_absent() {
        let env: MatcherEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(env.is_empty());
        assert!(env.cmp(&json!({"anything": 1})).is_ok());
    }

    #[test]
    fn test_null_decodes_as_absent() {
        let env: OverlayEnvelope = serde_json::from_value(Value::Null).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn test_unknown_tag_decodes_as_absent() {
        let env: OverlayEnvelope =
            serde_json::from_value(json!({"key": "jacl-from-the-future", "fn": {"x": 1}}))
                .unwrap();
        assert!(env.is_empty());
        assert!(env.eval(&[json!("a")]).is_ok());
    }

    #[test]
    fn test_overlay_envelope_wire_shape() {
        let env = OverlayEnvelope::new(OverlayFn::size_is(2));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"key": "jacl-sizeis", "fn": {"size": 2}})
        );
    }

    #[test]
    fn test_known_tag_missing_payload_uses_defaults() {
        let env: OverlayEnvelope = serde_json::from_value(json!({"key": "jacl-notexists"})).unwrap();
        assert_eq!(env.get(), Some(&OverlayFn::not_exists(Vec::<String>::new())));
    }

    #[test]
    fn test_known_tag_malformed_payload_is_error() {
        let res: std::result::Result<OverlayEnvelope, _> =
            serde_json::from_value(json!({"key": "jacl-sizeis", "fn": {"size": "two"}}));
        assert!(res.is_err());
    }

    #[test]
    fn test_non_string_tag_is_error() {
        let res: std::result::Result<OverlayEnvelope, _> =
            serde_json::from_value(json!({"key": 7}));
        assert!(res.is_err());
    }

    #[test]
    fn test_decoder_tables_cover_every_tag() {
        let overlay_tags: Vec<&str> = OverlayFn::DECODERS.iter().map(|(t, _)| *t).collect();
        for f in [
            OverlayFn::key_of(["a"]),
            OverlayFn::not_exists(["a"]),
            OverlayFn::size_is(1),
        ] {
            assert!(overlay_tags.contains(&f.tag()));
        }
        assert_eq!(Matcher::DECODERS.len(), 3);
    }
}

//! Canonical schema constants for structured logging and persisted envelopes
//!
//! These constants ensure consistency across logging, error reporting and
//! the serialized form of matchers.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_TAG: &str = "tag";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MESSAGE: &str = "err.message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Envelope wire keys. Both are omitted from the encoded record when empty.
pub const ENVELOPE_TAG_KEY: &str = "key";
pub const ENVELOPE_MATCHER_KEY: &str = "cmper";
pub const ENVELOPE_OVERLAY_KEY: &str = "fn";

// Matcher discriminant tags
pub const TAG_NIL_MATCHER: &str = "jacl-nilcmp";
pub const TAG_SINGLE_MATCHER: &str = "jacl-singlecmp";
pub const TAG_COLLECTION_MATCHER: &str = "jacl-slicecmp";

// Overlay function discriminant tags
pub const TAG_KEY_OF: &str = "jacl-key";
pub const TAG_NOT_EXISTS: &str = "jacl-notexists";
pub const TAG_SIZE_IS: &str = "jacl-sizeis";

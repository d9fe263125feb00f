//! Core types shared across jacl facilities
//!
//! This crate provides the canonical constants used by both the comparison
//! engine and its logging facility:
//!
//! - **Log schema**: canonical field keys and event names
//! - **Envelope schema**: wire keys and discriminant tags for persisted matchers

pub mod schema;

//! Structured logging facility for jacl
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use jacl_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! The filter honours `RUST_LOG`; without it, `Development` logs `jacl=debug`
//! and `Production` logs `jacl=info` as JSON.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use jacl_core_types::schema;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

//! Diagnostic system for IDL and generation errors.
//!
//! Every user-facing failure carries:
//! - an error code for searchability (`shimc explain E1001`)
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional notes
//!
//! Diagnostics are plain data. Rendering is the job of an emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{expected_identifier, unexpected_token, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;

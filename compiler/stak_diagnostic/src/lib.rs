//! Diagnostic system for Stak error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability (`stak explain E2001`)
//! - A message saying what went wrong
//! - Labeled spans saying where
//! - Notes and suggestions saying why, and how to fix it

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;

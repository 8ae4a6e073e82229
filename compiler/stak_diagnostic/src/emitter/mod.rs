//! Diagnostic Emitters
//!
//! Terminal output is the only format: colored, human-readable text with
//! a source snippet when the emitter knows the file contents.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the closing `aborting due to ...` line; nothing for zero errors.
    fn emit_summary(&mut self, error_count: usize);
}

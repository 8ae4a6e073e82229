//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With a source attached (`with_source`), each label is rendered as
//! `path:line:col` followed by the offending line and a caret underline.
//! Without one, labels fall back to raw byte spans.

use std::io::{self, Write};

use stak_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always or never)"
            )),
        }
    }
}

/// Source text a diagnostic's spans point into.
struct SourceContext {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file the diagnostics refer to.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceContext {
            path: path.into(),
            text,
            lines,
        });
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    fn write_label(&mut self, label: &Label) {
        let Some(source) = self.source.take() else {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, Self::label_color(label));
            let _ = writeln!(self.writer);
            return;
        };

        self.write_snippet(&source, label);
        self.source = Some(source);
    }

    fn write_snippet(&mut self, source: &SourceContext, label: &Label) {
        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let text = source.lines.line_text(&source.text, line);
        let gutter = " ".repeat(line.to_string().len());

        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(
            self.writer,
            "{gutter}{marker} {}:{line}:{col}",
            source.path
        );
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {text}");

        let underline = caret_width(text, col, label.span);
        let pad = " ".repeat(col.saturating_sub(1) as usize);
        let glyph = if label.is_primary { "^" } else { "-" };
        let _ = write!(self.writer, "{gutter} | {pad}");
        self.write_colored(&glyph.repeat(underline), Self::label_color(label));
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, Self::label_color(label));
        }
        let _ = writeln!(self.writer);
    }
}

/// Number of carets under a span, clipped to the end of its first line.
fn caret_width(line_text: &str, col: u32, span: Span) -> usize {
    let remaining = line_text
        .chars()
        .count()
        .saturating_sub(col.saturating_sub(1) as usize);
    (span.len() as usize).min(remaining).max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(
                self.writer,
                ": aborting due to {error_count} previous errors"
            );
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

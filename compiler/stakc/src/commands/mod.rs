//! Command handlers for the `stak` CLI.
//!
//! Each submodule implements one command. Shared utilities like
//! `read_file` and `emit_diagnostics` live here in the module root.

use std::io::IsTerminal;

use stak_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use stak_diagnostic::Diagnostic;

mod check;
mod debug;
mod explain;
mod fmt;
mod stats;

pub use check::{check_files, check_source, parse_check_args, CheckOptions, CheckSummary};
pub use debug::{lex_file, lex_report, parse_file, parse_report};
pub use explain::{explain_error, explain_text};
pub use fmt::{format_source, parse_fmt_args, run_format, FmtOptions};
pub use stats::{stats_file, stats_report};

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}

pub(crate) fn read_error_message(path: &str, e: &std::io::Error) -> String {
    match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}

/// Resolve `Auto` against `NO_COLOR` and whether stderr is a terminal.
pub(crate) fn stderr_uses_color(mode: ColorMode) -> bool {
    if mode == ColorMode::Auto && std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    mode.should_use_colors(std::io::stderr().is_terminal())
}

/// Print `diagnostics` for one file to stderr with source snippets.
pub(crate) fn emit_diagnostics(
    path: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    color: ColorMode,
) {
    let mode = if stderr_uses_color(color) {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let mut emitter =
        TerminalEmitter::with_color_mode(std::io::stderr(), mode, false).with_source(path, source);
    emitter.emit_all(diagnostics);
    emitter.flush();
}

/// Load a file for a single-file command, printing diagnostics and exiting
/// on failure.
pub(crate) fn load_or_exit(path: &str, source: &str) -> stak_parse::Loaded {
    match stak_parse::load(source) {
        Ok(loaded) => loaded,
        Err(err) => {
            let diag = crate::problem::load_error(&err);
            emit_diagnostics(path, source, &[diag], ColorMode::Auto);
            std::process::exit(1);
        }
    }
}

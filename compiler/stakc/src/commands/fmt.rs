//! The `fmt` command: print a program in canonical form.
//!
//! The canonical form is the IR's own rendering: one rule per line with
//! variables renumbered `$0, $1, ...`, comments dropped, and the
//! initial-state rule moved to the last line.

use stak_diagnostic::emitter::ColorMode;
use stak_diagnostic::Diagnostic;

use super::{emit_diagnostics, read_file};
use crate::problem;

/// Options for `stak fmt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FmtOptions {
    /// Exit with status 1 if the file is not already canonical, instead of
    /// printing it.
    pub check: bool,
}

/// Split `stak fmt` arguments into options and the file path.
pub fn parse_fmt_args(args: &[String]) -> Result<(FmtOptions, String), String> {
    let mut options = FmtOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--check" {
            options.check = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    path.map(|p| (options, p))
        .ok_or_else(|| "missing file path".to_string())
}

/// Canonical rendering of `source`.
pub fn format_source(source: &str) -> Result<String, Diagnostic> {
    let loaded = stak_parse::load(source).map_err(|err| problem::load_error(&err))?;
    Ok(loaded.program.to_string())
}

/// Run `stak fmt`. Returns whether the command succeeded.
pub fn run_format(path: &str, options: FmtOptions) -> bool {
    let source = read_file(path);
    let formatted = match format_source(&source) {
        Ok(formatted) => formatted,
        Err(diag) => {
            emit_diagnostics(path, &source, &[diag], ColorMode::Auto);
            return false;
        }
    };

    if !options.check {
        print!("{formatted}");
        return true;
    }

    if formatted == source {
        true
    } else {
        println!("Would reformat: {path}");
        false
    }
}

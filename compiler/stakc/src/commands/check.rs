//! The `check` command: load Stak files and validate their rules.

use rayon::prelude::*;
use stak_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use stak_diagnostic::{Diagnostic, ErrorCode};
use stak_parse::load;

use super::{emit_diagnostics, read_error_message, stderr_uses_color};
use crate::problem;

/// Options for `stak check`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Report every unbound variable instead of stopping at the first.
    pub all: bool,
    pub color: ColorMode,
}

/// Sizes reported for a program that passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckSummary {
    pub rules: usize,
    pub stacks: usize,
}

/// Split `stak check` arguments into options and file paths.
pub fn parse_check_args(args: &[String]) -> Result<(CheckOptions, Vec<String>), String> {
    let mut options = CheckOptions::default();
    let mut paths = Vec::new();

    for arg in args {
        if arg == "--all" {
            options.all = true;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = mode.parse()?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            paths.push(arg.clone());
        }
    }

    if paths.is_empty() {
        return Err("missing file path".to_string());
    }
    Ok((options, paths))
}

/// Load and validate one program.
///
/// Binding errors are reported for the first ill-formed rule only, unless
/// `options.all` is set. Rules come first, then the initial state.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_source(source: &str, options: &CheckOptions) -> Result<CheckSummary, Vec<Diagnostic>> {
    let loaded = load(source).map_err(|err| vec![problem::load_error(&err)])?;
    let program = &loaded.program;

    let Err(error) = program.check() else {
        return Ok(CheckSummary {
            rules: program.rules().len(),
            stacks: program.stack_count(),
        });
    };

    let unbound = program.unbound_variables();
    let initial = program.unbound_initial_variables();
    let limit = if options.all { usize::MAX } else { 1 };
    let diagnostics: Vec<Diagnostic> = unbound
        .iter()
        .map(|u| problem::unbound_variable(u, loaded.rules.get(u.rule)))
        .chain(
            initial
                .iter()
                .map(|&var| problem::unbound_initial_variable(var, &loaded.initial)),
        )
        .take(limit)
        .collect();

    tracing::debug!(
        rules = unbound.len(),
        initial = initial.len(),
        "unbound variables"
    );
    if diagnostics.is_empty() {
        return Err(vec![
            Diagnostic::error(ErrorCode::E2001).with_message(error.to_string())
        ]);
    }
    Err(diagnostics)
}

/// Outcome for one file, computed in parallel and printed in order.
enum FileReport {
    Ok(CheckSummary),
    Failed {
        source: String,
        diagnostics: Vec<Diagnostic>,
    },
    Unreadable(String),
}

fn check_path(path: &str, options: &CheckOptions) -> FileReport {
    tracing::debug!(path, "checking file");
    match std::fs::read_to_string(path) {
        Ok(source) => match check_source(&source, options) {
            Ok(summary) => FileReport::Ok(summary),
            Err(diagnostics) => FileReport::Failed {
                source,
                diagnostics,
            },
        },
        Err(e) => FileReport::Unreadable(read_error_message(path, &e)),
    }
}

/// Check every file, printing `OK` lines to stdout and diagnostics to
/// stderr. Returns the number of files that failed.
pub fn check_files(paths: &[String], options: &CheckOptions) -> usize {
    let reports: Vec<FileReport> = paths
        .par_iter()
        .map(|path| check_path(path, options))
        .collect();

    let mut failed = 0;
    let mut errors = 0;
    for (path, report) in paths.iter().zip(reports) {
        match report {
            FileReport::Ok(summary) => {
                println!(
                    "OK: {path} ({} rules, {} stacks)",
                    summary.rules, summary.stacks
                );
            }
            FileReport::Failed {
                source,
                diagnostics,
            } => {
                failed += 1;
                errors += diagnostics.len();
                emit_diagnostics(path, &source, &diagnostics, options.color);
            }
            FileReport::Unreadable(message) => {
                failed += 1;
                errors += 1;
                eprintln!("{message}");
            }
        }
    }

    if errors > 0 {
        summarize(errors, options.color);
    }
    failed
}

fn summarize(errors: usize, color: ColorMode) {
    let mode = if stderr_uses_color(color) {
        ColorMode::Always
    } else {
        ColorMode::Never
    };
    let mut emitter = TerminalEmitter::stderr(mode, false);
    emitter.emit_summary(errors);
    emitter.flush();
}

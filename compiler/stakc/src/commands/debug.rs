//! Debug commands: `parse` and `lex` for inspecting the loader.

use std::fmt::Write as _;

use stak_diagnostic::emitter::ColorMode;
use stak_diagnostic::Diagnostic;
use stak_parse::{lex, parse};

use super::{emit_diagnostics, read_file};

/// Token dump of `source`, one token per line.
pub fn lex_report(source: &str) -> Result<String, Diagnostic> {
    let tokens = lex(source).map_err(|err| err.to_diagnostic())?;

    let mut out = String::new();
    let _ = writeln!(out, "{} tokens:", tokens.len());
    for token in &tokens {
        let _ = writeln!(
            out,
            "  {:?} @ {:?} {:?}",
            token.kind,
            token.span,
            token.text(source)
        );
    }
    Ok(out)
}

/// Structure dump of `source`, before initial-state extraction.
pub fn parse_report(source: &str) -> Result<String, Diagnostic> {
    let parsed = parse(source).map_err(|err| err.to_diagnostic())?;
    let program = &parsed.program;

    let mut out = String::new();
    let _ = writeln!(out, "  Rules: {}", program.rules().len());
    let _ = writeln!(out, "  Stacks: {}", program.stack_count());
    let _ = writeln!(out, "  Symbols: {}", program.symbols().len());

    for (i, (rule, src)) in program.rules().iter().zip(&parsed.rules).enumerate() {
        let marker = if rule.is_initial() { " (initial)" } else { "" };
        let _ = writeln!(out);
        let _ = writeln!(out, "rule {i} @ {:?}{marker}", src.span);
        let _ = writeln!(out, "  {}", program.render(rule));
        for (slot, var) in src.variables.iter().enumerate() {
            let _ = writeln!(out, "  ${slot} = ${} @ {:?}", var.name, var.span);
        }
    }
    Ok(out)
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> bool {
    report(path, lex_report)
}

/// Parse a file and display its rules.
pub fn parse_file(path: &str) -> bool {
    report(path, |source| {
        parse_report(source).map(|body| format!("Parse result for '{path}':\n{body}"))
    })
}

fn report(path: &str, run: impl FnOnce(&str) -> Result<String, Diagnostic>) -> bool {
    let source = read_file(path);
    match run(&source) {
        Ok(text) => {
            print!("{text}");
            true
        }
        Err(diag) => {
            emit_diagnostics(path, &source, &[diag], ColorMode::Auto);
            false
        }
    }
}

#[cfg(test)]
mod tests;

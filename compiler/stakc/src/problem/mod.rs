//! Conversion of loader and check failures into diagnostics.
//!
//! Parse errors carry their own diagnostic (`ParseError::to_diagnostic`);
//! the initial-state and binding problems need the rule spans kept by the
//! loader, so they are rendered here.

use stak_diagnostic::{Diagnostic, ErrorCode};
use stak_ir::{InitialStateError, UnboundVariable, VarId};
use stak_parse::{LoadError, RuleSource};

/// Diagnostic for a failed [`stak_parse::load`].
pub fn load_error(error: &LoadError) -> Diagnostic {
    match error {
        LoadError::Parse(parse) => parse.to_diagnostic(),
        LoadError::InitialState { error, spans } => initial_state(error, spans),
    }
}

fn initial_state(error: &InitialStateError, spans: &[stak_ir::Span]) -> Diagnostic {
    match error {
        InitialStateError::Missing => Diagnostic::error(ErrorCode::E2002)
            .with_message(error.to_string())
            .with_note("a program declares its starting stacks with one rule `|:0:| ...`"),
        InitialStateError::Duplicate { .. } => {
            let mut diag = Diagnostic::error(ErrorCode::E2003).with_message(error.to_string());
            for (i, &span) in spans.iter().enumerate() {
                diag = if i == 0 {
                    diag.with_secondary_label(span, "first initial-state rule")
                } else {
                    diag.with_label(span, "another initial-state rule")
                };
            }
            diag.with_suggestion("merge the right-hand sides into a single `|:0:|` rule")
        }
    }
}

/// Diagnostic for one unbound right-hand-side variable.
///
/// `source` locates the offending rule; without it the diagnostic names
/// the variable by index only.
pub fn unbound_variable(problem: &UnboundVariable, source: Option<&RuleSource>) -> Diagnostic {
    let Some(source) = source else {
        return Diagnostic::error(ErrorCode::E2001).with_message(format!(
            "unbound variable `{}` in rule {}",
            problem.variable, problem.rule
        ));
    };

    let name = display_name(source, problem.variable);
    let mut diag = Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("unbound variable `{name}`"));

    if let Some(var) = source.variable(problem.variable) {
        diag = diag.with_label(var.span, "not bound by the left-hand side");
    }

    let binds = match problem.bound {
        None => "this left-hand side binds no variables".to_string(),
        Some(bound) => {
            let names: Vec<String> = (0..=bound.raw())
                .map(|raw| format!("`{}`", display_name(source, VarId::new(raw))))
                .collect();
            format!("this left-hand side binds {}", names.join(", "))
        }
    };

    diag.with_secondary_label(source.lhs_span, binds)
        .with_note("variables are bound only by matching the rule's own left-hand side")
}

/// Diagnostic for a variable left in the initial state.
///
/// `source` is the initial-state rule the loader removed from the rule list.
pub fn unbound_initial_variable(variable: VarId, source: &RuleSource) -> Diagnostic {
    let name = display_name(source, variable);
    let mut diag = Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("unbound variable `{name}` in the initial state"));

    if let Some(var) = source.variable(variable) {
        diag = diag.with_label(var.span, "nothing binds this variable");
    }

    diag.with_secondary_label(source.lhs_span, "the initial-state rule binds no variables")
        .with_suggestion(format!("replace `{name}` with a literal"))
}

/// `$name` as written in source, or the canonical `$N` as a fallback.
fn display_name(source: &RuleSource, var: VarId) -> String {
    match source.variable(var) {
        Some(v) => format!("${}", v.name),
        None => var.to_string(),
    }
}

//! The `stats` command: the program's static queries.

use std::fmt::Write as _;

use stak_ir::Program;

use super::{load_or_exit, read_file};

/// Human-readable summary of the static queries.
///
/// ```text
/// rules: 1
/// initial items: 1
/// stacks: 2
/// variable slots: 1
/// stack arities:
///   :0:  0
///   :1:  2
/// ```
///
/// `variable slots` is only a bound once the binding check passes; for a
/// program that fails it, the line says so.
pub fn stats_report(program: &Program) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "rules: {}", program.rules().len());
    let _ = writeln!(out, "initial items: {}", program.initial_state().len());
    let _ = writeln!(out, "stacks: {}", program.stack_count());
    let slots = program.variable_count();
    if program.check().is_ok() {
        let _ = writeln!(out, "variable slots: {slots}");
    } else {
        let _ = writeln!(
            out,
            "variable slots: {slots} (unreliable: program has unbound variables)"
        );
    }
    let _ = writeln!(out, "stack arities:");

    let arities = program.stack_arities();
    let labels: Vec<String> = program
        .stacks()
        .iter()
        .map(|(_, name)| format!(":{name}:"))
        .collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    for (label, arity) in labels.iter().zip(arities) {
        let _ = writeln!(out, "  {label:<width$}  {arity}");
    }
    out
}

/// Run `stak stats`.
pub fn stats_file(path: &str) {
    let source = read_file(path);
    let loaded = load_or_exit(path, &source);
    print!("{}", stats_report(&loaded.program));
}

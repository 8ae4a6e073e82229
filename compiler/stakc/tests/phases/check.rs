//! Binding check over whole files, through the driver's diagnostics.

use pretty_assertions::assert_eq;
use stak_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use stak_diagnostic::ErrorCode;
use stak_ir::{UnboundVariable, VarId};
use stakc::commands::{check_source, CheckOptions, CheckSummary};

use crate::common::{load_ok, DOUBLE, LOOKUP, UNBOUND};

#[test]
fn well_formed_fixtures_pass() {
    let options = CheckOptions::default();
    assert_eq!(
        check_source(DOUBLE, &options),
        Ok(CheckSummary { rules: 1, stacks: 2 })
    );
    assert_eq!(
        check_source(LOOKUP, &options),
        Ok(CheckSummary { rules: 2, stacks: 6 })
    );
}

#[test]
fn collecting_mode_finds_every_rule() {
    let loaded = load_ok(UNBOUND);
    assert!(loaded.program.check().is_err());
    assert_eq!(
        loaded.program.unbound_variables(),
        vec![
            UnboundVariable {
                rule: 0,
                variable: VarId::new(1),
                bound: Some(VarId::new(0)),
            },
            UnboundVariable {
                rule: 1,
                variable: VarId::new(2),
                bound: Some(VarId::new(1)),
            },
        ]
    );
}

#[test]
fn rendered_diagnostic_points_at_variable() {
    let options = CheckOptions {
        all: true,
        color: ColorMode::Never,
    };
    let diagnostics = check_source(UNBOUND, &options).unwrap_err();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.code == ErrorCode::E2001));

    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("unbound.stak", UNBOUND);
    emitter.emit(&diagnostics[0]);
    let text = String::from_utf8(emitter.into_inner()).unwrap();

    assert_eq!(
        text.lines().take(5).collect::<Vec<_>>(),
        vec![
            "error[E2001]: unbound variable `$y`",
            " --> unbound.stak:1:20",
            "  |",
            "1 | |:in: $x| :out: $x $y",
            "  |                    ^^ not bound by the left-hand side",
        ]
    );
}

#[test]
fn initial_state_variable_fails_check() {
    let source = "|:0:| :1: $x\n|:1: a| :2: a\n";
    let diagnostics = check_source(source, &CheckOptions::default()).unwrap_err();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E2001);
    assert_eq!(
        diagnostics[0].message,
        "unbound variable `$x` in the initial state"
    );
}

#[test]
fn initial_state_reported_after_rules() {
    let source = "|:0:| :1: $x $y $x\n|:1: $a| :2: $b\n";
    let options = CheckOptions {
        all: true,
        ..CheckOptions::default()
    };
    let messages: Vec<String> = check_source(source, &options)
        .unwrap_err()
        .into_iter()
        .map(|d| d.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "unbound variable `$b`",
            "unbound variable `$x` in the initial state",
            "unbound variable `$y` in the initial state",
        ]
    );
}

#[test]
fn second_failure_names_its_variable() {
    let options = CheckOptions {
        all: true,
        ..CheckOptions::default()
    };
    let diagnostics = check_source(UNBOUND, &options).unwrap_err();
    assert_eq!(diagnostics[1].message, "unbound variable `$c`");
}

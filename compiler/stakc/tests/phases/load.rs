//! Loader tests over whole files.

use pretty_assertions::assert_eq;
use stak_ir::{InitialStateError, StackId, TupleItem};
use stak_parse::LoadError;

use crate::common::{load_ok, stack, DOUBLE, LOOKUP};

#[test]
fn end_to_end_double() {
    let parsed = stak_parse::parse(DOUBLE).unwrap();
    let rules = parsed.program.rules();
    assert_eq!(rules.len(), 2);
    assert!(rules[0].is_initial());
    assert!(!rules[1].is_initial());

    let loaded = load_ok(DOUBLE);
    let program = &loaded.program;
    assert_eq!(program.rules().len(), 1);

    let initial = program.initial_state();
    assert_eq!(initial.len(), 1);
    assert_eq!(program.stacks().lookup(initial[0].stack), "1");
    assert_eq!(
        initial[0]
            .tuple
            .items()
            .iter()
            .map(|item| match item {
                TupleItem::Literal(s) => program.symbols().lookup(*s).to_string(),
                TupleItem::Variable(v) => v.to_string(),
            })
            .collect::<Vec<_>>(),
        vec!["a"]
    );

    assert_eq!(program.stack_arity(stack(program, "1")), 2);
    assert_eq!(program.variable_count(), 1);
    assert!(program.check().is_ok());
}

#[test]
fn initial_state_spans_multiple_lines() {
    let loaded = load_ok(LOOKUP);
    assert_eq!(loaded.program.initial_state().len(), 4);
    assert!(LOOKUP[loaded.initial.span.to_range()].starts_with("|:0:|"));
    assert!(LOOKUP[loaded.initial.span.to_range()].ends_with(":pending: x"));
}

#[test]
fn keep_flag_survives_loading() {
    let loaded = load_ok(LOOKUP);
    let first = &loaded.program.rules()[0];
    let keeps: Vec<bool> = first.lhs.iter().map(|p| p.keep).collect();
    assert_eq!(keeps, vec![false, true]);
}

#[test]
fn reserved_stack_is_always_first() {
    let loaded = load_ok(LOOKUP);
    assert_eq!(loaded.program.stacks().get("0"), Some(StackId::INITIAL));
}

#[test]
fn missing_and_duplicate_initial_state() {
    let missing = stak_parse::load("|:a: x| :b: x\n").unwrap_err();
    assert!(matches!(
        missing,
        LoadError::InitialState {
            error: InitialStateError::Missing,
            ..
        }
    ));

    let duplicate = stak_parse::load(&format!("{DOUBLE}|:0:| :1: b\n")).unwrap_err();
    let LoadError::InitialState { error, spans } = duplicate else {
        panic!("expected an initial-state error");
    };
    assert_eq!(error, InitialStateError::Duplicate { rules: vec![0, 2] });
    assert_eq!(spans.len(), 2);
}

use super::*;
use pretty_assertions::assert_eq;
use stak_ir::{StackId, TupleItem};

fn load_ok(source: &str) -> Loaded {
    match load(source) {
        Ok(loaded) => loaded,
        Err(err) => panic!("load failed for {source:?}: {err}"),
    }
}

#[test]
fn test_initial_state_extracted() {
    let loaded = load_ok("|:0:| :1: a\n|:1: $0| :1: $0 $0\n");
    let program = &loaded.program;

    assert_eq!(program.rules().len(), 1);
    assert_eq!(loaded.rules.len(), 1);
    assert_eq!(program.initial_state().len(), 1);

    let item = &program.initial_state()[0];
    assert_eq!(program.stacks().lookup(item.stack), "1");
    let Some(&TupleItem::Literal(first)) = item.tuple.items().first() else {
        panic!("expected a literal initial item");
    };
    assert_eq!(program.symbols().lookup(first), "a");

    let one = program.stacks().get("1").unwrap_or(StackId::INITIAL);
    assert_eq!(program.stack_arity(one), 2);
    assert_eq!(program.variable_count(), 1);
    assert_eq!(program.check(), Ok(()));
}

#[test]
fn test_spans_follow_their_rules() {
    let source = "|:a: x| :b: x\n|:0:| :a: x\n|:b: x| :c: x\n";
    let loaded = load_ok(source);

    let texts: Vec<&str> = loaded
        .rules
        .iter()
        .map(|r| &source[r.span.to_range()])
        .collect();
    assert_eq!(texts, vec!["|:a: x| :b: x", "|:b: x| :c: x"]);
    assert_eq!(&source[loaded.initial.span.to_range()], "|:0:| :a: x");
}

#[test]
fn test_initial_state_order_preserved() {
    let loaded = load_ok("|:0:| :s: c :t: a :s: b");
    let program = &loaded.program;
    let rendered: Vec<String> = program
        .initial_state()
        .iter()
        .map(|p| program.render(p).to_string())
        .collect();
    assert_eq!(rendered, vec![":s: c", ":t: a", ":s: b"]);
}

#[test]
fn test_initial_state_variables_survive_for_check() {
    let source = "|:0:| :1: $x\n|:1: a| :2: a\n";
    let loaded = load_ok(source);
    let program = &loaded.program;

    assert_eq!(
        program.initial_state()[0].tuple.items(),
        &[TupleItem::Variable(VarId::new(0))]
    );
    assert_eq!(program.check(), Err(stak_ir::CheckError::UnboundVariable));
    assert_eq!(program.unbound_initial_variables(), vec![VarId::new(0)]);

    let x = loaded.initial.variable(VarId::new(0));
    assert_eq!(x.map(|v| v.name.as_str()), Some("x"));
    assert_eq!(x.map(|v| &source[v.span.to_range()]), Some("$x"));
}

#[test]
fn test_missing_initial_state() {
    let err = load("|:a: x| :b: x").err();
    assert_eq!(
        err,
        Some(LoadError::InitialState {
            error: InitialStateError::Missing,
            spans: Vec::new(),
        })
    );
}

#[test]
fn test_initial_shape_is_exact() {
    // `:0:` with a tuple, or with a second LHS item, is an ordinary rule.
    let err = load("|:0: a| :1: b\n|:0: :1:| :1: b").err();
    assert!(matches!(
        err,
        Some(LoadError::InitialState {
            error: InitialStateError::Missing,
            ..
        })
    ));
}

#[test]
fn test_duplicate_initial_state() {
    let source = "|:0:| :a: x\n|:a: x| :b: x\n|:0:| :b: y\n";
    let err = load(source).err();
    assert_eq!(
        err,
        Some(LoadError::InitialState {
            error: InitialStateError::Duplicate { rules: vec![0, 2] },
            spans: vec![Span::new(0, 11), Span::new(26, 37)],
        })
    );
}

#[test]
fn test_parse_errors_pass_through() {
    let err = load("|:0:| :a: x?").err();
    assert!(matches!(err, Some(LoadError::Parse(_))));
}

#[test]
fn test_render_reparses_to_itself() {
    let source = "\
# a small program
|:in: $head $tail :seen: $head?| :out: $head :in: $tail
|:0:| :in: a b :in: c d
|:out: $x| :done: $x
";
    let first = load_ok(source).program.to_string();
    let second = load_ok(&first).program.to_string();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "|:in: $0 $1 :seen: $0?| :out: $0 :in: $1\n\
         |:out: $0| :done: $0\n\
         |:0:| :in: a b :in: c d\n"
    );
}

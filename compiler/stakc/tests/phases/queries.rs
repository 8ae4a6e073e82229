//! Static queries over loaded programs.

use pretty_assertions::assert_eq;

use crate::common::{load_ok, stack, LOOKUP};

#[test]
fn arity_is_max_over_every_occurrence() {
    let loaded = load_ok("|:1: $0| :2: $0 a\n|:0:|\n");
    let program = &loaded.program;
    assert_eq!(program.stack_arity(stack(program, "1")), 1);
    assert_eq!(program.stack_arity(stack(program, "2")), 2);
}

#[test]
fn arity_counts_initial_state() {
    let loaded = load_ok("|:s: $x| :t: $x\n|:0:| :s: a b c\n");
    let program = &loaded.program;
    assert_eq!(program.stack_arity(stack(program, "s")), 3);
    assert_eq!(program.stack_arity(stack(program, "t")), 1);
}

#[test]
fn arities_agree_with_single_queries() {
    let loaded = load_ok(LOOKUP);
    let program = &loaded.program;
    let all = program.stack_arities();
    for (id, _) in program.stacks().iter() {
        assert_eq!(all[id.index()], program.stack_arity(id));
    }
    assert_eq!(all[stack(program, "env").index()], 2);
    assert_eq!(all[stack(program, "query").index()], 1);
}

#[test]
fn variable_count_is_widest_lhs() {
    assert_eq!(load_ok("|:0:| :a: x\n").program.variable_count(), 0);
    assert_eq!(load_ok(LOOKUP).program.variable_count(), 2);
    assert_eq!(
        load_ok("|:a: $p| :b: $p\n|:b: $p $q $r| :c: $r\n|:0:|\n")
            .program
            .variable_count(),
        3
    );
}

#[test]
fn stack_count_includes_reserved_stack() {
    assert_eq!(load_ok("|:0:|\n").program.stack_count(), 1);
    assert_eq!(load_ok("|:0:| :a: x\n").program.stack_count(), 2);
}

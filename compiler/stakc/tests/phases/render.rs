//! Canonical rendering and the render/parse fixed point.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::{load_ok, DOUBLE, LOOKUP, UNBOUND};

fn canonical(source: &str) -> String {
    load_ok(source).program.to_string()
}

#[test]
fn fixtures_render_canonically() {
    assert_eq!(canonical(DOUBLE), "|:1: $0| :1: $0 $0\n|:0:| :1: a\n");
    assert_eq!(
        canonical(LOOKUP),
        "|:query: $0 :env: $0 $1?| :answer: $0 $1\n\
         |:answer: $0 $1 :pending: $0| :done: $1\n\
         |:0:| :env: x one :env: y two :query: x :pending: x\n"
    );
}

#[test]
fn unbound_programs_still_render() {
    assert_eq!(
        canonical(UNBOUND),
        "|:in: $0| :out: $0 $1\n|:out: $0 $1| :in: $2\n|:0:| :in: start\n"
    );
}

#[test]
fn fixtures_are_fixed_points() {
    for source in [DOUBLE, LOOKUP, UNBOUND] {
        let once = canonical(source);
        assert_eq!(canonical(&once), once);
    }
}

#[test]
fn rendering_is_deterministic() {
    let loaded = load_ok(LOOKUP);
    assert_eq!(loaded.program.to_string(), loaded.program.to_string());
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["a", "b", "0", "x-1"]).prop_map(str::to_string),
        prop::sample::select(vec!["$p", "$q", "$r", "$0"]).prop_map(str::to_string),
    ]
}

fn item(keep_allowed: bool) -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["s", "t", "u"]),
        prop::collection::vec(atom(), 0..4),
        any::<bool>(),
    )
        .prop_map(move |(stack, atoms, keep)| {
            let mut text = format!(":{stack}:");
            for atom in atoms {
                text.push(' ');
                text.push_str(&atom);
            }
            if keep && keep_allowed {
                text.push('?');
            }
            text
        })
}

fn rule() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(item(true), 1..3),
        prop::collection::vec(item(false), 0..3),
    )
        .prop_map(|(lhs, rhs)| format!("|{}|\n  {}", lhs.join(" "), rhs.join("\n  ")))
}

fn program_source() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(rule(), 0..5),
        prop::collection::vec(item(false), 0..4),
        0usize..6,
    )
        .prop_map(|(rules, initial, at)| {
            let initial = format!("|:0:| {}", initial.join(" "));
            let at = at.min(rules.len());
            let mut lines = rules;
            lines.insert(at, initial);
            lines.join("\n# separator\n")
        })
}

proptest! {
    #[test]
    fn render_parse_render_is_a_fixed_point(source in program_source()) {
        let once = canonical(&source);
        let twice = canonical(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.ends_with('\n'));
        prop_assert_eq!(
            once.lines().count(),
            load_ok(&source).program.rules().len() + 1
        );
    }
}

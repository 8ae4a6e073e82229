use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lex_report() {
    assert_eq!(
        lex_report("|:a:| # c").unwrap_or_default(),
        "6 tokens:\n\
         \x20 Bar @ 0..1 \"|\"\n\
         \x20 Colon @ 1..2 \":\"\n\
         \x20 Word @ 2..3 \"a\"\n\
         \x20 Colon @ 3..4 \":\"\n\
         \x20 Bar @ 4..5 \"|\"\n\
         \x20 Eof @ 9..9 \"\"\n"
    );
}

#[test]
fn test_lex_report_error() {
    let err = lex_report("$").err();
    assert_eq!(err.map(|d| d.code), Some(stak_diagnostic::ErrorCode::E0001));
}

#[test]
fn test_parse_report_keeps_initial_rule_and_names() {
    let report = parse_report("|:a: $x| :b: $x\n|:0:| :a: k\n").unwrap_or_default();
    assert_eq!(
        report,
        "  Rules: 2\n\
         \x20 Stacks: 3\n\
         \x20 Symbols: 1\n\
         \n\
         rule 0 @ 0..15\n\
         \x20 |:a: $0| :b: $0\n\
         \x20 $0 = $x @ 5..7\n\
         \n\
         rule 1 @ 16..27 (initial)\n\
         \x20 |:0:| :a: k\n"
    );
}

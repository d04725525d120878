use parsekit::{rule, rule_from_parts, GrammarErrorKind, Map, Part, Rule};
use pretty_assertions::assert_eq;

fn names() -> Map<String, &'static str> {
  ["a", "b", "c", "d"].into_iter()
    .map(|name| (name.to_owned(), name))
    .collect()
}

#[test]
fn canonical_grammars_round_trip_through_the_printer() {
  let sources = [
    "a",
    "a b",
    "a | b",
    "a b | c",
    "a+ b* c?",
    "(a | b)+",
    "((a | b)+)+",
    "(a b) c",
    "a () b",
    "a (b | c) d",
    "a | (b | c)",
    "a b c d",
    "(a | b) (c | d)*",
  ];

  let names = names();
  for source in sources {
    let tree = rule(source, &names).unwrap();
    assert_eq!(tree.to_grammar_string(), source, "grammar: {:?}", source);
  }
}

#[test]
fn empty_segments_survive_compilation_and_printing() {
  let tree = rule("a | ", &names()).unwrap();
  assert_eq!(tree, Rule::Alt(vec![Rule::Ref("a"), Rule::Empty]));
  assert_eq!(tree.to_grammar_string(), "a | ");
}

#[test]
fn handles_flow_through_unchanged() {
  // any cloneable handle type works, not just strings
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  struct Sym(u32);

  let names = [("x".to_owned(), Sym(7)), ("y".to_owned(), Sym(9))]
    .into_iter()
    .collect::<Map<_, _>>();

  let tree = rule("x y+", &names).unwrap();
  assert_eq!(tree, Rule::Seq(vec![
    Rule::Ref(Sym(7)),
    Rule::More(Box::new(Rule::Ref(Sym(9)))),
  ]));
}

#[test]
fn interleaved_parts_splice_resolved_symbols() {
  let tree = rule_from_parts(&[
    Part::Sym("A"),
    Part::Text("("),
    Part::Sym("X"),
    Part::Text(" | "),
    Part::Sym("Y"),
    Part::Text(")+"),
  ]).unwrap();

  assert_eq!(tree, Rule::Seq(vec![
    Rule::Ref("A"),
    Rule::More(Box::new(Rule::Alt(vec![Rule::Ref("X"), Rule::Ref("Y")]))),
  ]));
  assert_eq!(tree.to_grammar_string(), "A (X | Y)+");
}

#[test]
fn parts_share_one_grouping_scope() {
  // a paren opened in one fragment closes in a later one
  let tree = rule_from_parts::<&str>(&[
    Part::Text("("),
    Part::Sym("X"),
    Part::Text(") *"),
  ]).unwrap();

  assert_eq!(tree, Rule::Repeat(Box::new(Rule::Ref("X"))));
}

#[test]
fn structural_errors_carry_their_kind() {
  let names = names();

  let err = rule("a (", &names).unwrap_err();
  assert_eq!(err.kind, GrammarErrorKind::UnbalancedParen);

  let err = rule("a )", &names).unwrap_err();
  assert_eq!(err.kind, GrammarErrorKind::UnbalancedParen);

  let err = rule("+ a", &names).unwrap_err();
  assert_eq!(err.kind, GrammarErrorKind::DanglingOperator);

  let err = rule("a nosuch", &names).unwrap_err();
  assert_eq!(err.kind, GrammarErrorKind::NameNotFound);
  assert_eq!(err.span, (2, 8));

  let err = rule_from_parts::<&str>(&[Part::Text("q")]).unwrap_err();
  assert_eq!(err.kind, GrammarErrorKind::NameNotFound);
}

#[test]
fn unresolved_names_inside_unreached_segments_still_fail() {
  // resolution is eager but rejection happens during lowering,
  // so a bad name anywhere in the rule is an error
  let err = rule("a | q+", &names()).unwrap_err();
  assert_eq!(err.kind, GrammarErrorKind::NameNotFound);
}

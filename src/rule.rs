use std::fmt;
use itertools::Itertools;

/// A compiled grammar rule. `R` is the caller's symbol handle; the
/// compiler never inspects it beyond cloning it into `Ref` nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule<R> {
  Ref(R),
  Seq(Vec<Rule<R>>),
  Alt(Vec<Rule<R>>),
  /// one or more
  More(Box<Rule<R>>),
  /// zero or more
  Repeat(Box<Rule<R>>),
  /// zero or one
  Opt(Box<Rule<R>>),
  Empty,
}

impl<R: fmt::Display> Rule<R> {
  /// Writes the canonical concrete form of the rule: single spaces
  /// between tokens, parens only where the structure requires them.
  pub fn fmt_grammar(&self, f: &mut impl fmt::Write) -> fmt::Result {
    write!(f, "{}", self)
  }

  pub fn to_grammar_string(&self) -> String {
    let mut buf = String::new();
    self.fmt_grammar(&mut buf).unwrap();
    buf
  }
}

// The Display impl does the actual rendering. The three wrappers mirror
// the grammar's precedence levels, so each node knows whether its
// surroundings force parentheses.

impl<R: fmt::Display> fmt::Display for Rule<R> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Rule::Alt(alts) => write!(f, "{}", alts.iter().map(Segment).format(" | ")),
      Rule::Empty => Ok(()),
      other => write!(f, "{}", Segment(other)),
    }
  }
}

/// one alternation segment
struct Segment<'a, R>(&'a Rule<R>);

impl<R: fmt::Display> fmt::Display for Segment<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.0 {
      Rule::Alt(_) => write!(f, "({})", self.0),
      Rule::Empty => Ok(()),
      Rule::Seq(items) => write!(f, "{}", items.iter().map(Element).format(" ")),
      other => write!(f, "{}", Element(other)),
    }
  }
}

/// one sequence element
struct Element<'a, R>(&'a Rule<R>);

impl<R: fmt::Display> fmt::Display for Element<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.0 {
      Rule::Ref(r) => write!(f, "{}", r),
      Rule::More(inner) => write!(f, "{}+", Operand(inner)),
      Rule::Repeat(inner) => write!(f, "{}*", Operand(inner)),
      Rule::Opt(inner) => write!(f, "{}?", Operand(inner)),
      other => write!(f, "({})", other),
    }
  }
}

/// a quantifier operand
struct Operand<'a, R>(&'a Rule<R>);

impl<R: fmt::Display> fmt::Display for Operand<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.0 {
      Rule::Ref(r) => write!(f, "{}", r),
      other => write!(f, "({})", other),
    }
  }
}

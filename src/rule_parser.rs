use crate::{GrammarError, Map};
use crate::rule::Rule;

mod group;
mod lex;
mod lower;

/// One piece of an interleaved rule declaration: grammar text, or a
/// symbol handle spliced in at that position.
pub enum Part<'a, R> {
  Text(&'a str),
  Sym(R),
}

pub(crate) fn parse<R: Clone>(
  grammar: &str,
  names: &Map<String, R>,
) -> Result<Rule<R>, GrammarError> {
  let mut atoms = vec![];
  lex::tokenize(grammar, &mut atoms);
  lex::resolve(&mut atoms, names);
  lower::lower(&group::build(atoms)?)
}

pub(crate) fn parse_parts<R: Clone>(parts: &[Part<'_, R>]) -> Result<Rule<R>, GrammarError> {
  let mut atoms = vec![];
  for part in parts {
    match part {
      Part::Text(text) => lex::tokenize(text, &mut atoms),
      Part::Sym(sym) => atoms.push(lex::Atom::Sym(sym.clone())),
    }
  }
  lower::lower(&group::build(atoms)?)
}

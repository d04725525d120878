use crate::{GrammarError, GrammarErrorKind};
use crate::rule::Rule;
use super::group::Group;
use super::lex::Atom;

/// Lowers a group tree into the rule tree. A group with a top-level `|`
/// becomes an alternation of its segments (empty segments included);
/// everything else is a sequence with postfix quantifiers bound to the
/// node just before them.
pub(super) fn lower<R: Clone>(group: &[Group<R>]) -> Result<Rule<R>, GrammarError> {
  if group.iter().any(is_alt_separator) {
    let alts = group.split(is_alt_separator)
      .map(lower_seq)
      .collect::<Result<Vec<_>, _>>()?;
    return Ok(Rule::Alt(alts));
  }

  lower_seq(group)
}

fn is_alt_separator<R>(group: &Group<R>) -> bool {
  matches!(group, Group::Leaf(Atom::Op('|', _)))
}

fn lower_seq<R: Clone>(group: &[Group<R>]) -> Result<Rule<R>, GrammarError> {
  let mut items: Vec<Rule<R>> = vec![];

  for g in group {
    match g {
      Group::Leaf(Atom::Sym(sym)) => items.push(Rule::Ref(sym.clone())),
      Group::Leaf(Atom::Name(name, span)) => {
        return Err(GrammarError {
          kind: GrammarErrorKind::NameNotFound,
          message: format!("name {:?} does not resolve to a symbol", name),
          span: *span,
        });
      }
      Group::Leaf(Atom::Op(op @ ('+' | '*' | '?'), span)) => {
        let inner = items.pop().ok_or_else(|| GrammarError {
          kind: GrammarErrorKind::DanglingOperator,
          message: format!("operator {:?} has nothing to apply to", op),
          span: *span,
        })?;
        items.push(match *op {
          '+' => Rule::More(Box::new(inner)),
          '*' => Rule::Repeat(Box::new(inner)),
          _ => Rule::Opt(Box::new(inner)),
        });
      }
      Group::Leaf(Atom::Op(..)) => {
        unreachable!("bars and parens are consumed before lowering");
      }
      Group::Tree(children) => items.push(lower(children)?),
    }
  }

  Ok(match items.len() {
    0 => Rule::Empty,
    1 => items.pop().unwrap(),
    _ => Rule::Seq(items),
  })
}

use crate::{GrammarError, GrammarErrorKind};
use super::lex::{Atom, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Group<R> {
  Leaf(Atom<R>),
  Tree(Vec<Group<R>>),
}

/// Folds the flat atom stream into a tree: every `(` opens a nested
/// child sequence, every `)` closes the innermost one.
pub(super) fn build<R>(atoms: Vec<Atom<R>>) -> Result<Vec<Group<R>>, GrammarError> {
  let mut stack: Vec<(Span, Vec<Group<R>>)> = vec![];
  let mut current = vec![];

  for atom in atoms {
    match atom {
      Atom::Op('(', span) => {
        stack.push((span, std::mem::take(&mut current)));
      }
      Atom::Op(')', span) => match stack.pop() {
        Some((_, mut parent)) => {
          parent.push(Group::Tree(current));
          current = parent;
        }
        None => {
          return Err(GrammarError {
            kind: GrammarErrorKind::UnbalancedParen,
            message: format!("unmatched closing parenthesis"),
            span,
          });
        }
      },
      atom => current.push(Group::Leaf(atom)),
    }
  }

  if let Some((span, _)) = stack.last() {
    return Err(GrammarError {
      kind: GrammarErrorKind::UnbalancedParen,
      message: format!("unclosed parenthesis"),
      span: *span,
    });
  }

  Ok(current)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn atoms(source: &str) -> Vec<Atom<&'static str>> {
    let mut atoms = vec![];
    super::super::lex::tokenize(source, &mut atoms);
    atoms
  }

  // parenthesized shape with leaves rendered by their text
  fn shape(groups: &[Group<&str>]) -> String {
    let mut buf = String::new();
    for (i, group) in groups.iter().enumerate() {
      if i > 0 {
        buf.push(' ');
      }
      match group {
        Group::Leaf(Atom::Name(name, _)) => buf.push_str(name),
        Group::Leaf(Atom::Op(op, _)) => buf.push(*op),
        Group::Leaf(Atom::Sym(sym)) => buf.push_str(sym),
        Group::Tree(children) => {
          buf.push('[');
          buf.push_str(&shape(children));
          buf.push(']');
        }
      }
    }
    buf
  }

  #[test]
  fn nesting_follows_the_parens() {
    let groups = build(atoms("a (b (c | d)+) e")).unwrap();
    assert_eq!(shape(&groups), "a [b [c | d] +] e");
  }

  #[test]
  fn empty_groups_are_kept() {
    let groups = build(atoms("a () b")).unwrap();
    assert_eq!(shape(&groups), "a [] b");
  }

  #[test]
  fn unclosed_paren_is_reported_at_the_opener() {
    let err = build(atoms("a (b (c")).unwrap_err();
    assert_eq!(err.kind, GrammarErrorKind::UnbalancedParen);
    assert_eq!(err.span, (5, 6));
  }

  #[test]
  fn extra_closing_paren_is_reported() {
    let err = build(atoms("a b) c")).unwrap_err();
    assert_eq!(err.kind, GrammarErrorKind::UnbalancedParen);
    assert_eq!(err.span, (3, 4));
  }
}

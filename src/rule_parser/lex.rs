use crate::Map;

pub(super) type Span = (usize, usize);

/// One grammar atom. Spans are byte ranges into the source fragment the
/// atom came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Atom<R> {
  Name(String, Span),
  Op(char, Span),
  Sym(R),
}

fn is_operator(c: char) -> bool {
  matches!(c, '|' | '(' | ')' | '+' | '*' | '?')
}

/// Splits a grammar fragment into atoms: whitespace separates, each
/// operator is its own one-character token, names are maximal runs of
/// everything else.
pub(super) fn tokenize<R>(source: &str, atoms: &mut Vec<Atom<R>>) {
  let mut chars = source.char_indices().peekable();

  while let Some(&(i, c)) = chars.peek() {
    if c.is_whitespace() {
      chars.next();
    } else if is_operator(c) {
      chars.next();
      atoms.push(Atom::Op(c, (i, i + c.len_utf8())));
    } else {
      let mut end = i + c.len_utf8();
      chars.next();
      while let Some(&(j, c)) = chars.peek() {
        if c.is_whitespace() || is_operator(c) {
          break;
        }
        end = j + c.len_utf8();
        chars.next();
      }
      atoms.push(Atom::Name(source[i..end].to_owned(), (i, end)));
    }
  }
}

/// Replaces every name that appears in `names` with its handle. Names
/// without an entry stay put; lowering rejects them if they survive.
pub(super) fn resolve<R: Clone>(atoms: &mut [Atom<R>], names: &Map<String, R>) {
  for atom in atoms {
    if let Atom::Name(name, _) = atom {
      if let Some(sym) = names.get(name.as_str()) {
        *atom = Atom::Sym(sym.clone());
      }
    }
  }
}

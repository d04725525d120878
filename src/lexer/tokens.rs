use crate::Map;
use super::position::{Position, PositionTracker};
use super::{Lexer, MatchError, TerminalId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub content: String,
  pub start: Position,
  pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
  pub terminal: TerminalId,
  pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
  Lexeme(Lexeme),
  Unmatched(Token),
}

/// Everything one lex run produced: per-channel lexemes plus the
/// coalesced runs of input no terminal recognized, both in input order.
/// Channel buckets exist for every registered channel, matched or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput {
  pub channels: Map<String, Vec<Lexeme>>,
  pub failures: Vec<Token>,
}

pub struct Pieces<'lexer, 'input> {
  lexer: &'lexer Lexer,
  input: &'input str,
  pos: usize,
  tracker: PositionTracker,
  modes: Vec<String>,
  unmatched_start: Option<usize>,
  pending: Option<Lexeme>,
  done: bool,
}

impl<'lexer, 'input> Pieces<'lexer, 'input> {
  pub(super) fn new(lexer: &'lexer Lexer, input: &'input str) -> Self {
    Self {
      lexer,
      input,
      pos: 0,
      tracker: PositionTracker::new(),
      modes: vec![],
      unmatched_start: None,
      pending: None,
      done: false,
    }
  }

  // One attempt at the current offset: either a terminal matches here and a
  // piece comes out (possibly the flushed unmatched run, with the lexeme
  // parked in `pending`), or the offset joins the unmatched run.
  fn step(&mut self) -> Result<Option<Piece>, MatchError> {
    let lexer = self.lexer;
    let mode = self.modes.last().map(String::as_str);

    for &ix in &lexer.order {
      let terminal = &lexer.terminals[ix];
      if terminal.mode.as_deref() != mode {
        continue;
      }

      let end = match terminal.matcher.run(self.input, self.pos) {
        Ok(Some(end)) => end,
        Ok(None) => continue,
        Err(violation) => {
          return Err(MatchError {
            terminal: terminal.id,
            at: violation.at,
            message: violation.message,
          });
        }
      };

      let pos = self.pos;
      let unmatched = self.unmatched_start.take()
        .map(|start| self.flush(start, pos));

      if let Some(mode) = &terminal.push_mode {
        self.modes.push(mode.clone());
      }
      if terminal.pop_mode {
        self.modes.pop();
      }

      let content = self.input[self.pos..end].to_owned();
      let (start, token_end) = self.tracker.advance(&content);
      let lexeme = Lexeme {
        terminal: terminal.id,
        token: Token { content, start, end: token_end },
      };
      self.pos = end;

      return Ok(Some(match unmatched {
        Some(token) => {
          self.pending = Some(lexeme);
          Piece::Unmatched(token)
        }
        None => Piece::Lexeme(lexeme),
      }));
    }

    if self.unmatched_start.is_none() {
      self.unmatched_start = Some(self.pos);
    }
    let c = self.input[self.pos..].chars().next().unwrap();
    self.pos += c.len_utf8();

    Ok(None)
  }

  fn flush(&mut self, start: usize, end: usize) -> Token {
    let content = self.input[start..end].to_owned();
    let (start, end) = self.tracker.advance(&content);
    Token { content, start, end }
  }
}

impl Iterator for Pieces<'_, '_> {
  type Item = Result<Piece, MatchError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if let Some(lexeme) = self.pending.take() {
      return Some(Ok(Piece::Lexeme(lexeme)));
    }

    while self.pos < self.input.len() {
      match self.step() {
        Ok(Some(piece)) => return Some(Ok(piece)),
        Ok(None) => {}
        Err(err) => {
          self.done = true;
          return Some(Err(err));
        }
      }
    }

    if let Some(start) = self.unmatched_start.take() {
      let pos = self.pos;
      return Some(Ok(Piece::Unmatched(self.flush(start, pos))));
    }

    self.done = true;
    None
  }
}

use std::fmt;
use crate::Set;

mod build;
mod matcher;
mod position;
mod tokens;

pub use build::TerminalSpec;
pub use matcher::{Matcher, MatchFn, MatcherViolation};
pub use position::Position;
pub use tokens::{LexOutput, Lexeme, Piece, Pieces, Token};

/// An immutable registry of terminals plus the engine that drives them
/// across an input. Construction compiles and priority-sorts the
/// declarations; lexing never mutates the registry.
#[derive(Debug)]
pub struct Lexer {
  /// declaration order; indexed by `TerminalId`
  terminals: Vec<Terminal>,
  /// scan order: priority descending, declaration order within a priority
  order: Vec<usize>,
  channels: Set<String>,
}

#[derive(Debug)]
struct Terminal {
  id: TerminalId,
  matcher: Matcher,
  channel: String,
  priority: i32,
  mode: Option<String>,
  push_mode: Option<String>,
  pop_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalId(u32);

impl TerminalId {
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

#[derive(Default)]
pub(crate) struct TerminalIdGen(u32);

impl TerminalIdGen {
  pub fn gen(&mut self) -> TerminalId {
    let i = self.0;
    self.0 += 1;
    TerminalId(i)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalError {
  pub kind: TerminalErrorKind,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalErrorKind {
  EmptyKeyword,
  BadRegex,
}

impl fmt::Display for TerminalError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl std::error::Error for TerminalError {}

/// A matcher violated its contract mid-run; the lex run is abandoned.
/// `terminal` identifies the declaration whose matcher misbehaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
  pub terminal: TerminalId,
  pub at: usize,
  pub message: String,
}

impl fmt::Display for MatchError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl std::error::Error for MatchError {}

impl Lexer {
  pub fn new(specs: Vec<TerminalSpec>) -> Result<Lexer, TerminalError> {
    build::build(specs)
  }

  pub fn channels(&self) -> impl Iterator<Item = &str> {
    self.channels.iter().map(String::as_str)
  }

  pub fn channel_of(&self, terminal: TerminalId) -> &str {
    &self.terminals[terminal.index()].channel
  }

  pub fn terminal_count(&self) -> usize {
    self.terminals.len()
  }

  /// Streams the partition of `input` piece by piece. After a matcher
  /// contract error the stream yields that error and fuses.
  pub fn pieces<'lexer, 'input>(&'lexer self, input: &'input str) -> Pieces<'lexer, 'input> {
    Pieces::new(self, input)
  }

  /// Runs the whole input, routing lexemes into their channel buckets
  /// and coalescing unrecognized runs into failure tokens.
  pub fn lex(&self, input: &str) -> Result<LexOutput, MatchError> {
    let mut output = LexOutput {
      channels: self.channels.iter()
        .map(|name| (name.clone(), vec![]))
        .collect(),
      failures: vec![],
    };

    for piece in self.pieces(input) {
      match piece? {
        Piece::Lexeme(lexeme) => {
          let channel = self.channel_of(lexeme.terminal);
          output.channels.get_mut(channel).unwrap().push(lexeme);
        }
        Piece::Unmatched(token) => output.failures.push(token),
      }
    }

    Ok(output)
  }
}

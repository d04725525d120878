use std::fmt;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::files::SimpleFile;

pub mod lexer;
pub mod rule;
mod rule_parser;

pub use crate::rule::Rule;
pub use crate::rule_parser::Part;
pub use lexer::{
  LexOutput, Lexeme, Lexer, MatchError, MatcherViolation, Piece, Position,
  TerminalError, TerminalErrorKind, TerminalId, TerminalSpec, Token,
};

pub type Map<K, V> = indexmap::IndexMap<K, V>;
pub type Set<K> = indexmap::IndexSet<K>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
  pub kind: GrammarErrorKind,
  pub message: String,
  pub span: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarErrorKind {
  UnbalancedParen,
  DanglingOperator,
  NameNotFound,
}

impl fmt::Display for GrammarError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{} at {}..{}", self.message, self.span.0, self.span.1)
  }
}

impl std::error::Error for GrammarError {}

/// Compiles a grammar string into a rule tree. Every name that appears
/// in `names` becomes a `Rule::Ref` of its handle; any other name is a
/// `NameNotFound` error.
pub fn rule<R: Clone>(grammar: &str, names: &Map<String, R>) -> Result<Rule<R>, GrammarError> {
  rule_parser::parse(grammar, names)
}

/// Compiles an interleaved declaration: grammar text fragments with
/// already-resolved symbol handles spliced between them.
pub fn rule_from_parts<R: Clone>(parts: &[Part<'_, R>]) -> Result<Rule<R>, GrammarError> {
  rule_parser::parse_parts(parts)
}

pub fn report_error(input: &str, error: &GrammarError) {
  let writer = StandardStream::stderr(ColorChoice::Always);
  let config = term::Config::default();
  let files = SimpleFile::new("", input);

  let diagnostic = Diagnostic::error();
  let diagnostic = match error.kind {
    GrammarErrorKind::UnbalancedParen => {
      diagnostic.with_message("unbalanced parentheses")
    }
    GrammarErrorKind::DanglingOperator => {
      diagnostic.with_message("dangling operator")
    }
    GrammarErrorKind::NameNotFound => {
      diagnostic.with_message("name not found")
    }
  };
  let diagnostic = diagnostic.with_labels(vec![
    Label::primary((), error.span.0..error.span.1).with_message(&error.message)
  ]);

  term::emit(&mut writer.lock(), &config, &files, &diagnostic).unwrap();
}

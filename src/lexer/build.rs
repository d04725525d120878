use regex::Regex;
use crate::Set;
use super::matcher::{Matcher, MatchFn};
use super::{Lexer, Terminal, TerminalError, TerminalErrorKind, TerminalIdGen};

pub(super) const DEFAULT_CHANNEL: &str = "default";

/// Declaration of one terminal: a matcher source plus routing and mode
/// effects. Defaults: channel `"default"`, priority 0, active only while
/// the mode stack is empty, no stack effects.
pub struct TerminalSpec {
  matcher: MatcherSource,
  channel: Option<String>,
  priority: i32,
  mode: Option<String>,
  push_mode: Option<String>,
  pop_mode: bool,
}

enum MatcherSource {
  Keyword(String),
  Pattern(String),
  Predicate(MatchFn),
}

impl TerminalSpec {
  pub fn keyword(kw: impl Into<String>) -> Self {
    Self::with_matcher(MatcherSource::Keyword(kw.into()))
  }

  pub fn regex(source: impl Into<String>) -> Self {
    Self::with_matcher(MatcherSource::Pattern(source.into()))
  }

  pub fn predicate(f: impl Fn(&str, usize) -> Option<usize> + Send + Sync + 'static) -> Self {
    Self::with_matcher(MatcherSource::Predicate(Box::new(f)))
  }

  fn with_matcher(matcher: MatcherSource) -> Self {
    Self {
      matcher,
      channel: None,
      priority: 0,
      mode: None,
      push_mode: None,
      pop_mode: false,
    }
  }

  pub fn channel(mut self, name: impl Into<String>) -> Self {
    self.channel = Some(name.into());
    self
  }

  /// Higher priorities are tried first; equal priorities keep declaration order.
  pub fn priority(mut self, priority: i32) -> Self {
    self.priority = priority;
    self
  }

  pub fn mode(mut self, mode: impl Into<String>) -> Self {
    self.mode = Some(mode.into());
    self
  }

  pub fn push_mode(mut self, mode: impl Into<String>) -> Self {
    self.push_mode = Some(mode.into());
    self
  }

  pub fn pop_mode(mut self) -> Self {
    self.pop_mode = true;
    self
  }
}

pub(super) fn build(specs: Vec<TerminalSpec>) -> Result<Lexer, TerminalError> {
  let mut id_gen = TerminalIdGen::default();
  let mut terminals = Vec::with_capacity(specs.len());

  for spec in specs {
    terminals.push(Terminal {
      id: id_gen.gen(),
      matcher: compile_matcher(spec.matcher)?,
      channel: spec.channel.unwrap_or_else(|| DEFAULT_CHANNEL.to_owned()),
      priority: spec.priority,
      mode: spec.mode,
      push_mode: spec.push_mode,
      pop_mode: spec.pop_mode,
    });
  }

  let channels = terminals.iter()
    .map(|t| t.channel.clone())
    .collect::<Set<_>>();

  let mut order = (0..terminals.len()).collect::<Vec<_>>();
  order.sort_by(|&a, &b| terminals[b].priority.cmp(&terminals[a].priority));

  Ok(Lexer { terminals, order, channels })
}

fn compile_matcher(source: MatcherSource) -> Result<Matcher, TerminalError> {
  match source {
    MatcherSource::Keyword(kw) => {
      if kw.is_empty() {
        return Err(TerminalError {
          kind: TerminalErrorKind::EmptyKeyword,
          message: format!("keyword terminal must not be empty"),
        });
      }
      Ok(Matcher::Keyword(kw))
    }
    MatcherSource::Pattern(source) => {
      let re = Regex::new(&source).map_err(|err| TerminalError {
        kind: TerminalErrorKind::BadRegex,
        message: format!("invalid regex {:?}: {}", source, err),
      })?;
      Ok(Matcher::Pattern(re))
    }
    MatcherSource::Predicate(f) => Ok(Matcher::Predicate(f)),
  }
}

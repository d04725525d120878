use std::fmt;
use regex::Regex;

pub type MatchFn = Box<dyn Fn(&str, usize) -> Option<usize> + Send + Sync>;

/// A contract violation reported by a matcher. The engine attributes it
/// to the terminal that owns the matcher before surfacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherViolation {
  pub at: usize,
  pub message: String,
}

/// A uniform "try to match at this offset" primitive. On success the
/// returned end is strictly past `start`; anything else a matcher reports
/// is a contract violation and aborts the current lex run.
pub enum Matcher {
  Keyword(String),
  Pattern(Regex),
  Predicate(MatchFn),
}

impl Matcher {
  pub fn run(&self, input: &str, start: usize) -> Result<Option<usize>, MatcherViolation> {
    let end = match self {
      Matcher::Keyword(kw) => {
        if input[start..].starts_with(kw.as_str()) {
          Some(start + kw.len())
        } else {
          None
        }
      }
      Matcher::Pattern(re) => {
        // the pattern must match at the offered offset, never later
        re.find_at(input, start)
          .filter(|m| m.start() == start)
          .map(|m| m.end())
      }
      Matcher::Predicate(f) => f(input, start),
    };

    match end {
      Some(end) if end > start && input.is_char_boundary(end) => Ok(Some(end)),
      Some(end) => Err(MatcherViolation {
        at: start,
        message: format!("matcher returned invalid end {} at offset {}", end, start),
      }),
      None => Ok(None),
    }
  }
}

impl fmt::Debug for Matcher {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Matcher::Keyword(kw) => f.debug_tuple("Keyword").field(kw).finish(),
      Matcher::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
      Matcher::Predicate(_) => f.write_str("Predicate"),
    }
  }
}

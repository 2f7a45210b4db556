//! regatta: a small full-match regular-expression engine.
//!
//! Patterns are parsed into a token tree, compiled into an epsilon-NFA with
//! Thompson's construction, and run against inputs by subset simulation.
//! Matching is implicitly anchored: a pattern matches only if it accepts the
//! entire input.
//!
//! The dialect is deliberately restricted: literals, `[...]` classes with
//! ranges, `(...)` grouping, `|` alternation and the `*` `+` `?` `{m,n}`
//! quantifiers. There are no escape sequences, anchors, captures or negated
//! classes.
//!
//! ```
//! use regatta::Regex;
//!
//! let re = Regex::new("a(b|c)*d").unwrap();
//! assert!(re.is_match("abcbcd"));
//! assert!(!re.is_match("abxd"));
//! ```

mod automaton;
mod parser;

pub use automaton::{compile, Nfa, NfaState, StateArena, StateId};
pub use parser::{parse, ParseError, ParseErrorKind, Token};

/// A compiled pattern.
///
/// Parsing and compilation happen once in [`Regex::new`]; matching reuses the
/// compiled automaton. The automaton is immutable after construction, so a
/// `Regex` can serve concurrent matchers:
///
/// ```
/// use regatta::Regex;
/// use std::sync::Arc;
///
/// let re = Arc::new(Regex::new("[a-z]+").unwrap());
/// let handle = {
///     let re = Arc::clone(&re);
///     std::thread::spawn(move || re.is_match("hello"))
/// };
/// assert!(re.is_match("world"));
/// assert!(handle.join().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Regex {
    nfa: Nfa,
}

impl Regex {
    /// Parse and compile `pattern`.
    pub fn new(pattern: &str) -> Result<Self, ParseError> {
        let tokens = parser::parse(pattern)?;
        Ok(Regex {
            nfa: automaton::compile(&tokens),
        })
    }

    /// Returns true iff the pattern matches the entire input.
    pub fn is_match(&self, input: &str) -> bool {
        self.nfa.accepts(input)
    }

    /// Number of NFA states in the compiled pattern.
    pub fn state_count(&self) -> usize {
        self.nfa.state_count()
    }
}

/// One-shot convenience: parse, compile and match in a single call.
///
/// Returns the parse error when `pattern` is malformed; otherwise whether
/// the pattern accepts the entire `input`.
///
/// ```
/// assert!(regatta::matches("[a-c]{2,3}", "bca").unwrap());
/// assert!(!regatta::matches("[a-c]{2,3}", "bcaa").unwrap());
/// assert!(regatta::matches("(abc", "x").is_err());
/// ```
pub fn matches(pattern: &str, input: &str) -> Result<bool, ParseError> {
    Ok(Regex::new(pattern)?.is_match(input))
}

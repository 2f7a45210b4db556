//! Thompson construction: token trees to epsilon-NFAs.
//!
//! Every token compiles to a fragment with exactly one entry and one exit
//! state; fragments compose through epsilon edges only. Compilation is total:
//! any tree the parser produces compiles, and all failure modes live in the
//! parser.

use crate::parser::Token;

use super::arena::{StateArena, StateId};

/// A compiled automaton: the state graph plus its entry and accepting state.
#[derive(Clone, Debug)]
pub struct Nfa {
    pub(crate) arena: StateArena,
    pub(crate) start: StateId,
    pub(crate) terminal: StateId,
}

impl Nfa {
    /// Entry state of the automaton.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Accepting state of the automaton.
    pub fn terminal(&self) -> StateId {
        self.terminal
    }

    /// Number of states in the compiled graph.
    pub fn state_count(&self) -> usize {
        self.arena.len()
    }
}

/// Endpoints of a compiled sub-graph.
#[derive(Clone, Copy)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

/// Compile a parsed pattern into an NFA.
///
/// The top-level token sequence compiles as a concatenation; its entry and
/// exit become the automaton's start and terminal states. An empty sequence
/// (the empty pattern) accepts exactly the empty string.
pub fn compile(tokens: &[Token]) -> Nfa {
    let mut arena = StateArena::with_capacity(16);
    let outer = compile_sequence(tokens, &mut arena);
    arena[outer.entry].is_start = true;
    arena[outer.exit].is_terminal = true;
    Nfa {
        arena,
        start: outer.entry,
        terminal: outer.exit,
    }
}

/// Concatenate a token sequence: each fragment's exit is epsilon-linked to
/// the next fragment's entry.
fn compile_sequence(tokens: &[Token], arena: &mut StateArena) -> Fragment {
    let mut first = match tokens.first() {
        Some(token) => compile_token(token, arena),
        None => {
            let entry = arena.alloc();
            let exit = arena.alloc();
            arena.add_epsilon(entry, exit);
            return Fragment { entry, exit };
        }
    };
    for token in &tokens[1..] {
        let next = compile_token(token, arena);
        arena.add_epsilon(first.exit, next.entry);
        first.exit = next.exit;
    }
    first
}

fn compile_token(token: &Token, arena: &mut StateArena) -> Fragment {
    match token {
        Token::Literal(c) => {
            let entry = arena.alloc();
            let exit = arena.alloc();
            arena.add_transition(entry, *c, exit);
            Fragment { entry, exit }
        }
        Token::Bracket(set) => {
            let entry = arena.alloc();
            let exit = arena.alloc();
            for &c in set {
                arena.add_transition(entry, c, exit);
            }
            Fragment { entry, exit }
        }
        Token::Group(seq) => {
            let entry = arena.alloc();
            let exit = arena.alloc();
            if seq.is_empty() {
                arena.add_epsilon(entry, exit);
            } else {
                let inner = compile_sequence(seq, arena);
                arena.add_epsilon(entry, inner.entry);
                arena.add_epsilon(inner.exit, exit);
            }
            Fragment { entry, exit }
        }
        Token::Or(left, right) => {
            let entry = arena.alloc();
            let exit = arena.alloc();
            let left = compile_sequence(left, arena);
            let right = compile_sequence(right, arena);
            arena.add_epsilon(entry, left.entry);
            arena.add_epsilon(entry, right.entry);
            arena.add_epsilon(left.exit, exit);
            arena.add_epsilon(right.exit, exit);
            Fragment { entry, exit }
        }
        Token::Repeat { min, max, inner } => compile_repeat(*min, *max, inner, arena),
    }
}

/// Expand a quantifier.
///
/// Each written occurrence of the inner token gets a freshly compiled
/// fragment. Sharing one fragment across occurrences would let a later copy
/// loop back into an earlier one and corrupt the language.
fn compile_repeat(min: u32, max: Option<u32>, inner: &Token, arena: &mut StateArena) -> Fragment {
    let entry = arena.alloc();
    let exit = arena.alloc();

    match (min, max) {
        // {0,0} consumes nothing.
        (0, Some(0)) => {
            arena.add_epsilon(entry, exit);
        }
        // Kleene star: loop with a bypass.
        (0, None) => {
            let inner = compile_token(inner, arena);
            arena.add_epsilon(entry, inner.entry);
            arena.add_epsilon(entry, exit);
            arena.add_epsilon(inner.exit, inner.entry);
            arena.add_epsilon(inner.exit, exit);
        }
        // One-or-more: loop without the bypass.
        (1, None) => {
            let inner = compile_token(inner, arena);
            arena.add_epsilon(entry, inner.entry);
            arena.add_epsilon(inner.exit, inner.entry);
            arena.add_epsilon(inner.exit, exit);
        }
        // Optional.
        (0, Some(1)) => {
            let inner = compile_token(inner, arena);
            arena.add_epsilon(entry, inner.entry);
            arena.add_epsilon(entry, exit);
            arena.add_epsilon(inner.exit, exit);
        }
        // General {m,n} / {m,}: m required copies in series, then either a
        // loop (unbounded) or n-m skippable copies.
        (min, max) => {
            let mut cursor = entry;
            for _ in 0..min {
                let copy = compile_token(inner, arena);
                arena.add_epsilon(cursor, copy.entry);
                cursor = copy.exit;
            }
            match max {
                None => {
                    let copy = compile_token(inner, arena);
                    arena.add_epsilon(cursor, copy.entry);
                    arena.add_epsilon(copy.exit, copy.entry);
                    arena.add_epsilon(copy.exit, exit);
                    arena.add_epsilon(cursor, exit);
                }
                Some(max) => {
                    for _ in min..max {
                        let copy = compile_token(inner, arena);
                        arena.add_epsilon(cursor, copy.entry);
                        let join = arena.alloc();
                        arena.add_epsilon(cursor, join);
                        arena.add_epsilon(copy.exit, join);
                        cursor = join;
                    }
                    arena.add_epsilon(cursor, exit);
                }
            }
        }
    }

    Fragment { entry, exit }
}

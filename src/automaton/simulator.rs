//! Subset simulation of compiled automata.
//!
//! Tracks the set of states the NFA could occupy after each input character,
//! closing over epsilon edges between steps. One pass over the input, no
//! backtracking: time is O(states * input length), space O(states).

use super::arena::StateArena;
use super::compiler::Nfa;
use super::sparse_set::{SparseSet, SparseSets};

impl Nfa {
    /// Returns true iff the automaton accepts the entire input.
    ///
    /// The graph is never mutated; all bookkeeping lives in locals, so a
    /// compiled automaton can serve concurrent callers.
    pub fn accepts(&self, input: &str) -> bool {
        let mut sets = SparseSets::new(self.arena.len());
        sets.current.insert(self.start);
        epsilon_closure(&self.arena, &mut sets.current);

        for c in input.chars() {
            sets.next.clear();
            for id in sets.current.iter() {
                if let Some(targets) = self.arena[id].transitions.get(&c) {
                    for &target in targets {
                        sets.next.insert(target);
                    }
                }
            }
            if sets.next.is_empty() {
                return false;
            }
            epsilon_closure(&self.arena, &mut sets.next);
            sets.swap();
        }

        let accepted = sets.current.iter().any(|id| self.arena[id].is_terminal);
        accepted
    }
}

/// Grow `set` to the smallest superset closed under epsilon edges.
///
/// The set doubles as the worklist: members are scanned in insertion order
/// and every newly reachable state is appended. Membership checks stop
/// epsilon cycles from looping.
fn epsilon_closure(arena: &StateArena, set: &mut SparseSet) {
    let mut scan = 0;
    while scan < set.len() {
        let id = set.get(scan);
        for &target in &arena[id].epsilons {
            set.insert(target);
        }
        scan += 1;
    }
}

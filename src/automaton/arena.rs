//! Arena-backed state storage for compiled automata.
//!
//! States reference each other through `StateId`, a plain index into the
//! arena, rather than through pointers. Unbounded quantifiers compile to
//! graphs with back edges; index-based references represent those cycles
//! without reference counting, and the entire graph is released when its
//! arena is dropped.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A state identifier: an index into a [`StateArena`].
///
/// Freely copyable, so cyclic references cost nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StateId(pub(crate) u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the automaton graph.
///
/// Character-consuming edges live in `transitions`; epsilon edges are a
/// separate collection, never a key in the character map. The two flags are
/// set during finalization on the outermost fragment's endpoints only.
#[derive(Clone, Debug, Default)]
pub struct NfaState {
    pub is_start: bool,
    pub is_terminal: bool,
    /// Character-consuming edges: each entry maps a character to the set of
    /// states reachable by consuming it. Target lists are duplicate-free.
    pub transitions: FxHashMap<char, SmallVec<[StateId; 2]>>,
    /// Non-consuming edges, traversed during epsilon closure.
    pub epsilons: SmallVec<[StateId; 4]>,
}

/// Arena owning every state of one compiled automaton.
///
/// States are allocated contiguously and referenced by `StateId`; the arena
/// frees the whole graph at once when dropped. Individual states are never
/// freed early.
#[derive(Clone, Default)]
pub struct StateArena {
    states: Vec<NfaState>,
}

impl std::fmt::Debug for StateArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateArena")
            .field("states_count", &self.states.len())
            .finish()
    }
}

impl StateArena {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a fresh state with no edges, returning its ID.
    pub fn alloc(&mut self) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(NfaState::default());
        id
    }

    /// Add a character-consuming edge `from --on--> to`.
    pub fn add_transition(&mut self, from: StateId, on: char, to: StateId) {
        let targets = self.states[from.index()].transitions.entry(on).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Add an epsilon edge `from --> to`.
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        let epsilons = &mut self.states[from.index()].epsilons;
        if !epsilons.contains(&to) {
            epsilons.push(to);
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::ops::Index<StateId> for StateArena {
    type Output = NfaState;

    #[inline]
    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.index()]
    }
}

impl std::ops::IndexMut<StateId> for StateArena {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut Self::Output {
        &mut self.states[id.index()]
    }
}

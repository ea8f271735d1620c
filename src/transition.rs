//! Explicit-state transition system representation.
//!
//! States live in an arena owned by [`TransitionSystem`] and are addressed by
//! small [`StateId`] handles issued at creation. The initial-state set and
//! the successor relation are keyed by handle, never by name: names are
//! diagnostic labels and may repeat freely.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fmt;

/// A state handle (arena index).
///
/// Handles are issued by [`TransitionSystem::create_state`] and
/// [`TransitionSystem::add_state`] and index into the owning system's arena.
///
/// # Invariants
///
/// - Handles are dense: the `n`-th created state has index `n - 1`.
/// - A handle is only meaningful together with the system that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StateId(u32);

impl StateId {
    /// Creates a handle with the given arena index.
    pub fn new(index: u32) -> Self {
        StateId(index)
    }

    /// Returns the arena index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl From<StateId> for u32 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

/// A single state: a diagnostic name, an initial-state flag, and the set of
/// atomic propositions true in it.
///
/// The proposition set is closed-world: anything not listed is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    initial: bool,
    propositions: BTreeSet<String>,
}

impl State {
    /// Creates a non-initial state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            initial: false,
            propositions: BTreeSet::new(),
        }
    }

    /// Creates a state already marked initial.
    pub fn initial(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            initial: true,
            propositions: BTreeSet::new(),
        }
    }

    /// Adds a proposition, builder-style.
    pub fn with_proposition(mut self, prop: impl Into<String>) -> Self {
        self.propositions.insert(prop.into());
        self
    }

    /// Marks a proposition as true in this state.
    pub fn add_proposition(&mut self, prop: impl Into<String>) {
        self.propositions.insert(prop.into());
    }

    /// Checks whether a proposition is true in this state.
    pub fn has_proposition(&self, prop: &str) -> bool {
        self.propositions.contains(prop)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// The propositions true in this state, in lexicographic order.
    pub fn propositions(&self) -> impl Iterator<Item = &str> {
        self.propositions.iter().map(|s| s.as_str())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.initial {
            write!(f, " (initial)")?;
        }
        if !self.propositions.is_empty() {
            let props: Vec<_> = self.propositions.iter().map(|s| s.as_str()).collect();
            write!(f, " {{{}}}", props.join(", "))?;
        }
        Ok(())
    }
}

/// A finite labeled transition system: a state arena, a designated initial
/// subset, and a successor relation.
///
/// The system is append-only: states and transitions are added during setup
/// and never removed. All mutators take `&mut self`, so the borrow checker
/// enforces that the system is frozen while a checking session borrows it.
#[derive(Debug, Clone)]
pub struct TransitionSystem {
    /// Diagnostic name
    name: String,
    /// State arena; `StateId` indexes into this vector
    states: Vec<State>,
    /// Initial states, in registration order, duplicate-free
    initial: Vec<StateId>,
    /// Successor relation; per-key vectors are in insertion order, duplicate-free
    successors: HashMap<StateId, Vec<StateId>>,
}

impl TransitionSystem {
    /// Creates an empty system with the given diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        TransitionSystem {
            name: name.into(),
            states: Vec::new(),
            initial: Vec::new(),
            successors: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allocates a fresh state and returns its handle.
    pub fn create_state(&mut self, name: impl Into<String>, initial: bool) -> StateId {
        let state = if initial { State::initial(name) } else { State::new(name) };
        self.add_state(state)
    }

    /// Inserts an already-built state, honoring its initial flag.
    pub fn add_state(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len() as u32);
        let initial = state.is_initial();
        self.states.push(state);
        if initial {
            self.initial.push(id);
        }
        id
    }

    /// Promotes a state to initial after creation. Idempotent.
    pub fn set_initial(&mut self, id: StateId) {
        self.states[id.index()].initial = true;
        if !self.initial.contains(&id) {
            self.initial.push(id);
        }
    }

    /// Records a transition `from -> to`. Duplicate edges are ignored.
    ///
    /// The relation storage is a plain adjacency map, independent of the
    /// state arena: endpoints are not validated here. This permissiveness is
    /// intentional; since handles are only issued by this system, an edge
    /// cannot name a state the system does not know about.
    pub fn add_transition(&mut self, from: StateId, to: StateId) {
        let succ = self.successors.entry(from).or_default();
        if !succ.contains(&to) {
            succ.push(to);
        }
    }

    /// Marks a proposition as true in the given state.
    pub fn add_proposition(&mut self, id: StateId, prop: impl Into<String>) {
        self.states[id.index()].add_proposition(prop);
    }

    /// The successors of a state, in insertion order.
    ///
    /// A state with no recorded outgoing transitions yields the empty slice
    /// (a dead end), not an error.
    pub fn post(&self, id: StateId) -> &[StateId] {
        self.successors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }

    /// All states in arena order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// All state handles in arena order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len() as u32).map(StateId)
    }

    /// The initial states, in registration order.
    pub fn initial_states(&self) -> &[StateId] {
        &self.initial
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn num_transitions(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }
}

impl fmt::Display for TransitionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Transition system: {} ===", self.name)?;
        writeln!(f, "States ({}):", self.num_states())?;
        for id in self.state_ids() {
            writeln!(f, "  {}: {}", id, self.state(id))?;
        }
        writeln!(f, "Transitions ({}):", self.num_transitions())?;
        for from in self.state_ids() {
            for &to in self.post(from) {
                writeln!(f, "  {} -> {}", self.state(from).name(), self.state(to).name())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_id() {
        let a = StateId::new(0);
        let b = StateId::new(1);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert!(a < b);
        assert_eq!(a.to_string(), "s0");
    }

    #[test]
    fn test_state_propositions() {
        let s = State::new("p1cs").with_proposition("C1");
        assert!(s.has_proposition("C1"));
        assert!(!s.has_proposition("C2"));
        assert_eq!(s.to_string(), "p1cs {C1}");

        let s = State::initial("free");
        assert!(s.is_initial());
        assert_eq!(s.to_string(), "free (initial)");
    }

    #[test]
    fn test_create_state() {
        let mut ts = TransitionSystem::new("test");
        let a = ts.create_state("a", true);
        let b = ts.create_state("b", false);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(ts.num_states(), 2);
        assert_eq!(ts.initial_states(), &[a]);
        assert!(ts.state(a).is_initial());
        assert!(!ts.state(b).is_initial());
    }

    #[test]
    fn test_add_state_honors_initial_flag() {
        let mut ts = TransitionSystem::new("test");
        let a = ts.add_state(State::initial("a"));
        let b = ts.add_state(State::new("b").with_proposition("p"));

        assert_eq!(ts.initial_states(), &[a]);
        assert!(ts.state(b).has_proposition("p"));
    }

    #[test]
    fn test_set_initial_is_idempotent() {
        let mut ts = TransitionSystem::new("test");
        let a = ts.create_state("a", false);
        let b = ts.create_state("b", true);

        ts.set_initial(a);
        ts.set_initial(a);
        assert_eq!(ts.initial_states(), &[b, a]);
        assert!(ts.state(a).is_initial());
    }

    #[test]
    fn test_same_name_states_stay_distinct() {
        // Names are labels, not identities: two states may share one.
        let mut ts = TransitionSystem::new("test");
        let a = ts.create_state("dup", true);
        let b = ts.create_state("dup", false);

        ts.add_proposition(b, "p");
        assert_ne!(a, b);
        assert!(!ts.state(a).has_proposition("p"));
        assert!(ts.state(b).has_proposition("p"));
    }

    #[test]
    fn test_transitions_ordered_and_deduplicated() {
        let mut ts = TransitionSystem::new("test");
        let a = ts.create_state("a", true);
        let b = ts.create_state("b", false);
        let c = ts.create_state("c", false);

        ts.add_transition(a, c);
        ts.add_transition(a, b);
        ts.add_transition(a, c);

        assert_eq!(ts.post(a), &[c, b]);
        assert_eq!(ts.num_transitions(), 2);
    }

    #[test]
    fn test_post_dead_end_is_empty() {
        let mut ts = TransitionSystem::new("test");
        let a = ts.create_state("a", true);
        assert!(ts.post(a).is_empty());
    }

    #[test]
    fn test_display() {
        let mut ts = TransitionSystem::new("Mutex");
        let free = ts.create_state("free", true);
        let p1 = ts.create_state("p1cs", false);
        ts.add_proposition(p1, "C1");
        ts.add_transition(free, p1);
        ts.add_transition(p1, free);

        let out = ts.to_string();
        println!("{}", out);
        assert!(out.contains("=== Transition system: Mutex ==="));
        assert!(out.contains("s0: free (initial)"));
        assert!(out.contains("s1: p1cs {C1}"));
        assert!(out.contains("free -> p1cs"));
        assert!(out.contains("p1cs -> free"));
    }
}

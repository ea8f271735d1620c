//! Invariant checking over the reachable state space.
//!
//! The checker runs an iterative depth-first traversal from the initial
//! states and evaluates the formula when a state is popped, i.e. once all of
//! its successors have been visited. Exploration halts at the first
//! violation; the DFS stack at that moment is the path from an initial state
//! to the violating state and is returned as the counterexample trace.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::expr::Expr;
use crate::transition::{StateId, TransitionSystem};

/// The outcome of one checking call.
///
/// A failed invariant is a normal return value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The formula holds in every reachable state.
    Holds {
        /// Number of states evaluated during exploration
        explored: usize,
    },
    /// Some reachable state violates the formula.
    Violated {
        /// Path from an initial state to the violating state, inclusive
        trace: Vec<StateId>,
    },
}

impl Verdict {
    pub fn holds(&self) -> bool {
        matches!(self, Verdict::Holds { .. })
    }

    /// The counterexample trace; empty when the invariant holds.
    pub fn trace(&self) -> &[StateId] {
        match self {
            Verdict::Holds { .. } => &[],
            Verdict::Violated { trace } => trace,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Holds { explored } => {
                write!(f, "invariant holds ({} states explored)", explored)
            }
            Verdict::Violated { trace } => {
                write!(f, "invariant violated (trace of {} states)", trace.len())
            }
        }
    }
}

/// A DFS stack frame: the state plus a cursor into its successor slice.
struct Frame {
    id: StateId,
    cursor: usize,
}

/// Explicit-state invariant checker.
///
/// Borrows the transition system for the checker's lifetime; all session
/// state (visited set, DFS stack) is local to each [`check`][Self::check]
/// call, so one checker may be used for any number of formulas and the
/// system may be shared across threads for concurrent checks.
pub struct InvariantChecker<'a> {
    system: &'a TransitionSystem,
}

impl<'a> InvariantChecker<'a> {
    pub fn new(system: &'a TransitionSystem) -> Self {
        InvariantChecker { system }
    }

    /// Checks `expr` as an invariant: does it hold in every state reachable
    /// from the initial states?
    ///
    /// Each reachable state is evaluated exactly once. An empty initial set
    /// yields [`Verdict::Holds`] vacuously. On the first violation the
    /// traversal stops and the current DFS path, ending at the violating
    /// state, is returned as [`Verdict::Violated`].
    pub fn check(&self, expr: &Expr) -> Verdict {
        let mut visited: HashSet<StateId> = HashSet::new();
        let mut explored = 0;

        debug!("checking invariant {} on '{}'", expr, self.system.name());
        debug!("initial states: {}", self.system.initial_states().len());

        for &init in self.system.initial_states() {
            if visited.contains(&init) {
                continue;
            }
            debug!("exploring from initial state {} ({})", init, self.system.state(init).name());
            if let Some(trace) = self.visit(init, expr, &mut visited, &mut explored) {
                return Verdict::Violated { trace };
            }
        }

        Verdict::Holds { explored }
    }

    /// One DFS pass from `start`. Returns the counterexample trace if a
    /// violation is found, `None` if every state reached from here satisfies
    /// the formula.
    ///
    /// Each frame keeps a cursor into its successor slice, so every edge is
    /// inspected once: the visited set only grows, hence the first unvisited
    /// successor is never behind the cursor.
    fn visit(
        &self,
        start: StateId,
        expr: &Expr,
        visited: &mut HashSet<StateId>,
        explored: &mut usize,
    ) -> Option<Vec<StateId>> {
        let mut stack = vec![Frame { id: start, cursor: 0 }];
        visited.insert(start);

        while let Some(frame) = stack.last_mut() {
            let cur = frame.id;
            let successors = self.system.post(cur);

            let mut next = None;
            while frame.cursor < successors.len() {
                let candidate = successors[frame.cursor];
                frame.cursor += 1;
                if !visited.contains(&candidate) {
                    next = Some(candidate);
                    break;
                }
            }

            match next {
                Some(succ) => {
                    debug!("push {} ({})", succ, self.system.state(succ).name());
                    visited.insert(succ);
                    stack.push(Frame { id: succ, cursor: 0 });
                }
                None => {
                    // All successors visited: judge this state now.
                    stack.pop();
                    *explored += 1;
                    let state = self.system.state(cur);
                    let ok = expr.eval(state);
                    debug!("evaluate {} ({}) -> {}", cur, state.name(), ok);
                    if !ok {
                        debug!("counterexample found at state {} ({})", cur, state.name());
                        let mut trace: Vec<StateId> = stack.iter().map(|f| f.id).collect();
                        trace.push(cur);
                        return Some(trace);
                    }
                }
            }
        }

        None
    }
}

impl TransitionSystem {
    /// Checks `expr` as an invariant over all states reachable from the
    /// initial states. Convenience for [`InvariantChecker::check`].
    pub fn check_invariant(&self, expr: &Expr) -> Verdict {
        InvariantChecker::new(self).check(expr)
    }
}

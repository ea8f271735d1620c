//! Counterexample resolution and rendering.
//!
//! The checker reports a violation as a trace of raw [`StateId`]s. This
//! module resolves those handles against the owning system into
//! self-contained per-step snapshots, so a trace can be displayed (or kept)
//! after the borrow on the system ends. Rendering is layered here, outside
//! the algorithm.

use std::fmt;

use crate::transition::{StateId, TransitionSystem};

/// One state snapshot along a counterexample trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: StateId,
    name: String,
    propositions: Vec<String>,
    /// Optional annotation (e.g., "INIT", "VIOLATION")
    annotation: Option<String>,
}

impl Step {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The propositions true in this state, in lexicographic order.
    pub fn propositions(&self) -> &[String] {
        &self.propositions
    }

    /// Set an annotation for this step
    pub fn annotate(&mut self, annotation: impl Into<String>) {
        self.annotation = Some(annotation.into());
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ann) = &self.annotation {
            write!(f, "[{}] ", ann)?;
        }
        write!(f, "{}", self.name)?;
        if !self.propositions.is_empty() {
            write!(f, " {{{}}}", self.propositions.join(", "))?;
        }
        Ok(())
    }
}

/// A resolved counterexample: the path from an initial state to the state
/// where the invariant fails, snapshot by snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterexample {
    steps: Vec<Step>,
}

impl Counterexample {
    /// Resolves a trace of handles against the system that issued them.
    pub fn new(system: &TransitionSystem, trace: &[StateId]) -> Self {
        let steps = trace
            .iter()
            .map(|&id| {
                let state = system.state(id);
                Step {
                    id,
                    name: state.name().to_string(),
                    propositions: state.propositions().map(str::to_string).collect(),
                    annotation: None,
                }
            })
            .collect();
        Counterexample { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Add annotations to the endpoints of the trace
    pub fn with_annotations(mut self) -> Self {
        if let Some(first) = self.steps.first_mut() {
            first.annotate("INIT");
        }
        if self.steps.len() > 1 {
            if let Some(last) = self.steps.last_mut() {
                last.annotate("VIOLATION");
            }
        }
        self
    }

    /// Compact one-line rendering: state names joined by `->` arrows.
    pub fn arrow(&self) -> String {
        self.steps.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(" -> ")
    }
}

impl fmt::Display for Counterexample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counterexample ({} states):", self.steps.len())?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "  Step {}: {}", i, step)?;
        }
        Ok(())
    }
}

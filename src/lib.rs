//! # invariant-rs: Explicit-State Invariant Checking in Rust
//!
//! **`invariant-rs`** is a small, safe library for checking **invariants** over finite labeled transition systems.
//! Given a system (states, an initial subset, a successor relation, and per-state atomic propositions)
//! and a propositional formula, it decides whether the formula holds in *every* reachable state;
//! when it does not, it hands back a counterexample trace from an initial state to the violation.
//!
//! ## What is invariant checking?
//!
//! An invariant is a property that must hold in every state a system can reach.
//! The checker explores the state space explicitly, depth-first from the initial states,
//! evaluating the formula at each state exactly once and stopping at the first violation.
//! The DFS stack at that moment *is* the path to the bad state, so counterexamples come for free.
//!
//! ## Key Features
//!
//! - **Arena-Handle Identity**: States are addressed by lightweight [`StateId`][crate::transition::StateId] handles issued by the owning [`TransitionSystem`][crate::transition::TransitionSystem]. Names are labels, never keys, so equal names cannot alias distinct states.
//! - **Total API**: Every operation returns a plain value. A dead end yields an empty successor slice, an unknown proposition evaluates to false, and a failed invariant is a [`Verdict`][crate::checker::Verdict], not an error.
//! - **Deterministic Exploration**: Initial states and successors are kept in insertion order, so repeated checks of an unchanged system return identical verdicts and traces.
//! - **Separated Presentation**: The algorithm returns structured data; rendering (trace listings, arrow paths, Graphviz export) is layered on top.
//!
//! ## Quick Start
//!
//! Add `invariant-rs` to your `Cargo.toml` and start modeling:
//!
//! ```toml
//! [dependencies]
//! invariant-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use invariant_rs::expr::Expr;
//! use invariant_rs::transition::TransitionSystem;
//!
//! // 1. Build a transition system: a binary semaphore guarding a critical section
//! let mut ts = TransitionSystem::new("Mutex");
//! let free = ts.create_state("free", true);
//! let p1cs = ts.create_state("p1cs", false);
//! let p2cs = ts.create_state("p2cs", false);
//! ts.add_proposition(p1cs, "C1");
//! ts.add_proposition(p2cs, "C2");
//! ts.add_transition(free, p1cs);
//! ts.add_transition(free, p2cs);
//! ts.add_transition(p1cs, free);
//! ts.add_transition(p2cs, free);
//!
//! // 2. Build the invariant: never both processes in the critical section
//! let invariant = Expr::atom("C1").and(Expr::atom("C2")).not();
//!
//! // 3. Check it over all reachable states
//! let verdict = ts.check_invariant(&invariant);
//! assert!(verdict.holds());
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: Propositional formulas and their evaluator.
//! - **[`transition`]**: States, handles, and the transition system builder API.
//! - **[`checker`]**: The reachability exploration and the verdict it returns.
//! - **[`counterexample`]**: Resolving a trace of handles into a printable path.
//! - **[`dot`]**: Utilities for visualizing transition systems using Graphviz.
//!
//! For the exploration algorithm itself, check the [`checker`] module documentation.

pub mod checker;
pub mod counterexample;
pub mod dot;
pub mod expr;
pub mod transition;

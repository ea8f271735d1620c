//! Transition system to DOT (Graphviz) conversion.
//!
//! This module renders a [`TransitionSystem`] in DOT format, which can be
//! visualized with Graphviz tools like `dot` or online viewers.
//!
//! # DOT Format
//!
//! The generated output follows these conventions:
//! - **States** are circles, identified by their handle (`s0`, `s1`, ...)
//! - **Initial states** are double circles
//! - **Labels** show the state name and, below it, the propositions true in
//!   that state
//! - **Edges** are one arrow per recorded transition, in insertion order
//!
//! # Examples
//!
//! ```
//! use invariant_rs::transition::TransitionSystem;
//!
//! let mut ts = TransitionSystem::new("demo");
//! let a = ts.create_state("a", true);
//! let b = ts.create_state("b", false);
//! ts.add_transition(a, b);
//!
//! let dot = ts.to_dot().unwrap();
//! assert!(dot.contains("s0 -> s1;"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use crate::transition::TransitionSystem;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for ordinary states (default: "circle")
    pub node_shape: &'static str,
    /// Shape for initial states (default: "doublecircle")
    pub initial_shape: &'static str,
    /// Whether to list true propositions inside each node label (default: true)
    pub show_propositions: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            initial_shape: "doublecircle",
            show_propositions: true,
        }
    }
}

impl TransitionSystem {
    /// Converts the transition system to DOT (Graphviz) format.
    ///
    /// States appear in arena order, so the output is deterministic for a
    /// given construction sequence.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - a DOT-formatted digraph
    /// * `Err(std::fmt::Error)` - if string formatting fails (rare)
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the transition system to DOT format with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use invariant_rs::dot::DotConfig;
    /// use invariant_rs::transition::TransitionSystem;
    ///
    /// let mut ts = TransitionSystem::new("demo");
    /// ts.create_state("a", true);
    ///
    /// let config = DotConfig {
    ///     show_propositions: false,
    ///     ..DotConfig::default()
    /// };
    ///
    /// let dot = ts.to_dot_with_config(&config).unwrap();
    /// assert!(dot.starts_with("digraph {"));
    /// ```
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for id in self.state_ids() {
            let state = self.state(id);
            let mut label = state.name().to_string();
            if config.show_propositions {
                let props: Vec<_> = state.propositions().collect();
                if !props.is_empty() {
                    label.push_str("\\n");
                    label.push_str(&props.join(", "));
                }
            }
            if state.is_initial() {
                writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.initial_shape, label)?;
            } else {
                writeln!(dot, "{} [label=\"{}\"];", id, label)?;
            }
        }

        for from in self.state_ids() {
            for &to in self.post(from) {
                writeln!(dot, "{} -> {};", from, to)?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::State;

    fn traffic_light() -> TransitionSystem {
        let mut ts = TransitionSystem::new("Feu_Tricolore");
        let q0 = ts.add_state(State::initial("q0"));
        let q1 = ts.add_state(State::new("q1").with_proposition("orange"));
        let q2 = ts.add_state(State::new("q2").with_proposition("rouge"));
        ts.add_transition(q0, q1);
        ts.add_transition(q1, q0);
        ts.add_transition(q0, q0);
        ts.add_transition(q1, q1);
        ts.add_transition(q0, q2);
        ts
    }

    /// Basic test: verify DOT output is generated without errors
    #[test]
    fn test_to_dot_basic() {
        let ts = traffic_light();
        let dot = ts.to_dot().unwrap();
        println!("{}", dot);

        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("s0 [shape=doublecircle, label=\"q0\"];"));
        assert!(dot.contains("s1 [label=\"q1\\norange\"];"));
        assert!(dot.contains("s0 -> s2;"));
    }

    /// Self-loops must render as ordinary edges
    #[test]
    fn test_to_dot_self_loop() {
        let ts = traffic_light();
        let dot = ts.to_dot().unwrap();
        assert!(dot.contains("s0 -> s0;"));
    }

    /// Test with custom configuration
    #[test]
    fn test_to_dot_with_config() {
        let ts = traffic_light();
        let config = DotConfig {
            show_propositions: false,
            ..DotConfig::default()
        };

        let dot = ts.to_dot_with_config(&config).unwrap();
        assert!(dot.contains("s1 [label=\"q1\"];"));
        assert!(!dot.contains("orange"));
    }

    /// Empty systems still produce a well-formed digraph
    #[test]
    fn test_to_dot_empty() {
        let ts = TransitionSystem::new("empty");
        let dot = ts.to_dot().unwrap();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
    }

    /// Helper test to write DOT file for manual inspection (disabled by default)
    #[test]
    #[ignore]
    fn test_write_dot_file() {
        let ts = traffic_light();
        let dot = ts.to_dot().unwrap();

        std::fs::write("test_output.dot", &dot).unwrap();
        println!("DOT output:\n{}", dot);
        // Render with: dot -Tpng test_output.dot -o test_output.png
    }
}

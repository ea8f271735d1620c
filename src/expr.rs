//! Propositional formulas over atomic propositions.
//!
//! Formulas are built programmatically via the constructor methods and
//! evaluated against a single [`State`] using the closed-world assumption:
//! a proposition not listed on a state is false there.

use std::fmt;

use crate::transition::State;

/// Propositional formula abstract syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Atomic proposition
    Atom(String),
    /// Negation
    Not(Box<Expr>),
    /// Conjunction
    And(Box<Expr>, Box<Expr>),
    /// Disjunction
    Or(Box<Expr>, Box<Expr>),
    /// Implication
    Implies(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Constructors for convenience
    pub fn atom(s: impl Into<String>) -> Self {
        Expr::Atom(s.into())
    }

    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    pub fn and(self, other: Self) -> Self {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Self) -> Self {
        Expr::Or(Box::new(self), Box::new(other))
    }

    pub fn implies(self, other: Self) -> Self {
        Expr::Implies(Box::new(self), Box::new(other))
    }

    /// Evaluates the formula in a single state.
    ///
    /// Pure and total: an atomic proposition absent from the state's
    /// proposition set evaluates to `false`, never to an error.
    pub fn eval(&self, state: &State) -> bool {
        match self {
            Expr::Atom(p) => state.has_proposition(p),
            Expr::Not(e) => !e.eval(state),
            Expr::And(l, r) => l.eval(state) && r.eval(state),
            Expr::Or(l, r) => l.eval(state) || r.eval(state),
            Expr::Implies(l, r) => !l.eval(state) || r.eval(state),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(s) => write!(f, "{}", s),
            Expr::Not(e) => write!(f, "¬{}", e),
            Expr::And(l, r) => write!(f, "({} ∧ {})", l, r),
            Expr::Or(l, r) => write!(f, "({} ∨ {})", l, r),
            Expr::Implies(l, r) => write!(f, "({} → {})", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let e = Expr::atom("p").and(Expr::atom("q").not());
        assert_eq!(
            e,
            Expr::And(
                Box::new(Expr::Atom("p".to_string())),
                Box::new(Expr::Not(Box::new(Expr::Atom("q".to_string())))),
            )
        );
    }

    #[test]
    fn test_display() {
        let e = Expr::atom("C1").and(Expr::atom("C2")).not();
        assert_eq!(e.to_string(), "¬(C1 ∧ C2)");

        let e = Expr::atom("p").implies(Expr::atom("q").or(Expr::atom("r")));
        assert_eq!(e.to_string(), "(p → (q ∨ r))");
    }

    #[test]
    fn test_eval_atom_closed_world() {
        let s = State::new("s").with_proposition("p");

        assert!(Expr::atom("p").eval(&s));
        // A proposition never registered evaluates to false, not an error.
        assert!(!Expr::atom("q").eval(&s));
    }

    #[test]
    fn test_eval_connectives() {
        let s = State::new("s").with_proposition("p");

        assert!(!Expr::atom("p").not().eval(&s));
        assert!(Expr::atom("q").not().eval(&s));

        assert!(!Expr::atom("p").and(Expr::atom("q")).eval(&s));
        assert!(Expr::atom("p").or(Expr::atom("q")).eval(&s));
    }

    #[test]
    fn test_eval_implies() {
        let s = State::new("s").with_proposition("p");

        // p → q: antecedent holds, consequent does not
        assert!(!Expr::atom("p").implies(Expr::atom("q")).eval(&s));
        // q → p: vacuously true (q is false in s)
        assert!(Expr::atom("q").implies(Expr::atom("p")).eval(&s));
        // p → p
        assert!(Expr::atom("p").implies(Expr::atom("p")).eval(&s));
    }

    #[test]
    fn test_shared_subtree_by_clone() {
        let both = Expr::atom("C1").and(Expr::atom("C2"));
        // The same sub-tree reused in two parents; value semantics, no aliasing.
        let left = both.clone().not();
        let right = both.implies(Expr::atom("C1"));

        let s = State::new("s").with_proposition("C1").with_proposition("C2");
        assert!(!left.eval(&s));
        assert!(right.eval(&s));
    }
}

//! Expressions, aka. (propositional) formulas.
//!
//! An expression is one of six things:
//! - An [atom](crate::structures::atom).
//! - The negation of an expression.
//! - The conjunction of a *set* of expressions.
//! - The disjunction of a *set* of expressions.
//! - The implication of one expression by another.
//! - The equivalence of two expressions.
//!
//! Expressions are immutable values.
//! Operations such as [conversion to CNF](Expr::to_cnf) build a fresh expression rather than revise an existing expression.
//!
//! ```rust
//! # use propositional_kb::structures::expression::Expr;
//! let a = Expr::atom("a");
//! let b = Expr::atom("b");
//!
//! let a_and_not_b = Expr::and([a.clone(), Expr::not(b.clone())]);
//! let not_b_and_a = Expr::and([Expr::not(b.clone()), a.clone()]);
//! assert_eq!(a_and_not_b, not_b_and_a);
//!
//! assert_ne!(Expr::implies(a.clone(), b.clone()), Expr::implies(b.clone(), a.clone()));
//! assert_eq!(Expr::iff(a.clone(), b.clone()), Expr::iff(b, a));
//! ```
//!
//! # Equality
//!
//! Equality is structural, though with conjunction, disjunction, and equivalence insensitive to the order of their operands.
//! Conjunction and disjunction are also insensitive to repetition, as the operands of each are stored as a set.
//!
//! Expressions are [ordered](Ord) and [hashed](std::hash::Hash) in agreement with equality, so may be used as the keys of a map, or the elements of a set.
//! In particular, the operands of an equivalence are always ordered, hashed, and compared as the pair of (lesser, greater) operand.
//!
//! # Empty conjunctions and disjunctions
//!
//! The conjunction of no expressions is true, and the disjunction of no expressions is false.
//! Neither is built by the library from a non-empty expression, though both are permitted.

#[doc(hidden)]
mod impl_expr;
mod ops;

use std::collections::BTreeSet;

use crate::{
    structures::{atom::Atom, valuation::Valuation},
    types::err::{self},
};

/// A (propositional) expression.
#[derive(Clone, Debug)]
pub enum Expr {
    /// An atom.
    Atom(Atom),

    /// The negation of an expression.
    Not(Box<Expr>),

    /// The conjunction of a set of expressions.
    And(BTreeSet<Expr>),

    /// The disjunction of a set of expressions.
    Or(BTreeSet<Expr>),

    /// The implication of the second expression by the first.
    Implies(Box<Expr>, Box<Expr>),

    /// The equivalence of two expressions.
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The atom with the given name, as an expression.
    pub fn atom(name: impl Into<Atom>) -> Self {
        Expr::Atom(name.into())
    }

    /// The negation of `arg`.
    pub fn not(arg: Expr) -> Self {
        Expr::Not(Box::new(arg))
    }

    /// The conjunction of each expression in `conjuncts`.
    pub fn and(conjuncts: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(conjuncts.into_iter().collect())
    }

    /// The disjunction of each expression in `disjuncts`.
    pub fn or(disjuncts: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(disjuncts.into_iter().collect())
    }

    /// `left` implies `right`.
    pub fn implies(left: Expr, right: Expr) -> Self {
        Expr::Implies(Box::new(left), Box::new(right))
    }

    /// `left` if and only if `right`.
    pub fn iff(left: Expr, right: Expr) -> Self {
        Expr::Iff(Box::new(left), Box::new(right))
    }

    /// Whether the expression is a literal, i.e. an atom or the negation of an atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Expr::Atom(_) => true,
            Expr::Not(arg) => matches!(**arg, Expr::Atom(_)),
            _ => false,
        }
    }

    /// The names of every atom in the expression.
    ///
    /// ```rust
    /// # use propositional_kb::structures::expression::Expr;
    /// let [a, b, c] = ["a", "b", "c"].map(Expr::atom);
    /// let expr = Expr::and([a.clone(), Expr::implies(b, Expr::iff(a, c))]);
    ///
    /// let names = expr.atom_names();
    /// assert_eq!(names.iter().map(|name| &**name).collect::<Vec<_>>(), ["a", "b", "c"]);
    /// ```
    pub fn atom_names(&self) -> BTreeSet<Atom> {
        let mut names = BTreeSet::default();
        self.collect_atom_names(&mut names);
        names
    }

    fn collect_atom_names(&self, names: &mut BTreeSet<Atom>) {
        match self {
            Expr::Atom(atom) => {
                names.insert(atom.clone());
            }

            Expr::Not(arg) => arg.collect_atom_names(names),

            Expr::And(operands) | Expr::Or(operands) => {
                for operand in operands {
                    operand.collect_atom_names(names);
                }
            }

            Expr::Implies(left, right) | Expr::Iff(left, right) => {
                left.collect_atom_names(names);
                right.collect_atom_names(names);
            }
        }
    }

    /// The value of the expression on the given valuation.
    ///
    /// The valuation should be total on the atoms of the expression.
    /// Though, as operands are evaluated lazily, an atom without a value is only an error if the value of the atom is required.
    ///
    /// ```rust
    /// # use std::collections::HashMap;
    /// # use propositional_kb::structures::expression::Expr;
    /// # use propositional_kb::types::err::EvaluationError;
    /// let e = Expr::implies(Expr::atom("a"), Expr::atom("b"));
    ///
    /// assert_eq!(e.evaluate(&HashMap::from([("a", false), ("b", true)])), Ok(true));
    /// assert_eq!(e.evaluate(&HashMap::from([("a", true), ("b", false)])), Ok(false));
    ///
    /// assert_eq!(
    ///     e.evaluate(&HashMap::from([("a", true)])),
    ///     Err(EvaluationError::UnassignedAtom("b".into()))
    /// );
    /// ```
    pub fn evaluate(&self, valuation: &impl Valuation) -> Result<bool, err::EvaluationError> {
        match self {
            Expr::Atom(atom) => match valuation.value_of(atom) {
                Some(value) => Ok(value),
                None => Err(err::EvaluationError::UnassignedAtom(atom.clone())),
            },

            Expr::Not(arg) => Ok(!arg.evaluate(valuation)?),

            Expr::And(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(valuation)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Expr::Or(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(valuation)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Expr::Implies(left, right) => match left.evaluate(valuation)? {
                true => right.evaluate(valuation),
                false => Ok(true),
            },

            Expr::Iff(left, right) => Ok(left.evaluate(valuation)? == right.evaluate(valuation)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn abc() -> [Expr; 3] {
        ["a", "b", "c"].map(Expr::atom)
    }

    #[test]
    fn literals() {
        let [a, b, _] = abc();
        assert!(a.is_literal());
        assert!(Expr::not(a.clone()).is_literal());
        assert!(!Expr::not(Expr::not(a.clone())).is_literal());
        assert!(!Expr::or([a, b]).is_literal());
    }

    #[test]
    fn atom_names_of_negation() {
        let [a, _, _] = abc();
        let names = Expr::not(a).atom_names();
        assert_eq!(names.len(), 1);
        assert!(names.contains("a"));
    }

    #[test]
    fn evaluate_mixed() {
        let [a, b, c] = abc();
        let e = Expr::and([Expr::not(a), Expr::or([b, c])]);
        let valuation = BTreeMap::from([("a", false), ("b", false), ("c", true)]);
        assert_eq!(e.evaluate(&valuation), Ok(true));
    }

    #[test]
    fn evaluate_iff() {
        let [a, b, _] = abc();
        let e = Expr::iff(a, b);
        for (va, vb) in [(false, false), (false, true), (true, false), (true, true)] {
            let valuation = BTreeMap::from([("a", va), ("b", vb)]);
            assert_eq!(e.evaluate(&valuation), Ok(va == vb));
        }
    }

    #[test]
    fn evaluate_empty() {
        let valuation = BTreeMap::<&str, bool>::new();
        assert_eq!(Expr::and([]).evaluate(&valuation), Ok(true));
        assert_eq!(Expr::or([]).evaluate(&valuation), Ok(false));
    }

    #[test]
    fn evaluate_short_circuits() {
        let [a, b, _] = abc();
        let valuation = BTreeMap::from([("a", true)]);
        assert_eq!(Expr::or([a.clone(), b.clone()]).evaluate(&valuation), Ok(true));
        assert_eq!(
            Expr::and([a, b]).evaluate(&valuation),
            Err(err::EvaluationError::UnassignedAtom("b".into()))
        );
    }
}

//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as an (ordered) set of literals.
//! So, clauses are equal exactly when they contain the same literals.
//!
//! ```rust
//! # use propositional_kb::structures::expression::Expr;
//! # use propositional_kb::structures::clause::{self, Clause};
//! let [p, q] = ["p", "q"].map(Expr::atom);
//! let clause = clause::clause_of(&Expr::or([Expr::not(q.clone()), p.clone()])).unwrap();
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.as_string(), "p ∨ ¬q");
//! assert_eq!(clause.as_expr(), Expr::or([p, Expr::not(q)]));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use std::collections::BTreeSet;

use crate::{
    structures::{
        atom::Atom,
        expression::Expr,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self},
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// The clause as an expression.
    ///
    /// A unit clause is its literal, and any other clause is the disjunction of its literals.
    fn as_expr(&self) -> Expr;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = &Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// Whether the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> Result<bool, err::EvaluationError>;
}

/// The implementation of a clause as an ordered set of literals.
pub type SetClause = BTreeSet<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = SetClause;

impl Clause for SetClause {
    fn as_string(&self) -> String {
        match self.is_empty() {
            true => "⊥".to_string(),
            false => self
                .iter()
                .map(|literal| literal.to_string())
                .collect::<Vec<_>>()
                .join(" ∨ "),
        }
    }

    fn as_expr(&self) -> Expr {
        let mut disjuncts = self.iter().cloned().map(Expr::from).collect::<BTreeSet<_>>();
        if disjuncts.len() == 1 {
            if let Some(literal) = disjuncts.pop_first() {
                return literal;
            }
        }
        Expr::Or(disjuncts)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn is_tautology(&self) -> bool {
        // The literals on an atom are adjacent, negative first.
        self.iter()
            .zip(self.iter().skip(1))
            .any(|(a, b)| a.complements(b))
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> Result<bool, err::EvaluationError> {
        for literal in self {
            match valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Ok(true),
                Some(_) => {}
                None => return Err(err::EvaluationError::UnassignedAtom(literal.atom().clone())),
            }
        }
        Ok(false)
    }
}

/// The clause of an expression, where the expression is a literal or a disjunction of literals.
///
/// Returns a [MalformedLiteral](err::ClauseError::MalformedLiteral) error if some disjunct is not a literal.
pub fn clause_of(expr: &Expr) -> Result<CClause, err::ClauseError> {
    match expr {
        Expr::Or(disjuncts) => disjuncts.iter().map(CLiteral::try_from).collect(),
        literal => Ok(BTreeSet::from([CLiteral::try_from(literal)?])),
    }
}

/// The clauses of an expression in conjunctive normal form.
///
/// Each conjunct of a top-level conjunction is a clause.
/// Any other expression is read as a single clause.
pub fn clauses_of(cnf: &Expr) -> Result<Vec<CClause>, err::ClauseError> {
    match cnf {
        Expr::And(conjuncts) => conjuncts.iter().map(clause_of).collect(),
        clause => Ok(vec![clause_of(clause)?]),
    }
}

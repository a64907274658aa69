/*!
Conversion of an expression to conjunctive normal form (CNF).

An expression is in CNF when it is:
- A literal, or
- A disjunction of literals (a clause), or
- A conjunction of literals and/or clauses.

Conversion is applied innermost-first, so the operands of an expression are in CNF before the expression itself is considered.
Then:
- Atoms and negated atoms are unchanged.
- Double negations are removed.
- Negated conjunctions and disjunctions are pushed inwards by De Morgan's laws.
- Nested conjunctions are flattened.
- Disjunctions are distributed over conjunctions, pairwise, from the first operand to the last.
- `l → r` is read as `¬l ∨ r`, and `l ↔ r` as `(l → r) ∧ (r → l)`.

A negated implication or equivalence is handled by first converting the implication (or equivalence) to CNF, after which the negation is over one of the shapes above.

```rust
# use propositional_kb::structures::expression::Expr;
let [a, b, c, d] = ["a", "b", "c", "d"].map(Expr::atom);

let cnf = Expr::or([Expr::and([a.clone(), b.clone()]), Expr::and([c.clone(), d.clone()])]).to_cnf();
assert_eq!(
    cnf,
    Expr::and([
        Expr::or([a.clone(), c.clone()]),
        Expr::or([a.clone(), d.clone()]),
        Expr::or([b.clone(), c.clone()]),
        Expr::or([b.clone(), d.clone()]),
    ])
);

let cnf = Expr::iff(a.clone(), Expr::or([b.clone(), c.clone()])).to_cnf();
assert_eq!(
    cnf,
    Expr::and([
        Expr::or([Expr::not(a.clone()), b.clone(), c.clone()]),
        Expr::or([a.clone(), Expr::not(b.clone())]),
        Expr::or([a.clone(), Expr::not(c.clone())]),
    ])
);
```

# Size

Distribution is direct, without the introduction of fresh atoms, and so the CNF of an expression may be exponentially larger than the expression.
For example, the disjunction of *n* conjunctions of two atoms has 2<sup>n</sup> clauses.

# Fixed points

Conversion is idempotent: the CNF of an expression in CNF is the expression.
To ensure this, a disjunction of a single (distinct) operand is always written as the operand.
*/

use std::collections::BTreeSet;

use crate::{misc::log::targets, structures::expression::Expr};

impl Expr {
    /// The expression in conjunctive normal form.
    ///
    /// See the [module](crate::procedures::cnf) documentation for details.
    pub fn to_cnf(&self) -> Expr {
        let cnf = cnf(self);
        log::trace!(target: targets::CNF, "{self} ⇝ {cnf}");
        cnf
    }
}

/// The expression in conjunctive normal form.
///
/// Equivalent to [Expr::to_cnf].
pub fn to_cnf(expr: &Expr) -> Expr {
    expr.to_cnf()
}

fn cnf(expr: &Expr) -> Expr {
    match expr {
        Expr::Atom(_) => expr.clone(),

        Expr::Not(arg) => negation(arg),

        Expr::And(conjuncts) => conjoin(conjuncts.iter().map(cnf)),

        Expr::Or(disjuncts) => disjoin(disjuncts.iter().map(cnf)),

        Expr::Implies(left, right) => implication(left, right),

        Expr::Iff(left, right) => conjoin([implication(left, right), implication(right, left)]),
    }
}

/// The CNF of `¬arg`.
fn negation(arg: &Expr) -> Expr {
    match arg {
        Expr::Atom(_) => Expr::Not(Box::new(arg.clone())),

        Expr::Not(inner) => cnf(inner),

        Expr::And(conjuncts) => disjoin(conjuncts.iter().map(negation)),

        Expr::Or(disjuncts) => conjoin(disjuncts.iter().map(negation)),

        // The CNF of an implication or equivalence is always a literal, disjunction, or conjunction.
        Expr::Implies(_, _) | Expr::Iff(_, _) => negation(&cnf(arg)),
    }
}

/// The CNF of `left → right`.
fn implication(left: &Expr, right: &Expr) -> Expr {
    disjoin([negation(left), cnf(right)])
}

/// The conjunction of expressions in CNF, with any nested conjunction flattened.
fn conjoin(conjuncts: impl IntoIterator<Item = Expr>) -> Expr {
    let mut flat = BTreeSet::default();
    for conjunct in conjuncts {
        match conjunct {
            Expr::And(nested) => flat.extend(nested),
            clause => {
                flat.insert(clause);
            }
        }
    }
    Expr::And(flat)
}

/// The disjunction of expressions in CNF, distributed over any conjunction.
///
/// The disjunction of no expressions is the empty disjunction.
fn disjoin(disjuncts: impl IntoIterator<Item = Expr>) -> Expr {
    disjuncts
        .into_iter()
        .reduce(distribute_or)
        .unwrap_or_else(|| Expr::Or(BTreeSet::default()))
}

/// The disjunction of two expressions in CNF, in CNF.
///
/// - If both expressions are conjunctions, the result is the conjunction of the disjunction of each pair of conjuncts.
/// - If one expression is a conjunction, the other is distributed over each of its conjuncts.
/// - Otherwise, the result is the (flat) disjunction of the literals of each expression.
///
/// If either expression is not in CNF, the result may not be in CNF.
///
/// ```rust
/// # use propositional_kb::structures::expression::Expr;
/// # use propositional_kb::procedures::cnf::distribute_or;
/// let [a, b, c] = ["a", "b", "c"].map(Expr::atom);
///
/// let distributed = distribute_or(a.clone(), Expr::and([b.clone(), c.clone()]));
/// assert_eq!(
///     distributed,
///     Expr::and([Expr::or([a.clone(), b.clone()]), Expr::or([a.clone(), c])])
/// );
///
/// assert_eq!(distribute_or(a.clone(), a.clone()), a);
/// ```
pub fn distribute_or(x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::And(xs), Expr::And(ys)) => conjoin(
            xs.iter()
                .flat_map(|x| ys.iter().map(move |y| distribute_or(x.clone(), y.clone()))),
        ),

        (Expr::And(xs), y) => conjoin(xs.into_iter().map(|x| distribute_or(x, y.clone()))),

        (x, Expr::And(ys)) => conjoin(ys.into_iter().map(|y| distribute_or(x.clone(), y))),

        (x, y) => {
            let mut flat = BTreeSet::default();
            for disjunct in [x, y] {
                match disjunct {
                    Expr::Or(nested) => flat.extend(nested),
                    literal => {
                        flat.insert(literal);
                    }
                }
            }

            if flat.len() == 1 {
                if let Some(literal) = flat.pop_first() {
                    return literal;
                }
            }
            Expr::Or(flat)
        }
    }
}

/// Whether the expression is in conjunctive normal form.
///
/// ```rust
/// # use propositional_kb::structures::expression::Expr;
/// # use propositional_kb::procedures::cnf::is_cnf;
/// let [a, b] = ["a", "b"].map(Expr::atom);
///
/// assert!(is_cnf(&Expr::and([a.clone(), Expr::or([Expr::not(a.clone()), b.clone()])])));
/// assert!(!is_cnf(&Expr::or([a.clone(), Expr::and([a, b])])));
/// ```
pub fn is_cnf(expr: &Expr) -> bool {
    fn is_clause(expr: &Expr) -> bool {
        match expr {
            Expr::Or(disjuncts) => disjuncts.iter().all(Expr::is_literal),
            literal => literal.is_literal(),
        }
    }

    match expr {
        Expr::And(conjuncts) => conjuncts.iter().all(is_clause),
        clause => is_clause(clause),
    }
}

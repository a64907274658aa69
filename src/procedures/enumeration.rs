/*!
Enumeration of the valuations on which an expression is true.

Enumeration is exhaustive: each of the 2<sup>k</sup> valuations over the *k* atoms of the expression is checked in turn.
So, enumeration is only of use with few atoms.

Valuations are checked in a fixed order.
Atoms are sorted by name, and valuations are ordered as binary numbers with the first atom as the most significant digit and false as zero.

```rust
# use propositional_kb::structures::expression::Expr;
# use propositional_kb::procedures::enumeration::satisfying_assignments;
# use propositional_kb::structures::valuation::CValuation;
let e = Expr::implies(Expr::atom("a"), Expr::atom("b"));
let mut assignments = satisfying_assignments(&e);

assert_eq!(assignments.next(), Some(CValuation::from([("a".into(), false), ("b".into(), false)])));
assert_eq!(assignments.next(), Some(CValuation::from([("a".into(), false), ("b".into(), true)])));
assert_eq!(assignments.next(), Some(CValuation::from([("a".into(), true), ("b".into(), true)])));
assert_eq!(assignments.next(), None);
```
*/

use crate::{
    misc::log::targets,
    structures::{atom::Atom, expression::Expr, valuation::CValuation},
};

/// An iterator over each valuation on which an expression is true.
///
/// Built with [satisfying_assignments].
pub struct SatisfyingAssignments<'e> {
    expr: &'e Expr,

    /// The atoms of the expression, sorted.
    atoms: Vec<Atom>,

    /// The values of the next valuation to check, in the order of atoms.
    next: Option<Vec<bool>>,
}

/// An iterator over each valuation on which `expr` is true, in the order described in the [module](crate::procedures::enumeration) documentation.
///
/// The iterator borrows the expression, and a fresh iterator is needed to restart enumeration.
pub fn satisfying_assignments(expr: &Expr) -> SatisfyingAssignments<'_> {
    let atoms = expr.atom_names().into_iter().collect::<Vec<_>>();
    log::trace!(target: targets::ENUMERATION, "Enumeration over {} atoms of {expr}", atoms.len());

    SatisfyingAssignments {
        expr,
        next: Some(vec![false; atoms.len()]),
        atoms,
    }
}

impl SatisfyingAssignments<'_> {
    /// Advances the values to those of the following valuation, if there is a following valuation.
    fn advance(&mut self) {
        if let Some(values) = &mut self.next {
            match values.iter().rposition(|value| !value) {
                Some(index) => {
                    values[index] = true;
                    values[index + 1..].iter_mut().for_each(|value| *value = false);
                }
                None => self.next = None,
            }
        }
    }
}

impl Iterator for SatisfyingAssignments<'_> {
    type Item = CValuation;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let values = self.next.as_ref()?;
            let valuation = self
                .atoms
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect::<CValuation>();
            self.advance();

            // The valuation is total on the atoms of the expression, and so evaluation is never an error.
            if let Ok(true) = self.expr.evaluate(&valuation) {
                return Some(valuation);
            }
        }
    }
}

//! Equality, ordering, and hashing of [expressions](Expr).
//!
//! Each is written by hand as the operands of an equivalence are unordered, and a derived implementation would distinguish `a ↔ b` from `b ↔ a`.
//!
//! Variants are ordered as they are declared: atoms, negations, conjunctions, disjunctions, implications, equivalences.
//! Within a variant:
//! - Atoms are ordered by name.
//! - Conjunctions and disjunctions are ordered lexicographically over their (ordered) operands.
//! - Implications are ordered lexicographically over (left, right).
//! - Equivalences are ordered lexicographically over (lesser operand, greater operand).

use std::cmp::Ordering;

use super::Expr;

impl Expr {
    /// The position of the variant in the order of variants.
    fn rank(&self) -> u8 {
        match self {
            Expr::Atom(_) => 0,
            Expr::Not(_) => 1,
            Expr::And(_) => 2,
            Expr::Or(_) => 3,
            Expr::Implies(_, _) => 4,
            Expr::Iff(_, _) => 5,
        }
    }
}

/// The operands of an equivalence, lesser first.
fn ordered<'e>(left: &'e Expr, right: &'e Expr) -> (&'e Expr, &'e Expr) {
    match left.cmp(right) {
        Ordering::Greater => (right, left),
        _ => (left, right),
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Atom(a), Expr::Atom(b)) => a == b,

            (Expr::Not(a), Expr::Not(b)) => a == b,

            (Expr::And(a), Expr::And(b)) | (Expr::Or(a), Expr::Or(b)) => a == b,

            (Expr::Implies(a_l, a_r), Expr::Implies(b_l, b_r)) => a_l == b_l && a_r == b_r,

            (Expr::Iff(a_l, a_r), Expr::Iff(b_l, b_r)) => {
                (a_l == b_l && a_r == b_r) || (a_l == b_r && a_r == b_l)
            }

            _ => false,
        }
    }
}

impl Eq for Expr {}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Expr::Atom(a), Expr::Atom(b)) => a.cmp(b),

            (Expr::Not(a), Expr::Not(b)) => a.cmp(b),

            (Expr::And(a), Expr::And(b)) | (Expr::Or(a), Expr::Or(b)) => a.cmp(b),

            (Expr::Implies(a_l, a_r), Expr::Implies(b_l, b_r)) => {
                a_l.cmp(b_l).then_with(|| a_r.cmp(b_r))
            }

            (Expr::Iff(a_l, a_r), Expr::Iff(b_l, b_r)) => {
                let (a_min, a_max) = ordered(a_l, a_r);
                let (b_min, b_max) = ordered(b_l, b_r);
                a_min.cmp(b_min).then_with(|| a_max.cmp(b_max))
            }

            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl std::hash::Hash for Expr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Expr::Atom(atom) => atom.hash(state),

            Expr::Not(arg) => arg.hash(state),

            // Sets are hashed in order, and so a set of equal operands always hashes the same.
            Expr::And(operands) | Expr::Or(operands) => operands.hash(state),

            Expr::Implies(left, right) => {
                left.hash(state);
                right.hash(state);
            }

            Expr::Iff(left, right) => {
                let (min, max) = ordered(left, right);
                min.hash(state);
                max.hash(state);
            }
        }
    }
}

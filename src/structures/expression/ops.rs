//! Operators for building expressions, and the display of expressions.
//!
//! The operators are structural: `a & b & c` is the conjunction of `a & b` and `c`.
//! For a flat conjunction (or disjunction) use [Expr::and] (or [Expr::or]).
//!
//! ```rust
//! # use propositional_kb::structures::expression::Expr;
//! let [a, b, c] = ["a", "b", "c"].map(Expr::atom);
//!
//! let e = a.clone() & !(b.clone() | c.clone());
//! assert_eq!(e, Expr::and([a, Expr::not(Expr::or([b, c]))]));
//! assert_eq!(e.to_string(), "(a ∧ ¬(b ∨ c))");
//! ```

use super::Expr;

impl std::ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        Expr::and([self, other])
    }
}

impl std::ops::BitOr for Expr {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Expr::or([self, other])
    }
}

/// Writes each operand in order, separated by `connective`.
fn write_operands<'e>(
    f: &mut std::fmt::Formatter,
    operands: impl Iterator<Item = &'e Expr>,
    connective: &str,
) -> std::fmt::Result {
    write!(f, "(")?;
    for (index, operand) in operands.enumerate() {
        if index > 0 {
            write!(f, " {connective} ")?;
        }
        write!(f, "{operand}")?;
    }
    write!(f, ")")
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expr::Atom(atom) => write!(f, "{atom}"),

            Expr::Not(arg) => write!(f, "¬{arg}"),

            Expr::And(conjuncts) if conjuncts.is_empty() => write!(f, "⊤"),

            Expr::And(conjuncts) => write_operands(f, conjuncts.iter(), "∧"),

            Expr::Or(disjuncts) if disjuncts.is_empty() => write!(f, "⊥"),

            Expr::Or(disjuncts) => write_operands(f, disjuncts.iter(), "∨"),

            Expr::Implies(left, right) => write!(f, "({left} → {right})"),

            Expr::Iff(left, right) => write!(f, "({left} ↔ {right})"),
        }
    }
}

//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! As an expression, a literal is either an atom (with positive polarity) or the negation of an atom (with negative polarity).
//!
//! ```rust
//! # use propositional_kb::structures::literal::{ABLiteral, Literal};
//! # use propositional_kb::structures::expression::Expr;
//! let literal = ABLiteral::new("p".into(), true);
//!
//! assert!(literal.polarity());
//! assert_eq!(&**literal.atom(), "p");
//! assert!(!literal.negate().polarity());
//!
//! assert_eq!(Expr::from(literal.negate()), Expr::not(Expr::atom("p")));
//! assert_eq!(ABLiteral::try_from(&Expr::not(Expr::atom("p"))), Ok(literal.negate()));
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//!     So, the literals on an atom are adjacent in any ordered collection.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indicies of maps, etc.

#[allow(non_snake_case)]
#[doc(hidden)]
mod impl_ABLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> &Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// Whether the literal is the negation of `other`, i.e. has the same atom and the opposite polarity.
    fn complements(&self, other: &Self) -> bool {
        self.atom() == other.atom() && self.polarity() != other.polarity()
    }
}

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;

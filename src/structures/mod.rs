//! Key structures, such as expressions, literals, and clauses.
//!
//! # Expressions and clauses
//!
//! An [expression](expression) is any boolean formula built from [atoms](atom) with negation, conjunction, disjunction, implication, and equivalence.
//!
//! A [clause] is a set of [literals](literal), interpreted as the disjunction of those literals.
//! A formula in conjunctive normal form is then a set of clauses, interpreted as the conjunction of those clauses.
//!
//! Expressions are what is given to, and asked of, a [knowledge base](crate::context::KnowledgeBase).
//! Clauses are what a knowledge base stores, and what [resolution](crate::procedures::resolution) works over.
//! The two meet through [conversion to CNF](crate::procedures::cnf), after which each conjunct of an expression is read as a clause.
//!
//! ## Languages
//! A *language* 𝓛 is some set of [atoms](atom), closed under the operations of negation, conjunction, and disjunction. \
//! Every expression is expressed in some language, and the language of a knowledge base is the set of atoms appearing in some fact.
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things, here [true] and [false].
//! A [valuation] pairs atoms with values.

pub mod atom;
pub mod clause;
pub mod expression;
pub mod literal;
pub mod valuation;

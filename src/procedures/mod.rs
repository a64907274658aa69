//! Procedures over expressions and clauses.
//!
//! - [cnf] converts an expression to conjunctive normal form.
//! - [resolution] derives resolvents, and saturates a set of clauses to determine satisfiability.
//! - [enumeration] lists the valuations on which an expression is true.
//!
//! Each procedure is a function of its inputs, and none keeps any state between calls.
//! The [knowledge base](crate::context::KnowledgeBase) combines the procedures to answer queries.

pub mod cnf;
pub mod enumeration;
pub mod resolution;

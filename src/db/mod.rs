//! Databases for holding information relevant to a [knowledge base](crate::context::KnowledgeBase).
//!
//! For the moment, this is a single database of [clauses](clause).

pub mod clause;

//! A database of clauses.
//!
//! Clauses are only ever added to the database, and never removed or revised.
//! As clauses are stored in their canonical form, a clause equal to some stored clause is noted as a duplicate and not stored again.
//!
//! ```rust
//! # use std::collections::BTreeSet;
//! # use propositional_kb::db::clause::{ClauseDB, ClauseOk};
//! # use propositional_kb::structures::literal::{CLiteral, Literal};
//! let mut clause_db = ClauseDB::default();
//! let p = CLiteral::new("p".into(), true);
//!
//! assert_eq!(clause_db.store(BTreeSet::from([p.clone()])), ClauseOk::Added);
//! assert_eq!(clause_db.store(BTreeSet::from([p.clone(), p])), ClauseOk::Duplicate);
//! assert_eq!(clause_db.count(), 1);
//! ```

use std::collections::BTreeSet;

use crate::{
    misc::log::targets,
    structures::clause::{CClause, Clause},
};

/// Ok results when storing a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the database.
    Added,

    /// An equal clause was already in the database.
    Duplicate,
}

/// The clause database.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    clauses: BTreeSet<CClause>,
}

impl ClauseDB {
    /// Stores a clause, unless an equal clause is already stored.
    pub fn store(&mut self, clause: impl Clause) -> ClauseOk {
        let clause = clause.canonical();

        if self.contains(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate: {}", clause.as_string());
            return ClauseOk::Duplicate;
        }

        log::trace!(target: targets::CLAUSE_DB, "Added: {}", clause.as_string());
        self.clauses.insert(clause);
        ClauseOk::Added
    }

    /// An iterator over all stored clauses, in the order of clauses.
    pub fn all_clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// A count of stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether some clause equal to `clause` is stored.
    pub fn contains(&self, clause: &CClause) -> bool {
        self.clauses.contains(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{CLiteral, Literal};

    #[test]
    fn stored_clauses_are_contained() {
        let mut clause_db = ClauseDB::default();
        let p = CLiteral::new("p".into(), true);
        let q = CLiteral::new("q".into(), false);

        let pq = BTreeSet::from([p.clone(), q.clone()]);
        assert!(!clause_db.contains(&pq));

        assert_eq!(clause_db.store(pq.clone()), ClauseOk::Added);
        assert!(clause_db.contains(&BTreeSet::from([q, p.clone()])));
        assert!(!clause_db.contains(&BTreeSet::from([p])));

        assert_eq!(clause_db.store(pq), ClauseOk::Duplicate);
        assert_eq!(clause_db.count(), 1);
    }
}

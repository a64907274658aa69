/*!
The knowledge base --- to which facts are told, and of which queries are asked.

A knowledge base holds a [clause database](crate::db::clause), whose clauses are the *facts* of the knowledge base.

- Telling an expression to a knowledge base converts the expression to [CNF](crate::procedures::cnf) and stores each clause of the result.
  Facts are only ever added, and so the facts of a knowledge base grow with each tell.
- Asking a knowledge base whether a query is entailed by its facts is by refutation.
  The query is negated, converted to CNF, and the resulting clauses are [saturated](crate::procedures::resolution::saturate) alongside (a copy of) the facts.
  If the empty clause is derived, the facts together with the negation of the query are unsatisfiable, and so the facts entail the query.

Asking never revises the facts of a knowledge base.
So, a knowledge base may be asked many queries (and with a shared reference) between tells.

# Example
```rust
# use std::collections::BTreeSet;
# use propositional_kb::context::KnowledgeBase;
# use propositional_kb::structures::expression::Expr;
let [a, b, c] = ["a", "b", "c"].map(Expr::atom);
let mut the_kb = KnowledgeBase::default();

assert!(the_kb.tell(&a).is_ok());
assert!(the_kb.tell(&Expr::implies(a.clone(), b.clone())).is_ok());

assert_eq!(the_kb.ask(&a), Ok(true));
assert_eq!(the_kb.ask(&b), Ok(true));
assert_eq!(the_kb.ask(&c), Ok(false));

assert_eq!(
    the_kb.get_facts(),
    BTreeSet::from([a.clone(), Expr::or([Expr::not(a), b])])
);
```

# Concurrency

Telling requires a unique reference to a knowledge base, while asking requires only a shared reference.
So, to share a knowledge base between threads a [RwLock](std::sync::RwLock) (or [Mutex](std::sync::Mutex)) is sufficient, and each query is answered against a consistent set of facts.
*/

use std::collections::BTreeSet;

use crate::{
    config::Config,
    db::clause::{ClauseDB, ClauseOk},
    misc::log::targets,
    procedures::resolution,
    reports::Report,
    structures::{
        clause::{self, Clause},
        expression::Expr,
    },
    types::err::{self},
};

/// A knowledge base.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    /// The configuration of the knowledge base.
    pub config: Config,

    /// The facts of the knowledge base.
    ///
    /// For inspection only: facts are added through [tell](KnowledgeBase::tell), and replacing the database may remove facts.
    pub clause_db: ClauseDB,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl KnowledgeBase {
    /// A knowledge base with no facts, built from the given config.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            clause_db: ClauseDB::default(),
        }
    }

    /// Adds each clause of the CNF of `expr` to the facts of the knowledge base.
    ///
    /// If any conjunct of the CNF of `expr` is not a clause no fact is added, and a [ClauseError](err::ClauseError) is returned.
    /// Though, as CNF is always a conjunction of clauses, this indicates an issue with the library.
    pub fn tell(&mut self, expr: &Expr) -> Result<(), err::ErrorKind> {
        let cnf = expr.to_cnf();
        let clauses = clause::clauses_of(&cnf)?;

        let mut added = 0;
        for clause in clauses {
            if self.clause_db.store(clause) == ClauseOk::Added {
                added += 1;
            }
        }

        log::debug!(target: targets::CLAUSE_DB, "Told {expr}: {added} fresh facts, {} total", self.clause_db.count());
        Ok(())
    }

    /// Whether the facts of the knowledge base entail `query`.
    ///
    /// An error is returned if a [configured](Config) limit on resolution is reached before entailment is decided.
    pub fn ask(&self, query: &Expr) -> Result<bool, err::ErrorKind> {
        let negated_query = Expr::not(query.clone()).to_cnf();
        let query_clauses = clause::clauses_of(&negated_query)?;

        let working_clauses = self
            .clause_db
            .all_clauses()
            .cloned()
            .chain(query_clauses);

        let report = resolution::saturate(working_clauses, &self.config)?;
        log::debug!(target: targets::RESOLUTION, "Asked {query}: {report}");

        Ok(report == Report::Unsatisfiable)
    }

    /// The facts of the knowledge base, each as an expression.
    ///
    /// A unit clause is given as its literal, and any other clause as the disjunction of its literals.
    pub fn get_facts(&self) -> BTreeSet<Expr> {
        self.clause_db
            .all_clauses()
            .map(|clause| clause.as_expr())
            .collect()
    }

    /// A count of the (distinct) clauses of the knowledge base.
    pub fn clause_count(&self) -> usize {
        self.clause_db.count()
    }
}

//! A library for reasoning with propositional formulas.
//!
//! propositional_kb provides an [expression](structures::expression) type for boolean formulas, [conversion](procedures::cnf) of any expression to conjunctive normal form, and a [knowledge base](context::KnowledgeBase) which answers whether a query is entailed by the facts told to it, by resolution refutation.
//!
//! The library is intended for small problems: puzzles, exercises, and the checking of small arguments.
//! Conversion to CNF is by direct distribution, resolution is by saturation, and the enumeration of satisfying valuations is exhaustive.
//! Each may take time exponential in the size of the input.
//!
//! # Orientation
//!
//! Data flows in one direction:
//! - An [expression](structures::expression::Expr) is built from [atoms](structures::atom).
//! - The expression is [converted](structures::expression::Expr::to_cnf) to CNF.
//! - Each conjunct of the CNF is read as a [clause](structures::clause), and stored in the [clause database](db::clause) of a knowledge base.
//! - A query is answered by [saturating](procedures::resolution::saturate) the stored clauses, together with the clauses of the negated query.
//!
//! Independently, an expression may be [evaluated](structures::expression::Expr::evaluate) on a [valuation](structures::valuation), and the valuations on which an expression is true may be [enumerated](procedures::enumeration).
//!
//! Useful starting points, then, may be:
//! - The [knowledge base](context) to tell facts and ask queries.
//! - The [structures] to familiarise yourself with expressions, literals, and clauses.
//! - The [configuration](config) to see what limits may be placed on resolution.
//!
//! # Examples
//!
//! + Ask which suspect is guilty, given that exactly two of three suspects are innocent, and the testimony of each innocent suspect is true.
//!
//! ```rust
//! # use propositional_kb::context::KnowledgeBase;
//! # use propositional_kb::structures::expression::Expr;
//! # use propositional_kb::types::err::ErrorKind;
//! # fn main() -> Result<(), ErrorKind> {
//! let [ia, ib, ic] = ["innocent_a", "innocent_b", "innocent_c"].map(Expr::atom);
//! let [ka, kb, kc] = ["knows_a", "knows_b", "knows_c"].map(Expr::atom);
//!
//! let mut the_kb = KnowledgeBase::default();
//!
//! // An innocent Adams says Brown knew the victim, and Clark did not.
//! the_kb.tell(&Expr::implies(ia.clone(), Expr::and([kb.clone(), Expr::not(kc.clone())])))?;
//! // An innocent Brown says they did not know the victim.
//! the_kb.tell(&Expr::implies(ib.clone(), Expr::not(kb.clone())))?;
//! // An innocent Clark says Adams and Brown both knew the victim.
//! the_kb.tell(&Expr::implies(ic.clone(), Expr::and([ka, kb])))?;
//!
//! the_kb.tell(&Expr::or([
//!     Expr::and([ia.clone(), ib.clone(), Expr::not(ic.clone())]),
//!     Expr::and([ia.clone(), ic.clone(), Expr::not(ib.clone())]),
//!     Expr::and([ib.clone(), ic.clone(), Expr::not(ia.clone())]),
//! ]))?;
//!
//! assert_eq!(the_kb.ask(&Expr::not(ia))?, false);
//! assert_eq!(the_kb.ask(&Expr::not(ib))?, true);
//! assert_eq!(the_kb.ask(&Expr::not(ic))?, false);
//! # Ok(())
//! # }
//! ```
//!
//! + List the valuations on which an expression is true.
//!
//! ```rust
//! # use propositional_kb::structures::expression::Expr;
//! # use propositional_kb::procedures::enumeration::satisfying_assignments;
//! let [a, j, m] = ["ann", "john", "mary"].map(Expr::atom);
//!
//! let constraints = Expr::and([
//!     Expr::implies(Expr::or([m.clone(), a.clone()]), j.clone()),
//!     Expr::implies(Expr::not(m.clone()), a.clone()),
//!     Expr::implies(a, Expr::not(j)),
//! ]);
//!
//! let valuations = satisfying_assignments(&constraints).collect::<Vec<_>>();
//! assert_eq!(valuations.len(), 1);
//! assert_eq!(valuations[0].get("mary"), Some(&true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets, in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of each round of resolution can be found with `RUST_LOG=resolution=debug …`, or,
//! - Logs related to the clause database can be filtered with `RUST_LOG=clause_db …`

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

/*!
Propositional resolution, and saturation of a set of clauses by resolution.

# Resolution

From clauses *C₁ ∨ l* and *C₂ ∨ ¬l* resolution derives the clause *C₁ ∨ C₂*, the *resolvent* of the two clauses on *l*.

Resolution is sound: any valuation on which both clauses are true is a valuation on which the resolvent is true.
So, if the empty clause is derived from a set of clauses, the set is unsatisfiable.

# Saturation

[saturate] derives resolvents in rounds, until either the empty clause is derived or some round derives no clause which is not already held.
In the first case the clauses are unsatisfiable, and in the second the clauses are satisfiable, as resolution is (refutation) complete.

Each round resolves every pair of held clauses.
Though, a pair of clauses which were both held at the start of the previous round was resolved in the previous round, and each resolvent of the pair is already held.
So, only pairs containing at least one clause added by the previous round are resolved.

Termination is guaranteed, as over *k* atoms there are at most 4<sup>k</sup> distinct clauses (3<sup>k</sup> without tautologies) and any round which does not end saturation adds at least one clause.
Still, the bound is exponential, and so [limits](crate::config::Config) on rounds and clauses may be configured, after which saturation ends with an error.

```rust
# use std::collections::BTreeSet;
# use propositional_kb::config::Config;
# use propositional_kb::procedures::resolution::saturate;
# use propositional_kb::reports::Report;
# use propositional_kb::structures::literal::{CLiteral, Literal};
let p = CLiteral::new("p".into(), true);
let q = CLiteral::new("q".into(), true);

let clauses = [
    BTreeSet::from([p.clone(), q.clone()]),
    BTreeSet::from([p.negate(), q.clone()]),
    BTreeSet::from([p.clone(), q.negate()]),
];
assert_eq!(saturate(clauses.clone(), &Config::default()), Ok(Report::Satisfiable));

let mut clauses = clauses.to_vec();
clauses.push(BTreeSet::from([p.negate(), q.negate()]));
assert_eq!(saturate(clauses, &Config::default()), Ok(Report::Unsatisfiable));
```
*/

use std::collections::BTreeSet;

use crate::{
    config::Config,
    misc::log::targets,
    reports::Report,
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err::{self},
};

/// Every resolvent of `c1` and `c2`.
///
/// A resolvent is derived for each literal of `c1` whose negation is in `c2`, and so a pair of clauses may have no, one, or many resolvents.
///
/// ```rust
/// # use std::collections::BTreeSet;
/// # use propositional_kb::procedures::resolution::resolvents;
/// # use propositional_kb::structures::literal::{CLiteral, Literal};
/// let p = CLiteral::new("p".into(), true);
/// let q = CLiteral::new("q".into(), true);
///
/// let c1 = BTreeSet::from([p.clone(), q.clone()]);
/// let c2 = BTreeSet::from([p.negate(), q.negate()]);
///
/// assert_eq!(
///     resolvents(&c1, &c2),
///     BTreeSet::from([
///         BTreeSet::from([q.clone(), q.negate()]),
///         BTreeSet::from([p.clone(), p.negate()]),
///     ])
/// );
///
/// assert!(resolvents(&c1, &c1).is_empty());
/// ```
pub fn resolvents(c1: &CClause, c2: &CClause) -> BTreeSet<CClause> {
    let mut derived = BTreeSet::default();

    for literal in c1.literals() {
        let complement = literal.negate();
        if c2.contains(&complement) {
            let resolvent: CClause = c1
                .literals()
                .filter(|l| *l != literal)
                .chain(c2.literals().filter(|l| **l != complement))
                .cloned()
                .collect();
            derived.insert(resolvent);
        }
    }

    derived
}

/// Saturates `clauses` by resolution, to determine whether the clauses are satisfiable.
///
/// - [Unsatisfiable](Report::Unsatisfiable), if the empty clause is among, or derived from, the clauses.
/// - [Satisfiable](Report::Satisfiable), if some round derives no clause which is not already held.
///
/// An error is returned if a [configured](Config) limit on rounds or clauses is reached before either.
pub fn saturate(
    clauses: impl IntoIterator<Item = CClause>,
    config: &Config,
) -> Result<Report, err::ResolutionError> {
    let round_limit = config.round_limit.bounded_value();
    let clause_limit = config.clause_limit.bounded_value();
    let tautology_elimination = config.tautology_elimination.value;

    // Held clauses, in order of addition, with a set for membership checks.
    let mut held: Vec<CClause> = Vec::default();
    let mut known: BTreeSet<CClause> = BTreeSet::default();

    for clause in clauses {
        if known.insert(clause.clone()) {
            held.push(clause);
        }
    }

    if known.contains(&CClause::default()) {
        log::info!(target: targets::RESOLUTION, "Empty clause given");
        return Ok(Report::Unsatisfiable);
    }

    if held.len() > clause_limit {
        log::info!(target: targets::RESOLUTION, "{} clauses given, limit {clause_limit}", held.len());
        return Err(err::ResolutionError::ClauseLimit(clause_limit));
    }

    // The index of the first clause added by the previous round.
    let mut fresh = 0;
    let mut round = 0;

    loop {
        if round == round_limit {
            log::info!(target: targets::RESOLUTION, "Round limit of {round_limit} reached");
            return Err(err::ResolutionError::RoundLimit(round_limit));
        }
        round += 1;

        let mut derived: BTreeSet<CClause> = BTreeSet::default();

        for j in fresh..held.len() {
            for i in 0..j {
                for resolvent in resolvents(&held[i], &held[j]) {
                    if resolvent.is_empty() {
                        log::info!(target: targets::RESOLUTION,
                            "Refutation in round {round}, from {} and {}",
                            held[i].as_string(), held[j].as_string()
                        );
                        return Ok(Report::Unsatisfiable);
                    }

                    if tautology_elimination && resolvent.is_tautology() {
                        continue;
                    }

                    if !known.contains(&resolvent) {
                        derived.insert(resolvent);
                    }
                }
            }
        }

        log::debug!(target: targets::RESOLUTION,
            "Round {round}: {} fresh clauses from {} held",
            derived.len(), held.len()
        );

        if derived.is_empty() {
            log::info!(target: targets::RESOLUTION, "Saturated in round {round} with {} clauses", held.len());
            return Ok(Report::Satisfiable);
        }

        if known.len() + derived.len() > clause_limit {
            log::info!(target: targets::RESOLUTION, "Clause limit of {clause_limit} reached in round {round}");
            return Err(err::ResolutionError::ClauseLimit(clause_limit));
        }

        fresh = held.len();
        for resolvent in derived {
            log::trace!(target: targets::RESOLUTION, "Derived {}", resolvent.as_string());
            known.insert(resolvent.clone());
            held.push(resolvent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::CLiteral;

    fn literal(name: &str, polarity: bool) -> CLiteral {
        CLiteral::new(name.into(), polarity)
    }

    fn clause(literals: &[(&str, bool)]) -> CClause {
        literals
            .iter()
            .map(|(name, polarity)| literal(name, *polarity))
            .collect()
    }

    #[test]
    fn unit_resolution() {
        let derived = resolvents(&clause(&[("p", true)]), &clause(&[("p", false)]));
        assert_eq!(derived, BTreeSet::from([CClause::default()]));
    }

    #[test]
    fn no_complement() {
        let derived = resolvents(&clause(&[("p", true)]), &clause(&[("q", false)]));
        assert!(derived.is_empty());
    }

    #[test]
    fn resolvent_is_union() {
        let derived = resolvents(
            &clause(&[("p", true), ("q", true)]),
            &clause(&[("p", false), ("r", false)]),
        );
        assert_eq!(derived, BTreeSet::from([clause(&[("q", true), ("r", false)])]));
    }

    #[test]
    fn empty_clause_given() {
        let clauses = [CClause::default(), clause(&[("p", true)])];
        assert_eq!(saturate(clauses, &Config::default()), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn no_clauses() {
        assert_eq!(saturate([], &Config::default()), Ok(Report::Satisfiable));
    }

    #[test]
    fn chain() {
        // p, p → q, q → r, ¬r
        let clauses = [
            clause(&[("p", true)]),
            clause(&[("p", false), ("q", true)]),
            clause(&[("q", false), ("r", true)]),
            clause(&[("r", false)]),
        ];
        assert_eq!(saturate(clauses, &Config::default()), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn round_limit() {
        // Refutation requires more than one round.
        let clauses = [
            clause(&[("p", true)]),
            clause(&[("p", false), ("q", true)]),
            clause(&[("q", false), ("r", true)]),
            clause(&[("r", false)]),
            clause(&[("s", true), ("t", true)]),
        ];

        let mut config = Config::default();
        config.round_limit.value = 1;
        let result = saturate(clauses.clone(), &config);
        // Each pair of unit clauses and binary clauses resolves to a unit, but no pair resolves to the empty clause.
        assert_eq!(result, Err(err::ResolutionError::RoundLimit(1)));

        config.round_limit.value = 3;
        assert_eq!(saturate(clauses, &config), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn clause_limit() {
        let clauses = [
            clause(&[("p", true), ("q", true)]),
            clause(&[("p", false), ("r", true)]),
            clause(&[("q", false), ("s", true)]),
        ];

        let mut config = Config::default();
        config.clause_limit.value = 3;
        assert_eq!(
            saturate(clauses, &config),
            Err(err::ResolutionError::ClauseLimit(3))
        );
    }

    #[test]
    fn tautology_elimination() {
        let clauses = [
            clause(&[("p", true), ("q", true)]),
            clause(&[("p", false), ("q", false)]),
        ];

        let mut config = Config::default();
        assert_eq!(saturate(clauses.clone(), &config), Ok(Report::Satisfiable));

        config.tautology_elimination.value = true;
        config.clause_limit.value = 2;
        // Each resolvent is a tautology, and so no clause is added.
        assert_eq!(saturate(clauses, &config), Ok(Report::Satisfiable));
    }
}

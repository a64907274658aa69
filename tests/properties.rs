//! Checks of conversion, comparison, and entailment against exhaustive evaluation, on seeded random expressions.

use std::{
    cmp::Ordering,
    hash::{BuildHasher, RandomState},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

use propositional_kb::{
    context::KnowledgeBase,
    procedures::{cnf::is_cnf, enumeration::satisfying_assignments},
    structures::{expression::Expr, valuation::CValuation},
};

const ATOMS: [&str; 4] = ["p", "q", "r", "s"];

const TRIALS: usize = 256;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A random expression over [ATOMS] of at most the given depth.
fn random_expr(rng: &mut StdRng, depth: usize) -> Expr {
    let atom = Expr::atom(ATOMS[rng.random_range(0..ATOMS.len())]);
    if depth == 0 {
        return match rng.random_bool(0.5) {
            true => atom,
            false => Expr::not(atom),
        };
    }

    match rng.random_range(0..7) {
        0 => atom,
        1 => Expr::not(random_expr(rng, depth - 1)),
        2 => {
            let count = rng.random_range(0..4);
            Expr::and((0..count).map(|_| random_expr(rng, depth - 1)).collect::<Vec<_>>())
        }
        3 => {
            let count = rng.random_range(0..4);
            Expr::or((0..count).map(|_| random_expr(rng, depth - 1)).collect::<Vec<_>>())
        }
        4 => Expr::implies(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
        _ => Expr::iff(random_expr(rng, depth - 1), random_expr(rng, depth - 1)),
    }
}

/// The expression, with the operands of every equivalence swapped.
fn mirror(expr: &Expr) -> Expr {
    match expr {
        Expr::Atom(_) => expr.clone(),
        Expr::Not(arg) => Expr::not(mirror(arg)),
        Expr::And(conjuncts) => Expr::and(conjuncts.iter().map(mirror)),
        Expr::Or(disjuncts) => Expr::or(disjuncts.iter().map(mirror)),
        Expr::Implies(left, right) => Expr::implies(mirror(left), mirror(right)),
        Expr::Iff(left, right) => Expr::iff(mirror(right), mirror(left)),
    }
}

/// Every valuation over [ATOMS].
fn all_valuations() -> Vec<CValuation> {
    (0..1_usize << ATOMS.len())
        .map(|bits| {
            ATOMS
                .iter()
                .enumerate()
                .map(|(index, name)| ((*name).into(), bits & (1 << index) != 0))
                .collect::<CValuation>()
        })
        .collect()
}

mod cnf {
    use super::*;

    #[test]
    fn equivalent() {
        let mut rng = StdRng::seed_from_u64(0);
        let valuations = all_valuations();

        for _ in 0..TRIALS {
            let expr = random_expr(&mut rng, 3);
            let cnf = expr.to_cnf();

            for valuation in &valuations {
                assert_eq!(
                    expr.evaluate(valuation),
                    cnf.evaluate(valuation),
                    "{expr} and {cnf} differ on {valuation:?}"
                );
            }
        }
    }

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..TRIALS {
            let expr = random_expr(&mut rng, 3);
            let cnf = expr.to_cnf();

            assert!(is_cnf(&cnf), "{cnf} from {expr}");
            assert_eq!(cnf.to_cnf(), cnf);
        }
    }

    #[test]
    fn atoms_are_preserved_or_dropped() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..TRIALS {
            let expr = random_expr(&mut rng, 3);
            assert!(expr.to_cnf().atom_names().is_subset(&expr.atom_names()));
        }
    }
}

mod comparison {
    use super::*;

    #[test]
    fn mirrored_equivalences_are_equal() {
        let mut rng = StdRng::seed_from_u64(3);
        let hasher = RandomState::new();

        for _ in 0..TRIALS {
            let expr = random_expr(&mut rng, 3);
            let mirrored = mirror(&expr);

            assert_eq!(expr, mirrored);
            assert_eq!(expr.cmp(&mirrored), Ordering::Equal);
            assert_eq!(hasher.hash_one(&expr), hasher.hash_one(&mirrored));
            assert_eq!(expr.to_cnf(), mirrored.to_cnf());
        }
    }

    #[test]
    fn order_agrees_with_equality() {
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..TRIALS {
            let x = random_expr(&mut rng, 2);
            let y = random_expr(&mut rng, 2);

            assert_eq!(x == y, x.cmp(&y) == Ordering::Equal);
            assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
        }
    }
}

mod entailment {
    use super::*;

    #[test]
    fn agrees_with_enumeration() {
        init_logs();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..TRIALS / 4 {
            let mut the_kb = KnowledgeBase::default();
            let mut facts = Vec::default();

            for _ in 0..rng.random_range(0..4) {
                let fact = random_expr(&mut rng, 2);
                assert!(the_kb.tell(&fact).is_ok());
                facts.push(fact);
            }

            let query = random_expr(&mut rng, 2);

            let mut counterexample = facts.clone();
            counterexample.push(Expr::not(query.clone()));
            let entailed = satisfying_assignments(&Expr::and(counterexample))
                .next()
                .is_none();

            assert_eq!(
                the_kb.ask(&query),
                Ok(entailed),
                "facts {facts:?}, query {query}"
            );
        }
    }

    #[test]
    fn tautology_elimination_does_not_change_answers() {
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..TRIALS / 4 {
            let mut unlimited = KnowledgeBase::default();
            let mut eliminating = KnowledgeBase::default();
            eliminating.config.tautology_elimination.value = true;

            for _ in 0..rng.random_range(1..4) {
                let fact = random_expr(&mut rng, 2);
                assert!(unlimited.tell(&fact).is_ok());
                assert!(eliminating.tell(&fact).is_ok());
            }

            let query = random_expr(&mut rng, 2);
            assert_eq!(unlimited.ask(&query), eliminating.ask(&query));
        }
    }
}

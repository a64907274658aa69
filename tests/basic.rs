use std::collections::{BTreeMap, BTreeSet};

use propositional_kb::{
    context::KnowledgeBase,
    procedures::enumeration::satisfying_assignments,
    structures::{atom::Atom, expression::Expr, valuation::CValuation},
    types::err::{self},
};

fn abc() -> [Expr; 3] {
    ["a", "b", "c"].map(Expr::atom)
}

mod expressions {
    use super::*;

    #[test]
    fn atom_equality() {
        assert_eq!(Expr::atom("a"), Expr::atom("a"));
        assert_ne!(Expr::atom("a"), Expr::atom("b"));
    }

    #[test]
    fn conjunction_is_a_set() {
        let [a, b, _] = abc();
        assert_eq!(
            Expr::and([a.clone(), Expr::not(b.clone())]),
            Expr::and([Expr::not(b), a])
        );
    }

    #[test]
    fn atom_names() {
        let [a, b, c] = abc();
        let expr = Expr::and([a.clone(), Expr::implies(b, Expr::iff(a, c))]);

        assert_eq!(
            expr.atom_names(),
            BTreeSet::from(["a", "b", "c"].map(Atom::from))
        );
    }

    #[test]
    fn implication_evaluation() {
        let [a, b, _] = abc();
        let e = Expr::implies(a, b);

        assert_eq!(e.evaluate(&BTreeMap::from([("a", false), ("b", true)])), Ok(true));
        assert_eq!(e.evaluate(&BTreeMap::from([("a", true), ("b", false)])), Ok(false));
    }

    #[test]
    fn incomplete_valuation() {
        let [a, b, _] = abc();
        let e = Expr::iff(a, b);

        assert_eq!(
            e.evaluate(&BTreeMap::from([("b", true)])),
            Err(err::EvaluationError::UnassignedAtom("a".into()))
        );
    }

    #[test]
    fn implication_assignments() {
        let [a, b, _] = abc();
        let assignments = satisfying_assignments(&Expr::implies(a, b)).collect::<Vec<_>>();

        let valuation = |a: bool, b: bool| CValuation::from([("a".into(), a), ("b".into(), b)]);
        assert_eq!(
            assignments,
            vec![
                valuation(false, false),
                valuation(false, true),
                valuation(true, true)
            ]
        );
    }
}

mod knowledge_base {
    use super::*;

    #[test]
    fn modus_ponens() {
        let [a, b, c] = abc();
        let mut the_kb = KnowledgeBase::default();

        assert!(the_kb.tell(&a).is_ok());
        assert!(the_kb.tell(&Expr::implies(a.clone(), b.clone())).is_ok());

        assert_eq!(
            the_kb.get_facts(),
            BTreeSet::from([a.clone(), Expr::or([b.clone(), Expr::not(a.clone())])])
        );

        let answers = [&a, &b, &c].map(|query| the_kb.ask(query));
        assert_eq!(answers, [Ok(true), Ok(true), Ok(false)]);
    }

    #[test]
    fn equivalence_with_negation() {
        let [a, b, c] = abc();
        let mut the_kb = KnowledgeBase::default();

        assert!(the_kb.tell(&Expr::iff(a.clone(), Expr::or([b.clone(), c.clone()]))).is_ok());
        assert!(the_kb.tell(&Expr::not(a.clone())).is_ok());

        assert_eq!(the_kb.ask(&a), Ok(false));
        assert_eq!(the_kb.ask(&Expr::not(a)), Ok(true));

        // As a ↔ (b ∨ c) and ¬a, neither b nor c.
        assert_eq!(the_kb.ask(&b), Ok(false));
        assert_eq!(the_kb.ask(&Expr::not(b.clone())), Ok(true));
        assert_eq!(the_kb.ask(&c), Ok(false));
        assert_eq!(the_kb.ask(&Expr::not(c.clone())), Ok(true));

        assert_eq!(
            the_kb.ask(&Expr::or([Expr::not(b.clone()), Expr::not(c.clone())])),
            Ok(true)
        );
        assert_eq!(the_kb.ask(&Expr::not(Expr::or([b, c]))), Ok(true));
    }

    #[test]
    fn underdetermined() {
        let [a, b, c] = abc();
        let mut the_kb = KnowledgeBase::default();

        assert!(the_kb.tell(&Expr::iff(a.clone(), Expr::or([b.clone(), c.clone()]))).is_ok());
        assert!(the_kb.tell(&a).is_ok());

        assert_eq!(the_kb.ask(&Expr::or([b.clone(), c.clone()])), Ok(true));
        assert_eq!(the_kb.ask(&b), Ok(false));
        assert_eq!(the_kb.ask(&Expr::not(b)), Ok(false));
        assert_eq!(the_kb.ask(&c), Ok(false));
        assert_eq!(the_kb.ask(&Expr::not(c)), Ok(false));
    }

    #[test]
    fn facts_grow_monotonically() {
        let [a, b, c] = abc();
        let mut the_kb = KnowledgeBase::default();

        let mut previous = the_kb.get_facts();
        for expr in [
            Expr::or([a.clone(), b.clone()]),
            Expr::implies(b.clone(), c.clone()),
            Expr::iff(a, c),
            Expr::not(b),
        ] {
            assert!(the_kb.tell(&expr).is_ok());
            let current = the_kb.get_facts();
            assert!(previous.is_subset(&current));
            previous = current;
        }
    }

    #[test]
    fn error_display() {
        let mut config = propositional_kb::config::Config::default();
        config.round_limit.value = 1;

        let [a, b, c] = abc();
        let mut the_kb = KnowledgeBase::from_config(config);
        assert!(the_kb.tell(&Expr::implies(a.clone(), b.clone())).is_ok());
        assert!(the_kb.tell(&Expr::implies(b, c.clone())).is_ok());
        assert!(the_kb.tell(&a).is_ok());

        match the_kb.ask(&c) {
            Err(e) => assert_eq!(e.to_string(), "no refutation within 1 rounds of resolution"),
            Ok(answer) => panic!("Unexpected answer {answer}"),
        }
    }
}

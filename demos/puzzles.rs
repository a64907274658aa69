use propositional_kb::{
    context::KnowledgeBase,
    procedures::enumeration::satisfying_assignments,
    structures::{expression::Expr, valuation},
    types::err::ErrorKind,
};

/// A few logic puzzles, each written as facts told to a knowledge base, and answered by asking queries.
///
/// To see each round of resolution, run with logs, e.g. `RUST_LOG=resolution=debug`.
fn main() -> Result<(), ErrorKind> {
    env_logger::init();

    unicorn()?;
    party();
    rooms()?;
    murder()?;

    Ok(())
}

/// If the unicorn is mythical, then it is immortal.
/// If it is not mythical, then it is a mortal mammal.
/// If the unicorn is either immortal or a mammal, then it is horned.
/// The unicorn is magical if it is horned.
fn unicorn() -> Result<(), ErrorKind> {
    let [mythical, mortal, immortal, mammal, horned, magical] =
        ["mythical", "mortal", "immortal", "mammal", "horned", "magical"].map(Expr::atom);

    let mut the_kb = KnowledgeBase::default();
    the_kb.tell(&Expr::implies(mythical.clone(), immortal.clone()))?;
    the_kb.tell(&Expr::implies(
        Expr::not(mythical.clone()),
        Expr::and([mortal, mammal.clone()]),
    ))?;
    the_kb.tell(&Expr::implies(Expr::or([immortal, mammal]), horned.clone()))?;
    the_kb.tell(&Expr::implies(horned.clone(), magical.clone()))?;

    println!("Unicorn");
    for query in [mythical, horned, magical] {
        println!("  {query}? {}", the_kb.ask(&query)?);
    }

    Ok(())
}

/// John comes if either Mary or Ann comes.
/// Ann comes if Mary does not come.
/// If Ann comes, then John will not come.
fn party() {
    let [ann, john, mary] = ["ann", "john", "mary"].map(Expr::atom);

    let constraints = Expr::and([
        Expr::implies(Expr::or([mary.clone(), ann.clone()]), john.clone()),
        Expr::implies(Expr::not(mary), ann.clone()),
        Expr::implies(ann, Expr::not(john)),
    ]);

    println!("Party");
    for scenario in satisfying_assignments(&constraints) {
        println!("  {}", valuation::valuation_string(&scenario));
    }
}

/// There are two rooms, each with a sign, and exactly one sign is true.
/// The first sign reads: this room has a prize, and the other room is empty.
/// The second sign reads: at least one room has a prize, and at least one room is empty.
fn rooms() -> Result<(), ErrorKind> {
    let [p1, e1, p2, e2, s1, s2] = ["p1", "e1", "p2", "e2", "s1", "s2"].map(Expr::atom);

    let mut the_kb = KnowledgeBase::default();
    the_kb.tell(&Expr::implies(s1.clone(), Expr::and([p1.clone(), e2.clone()])))?;
    the_kb.tell(&Expr::implies(
        s2.clone(),
        Expr::and([
            Expr::or([p1.clone(), p2.clone()]),
            Expr::or([e1.clone(), e2.clone()]),
        ]),
    ))?;
    the_kb.tell(&Expr::iff(s1.clone(), Expr::not(s2.clone())))?;
    the_kb.tell(&Expr::iff(p1.clone(), Expr::not(e1.clone())))?;
    the_kb.tell(&Expr::iff(p2.clone(), Expr::not(e2.clone())))?;

    println!("Rooms");
    for query in [p1, e1, p2, e2, s1, s2] {
        println!("  {query}? {}", the_kb.ask(&query)?);
    }

    Ok(())
}

/// Of Adams, Brown, and Clark, exactly one is guilty, and each innocent suspect speaks the truth.
/// Adams says Brown knew the victim, and Clark did not.
/// Brown says they did not know the victim.
/// Clark says Adams and Brown both knew the victim.
fn murder() -> Result<(), ErrorKind> {
    let [ia, ib, ic] = ["ia", "ib", "ic"].map(Expr::atom);
    let [ka, kb, kc] = ["ka", "kb", "kc"].map(Expr::atom);

    let mut the_kb = KnowledgeBase::default();
    the_kb.tell(&Expr::implies(ia.clone(), Expr::and([kb.clone(), Expr::not(kc)])))?;
    the_kb.tell(&Expr::implies(ib.clone(), Expr::not(kb.clone())))?;
    the_kb.tell(&Expr::implies(ic.clone(), Expr::and([ka, kb])))?;
    the_kb.tell(&Expr::or([
        Expr::and([ia.clone(), ib.clone(), Expr::not(ic.clone())]),
        Expr::and([ia.clone(), ic.clone(), Expr::not(ib.clone())]),
        Expr::and([ib.clone(), ic.clone(), Expr::not(ia.clone())]),
    ]))?;

    println!("Murder");
    for (suspect, innocent) in [("Adams", ia), ("Brown", ib), ("Clark", ic)] {
        if the_kb.ask(&Expr::not(innocent))? {
            println!("  {suspect} is guilty");
        }
    }

    Ok(())
}

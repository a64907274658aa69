use propositional_kb::{
    procedures::enumeration::satisfying_assignments,
    structures::{expression::Expr, valuation},
};

/// Each valuation on which some expression is true is printed, one per line.
/// The count of valuations is then checked against the count of valuations on which the negation of the expression is true.
fn main() {
    let atoms = "model".chars().map(|c| Expr::atom(c.to_string())).collect::<Vec<_>>();

    // An odd number of the atoms are true.
    let parity = atoms
        .iter()
        .cloned()
        .reduce(|left, right| Expr::not(Expr::iff(left, right)))
        .unwrap_or_else(|| Expr::or([]));

    let mut count = 0;
    for assignment in satisfying_assignments(&parity) {
        count += 1;
        println!("v {count}\t {}", valuation::valuation_string(&assignment));
    }

    let complement = satisfying_assignments(&Expr::not(parity.clone())).count();
    println!("{count} of {} valuations satisfy {parity}", count + complement);

    let distinct_atoms = parity.atom_names().len();
    assert_eq!(count + complement, 2_usize.pow(distinct_atoms as u32));
}

//! Reports on the satisfiability of a set of clauses.

/// The satisfiability of a set of clauses, as determined by [saturation](crate::procedures::resolution::saturate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// Saturation finished without deriving the empty clause.
    Satisfiable,

    /// The empty clause was derived.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

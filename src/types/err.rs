//! Error types used in the library.
//!
//! - None of these are expected during ordinary use, and each points to some precondition the caller failed to meet.
//! - Each is local to a single call: stored facts are never left partially updated, and so a context remains usable after an error is returned.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, expression::Expr};

/// Any error from the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Clause(ClauseError),
    Evaluation(EvaluationError),
    Resolution(ResolutionError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clause(ClauseError::MalformedLiteral(expr)) => {
                write!(f, "{expr} is not a literal")
            }

            Self::Evaluation(EvaluationError::UnassignedAtom(atom)) => {
                write!(f, "no value for the atom {atom}")
            }

            Self::Resolution(ResolutionError::RoundLimit(limit)) => {
                write!(f, "no refutation within {limit} rounds of resolution")
            }

            Self::Resolution(ResolutionError::ClauseLimit(limit)) => {
                write!(f, "no refutation within {limit} clauses")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when reading a clause from an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// Some disjunct is neither an atom nor a negated atom.
    ///
    /// Expressions in CNF never contain such a disjunct, and so this suggests conversion to CNF was bypassed.
    MalformedLiteral(Expr),
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors when evaluating an expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The assignment has no value for the atom.
    /// No default is substituted, as an assignment should be total on the atoms of an expression.
    UnassignedAtom(Atom),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

/// Errors during resolution.
///
/// Saturation always terminates, though possibly only after exponentially many rounds.
/// These are returned when a [configured](crate::config::Config) limit is reached first, and so leave entailment undecided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The limit on rounds of resolution was reached.
    RoundLimit(usize),

    /// The limit on the size of the working clause set was reached.
    ClauseLimit(usize),
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

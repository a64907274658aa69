//! Implementation details of the [literal trait](Literal) for the [ABLiteral] structure.

use crate::{
    structures::{
        atom::Atom,
        expression::Expr,
        literal::{ABLiteral, Literal},
    },
    types::err::{self},
};

impl Literal for ABLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> &Atom {
        &self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for ABLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity == other.polarity
    }
}

impl Eq for ABLiteral {}

impl std::hash::Hash for ABLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "¬{}", self.atom),
        }
    }
}

// From

impl From<ABLiteral> for Expr {
    fn from(literal: ABLiteral) -> Self {
        match literal.polarity {
            true => Expr::Atom(literal.atom),
            false => Expr::not(Expr::Atom(literal.atom)),
        }
    }
}

impl TryFrom<&Expr> for ABLiteral {
    type Error = err::ClauseError;

    fn try_from(expr: &Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Atom(atom) => Ok(ABLiteral::new(atom.clone(), true)),

            Expr::Not(arg) => match arg.as_ref() {
                Expr::Atom(atom) => Ok(ABLiteral::new(atom.clone(), false)),
                _ => Err(err::ClauseError::MalformedLiteral(expr.clone())),
            },

            _ => Err(err::ClauseError::MalformedLiteral(expr.clone())),
        }
    }
}

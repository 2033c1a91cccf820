//! Propositional literals

use super::interner::{AtomId, Interner};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A literal (positive or negative atom)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub atom: AtomId,
    pub polarity: bool, // true = positive, false = negative
}

impl Literal {
    pub fn new(atom: AtomId, negated: bool) -> Self {
        Literal {
            atom,
            polarity: !negated,
        }
    }

    /// Create a new positive literal
    pub fn positive(atom: AtomId) -> Self {
        Literal {
            atom,
            polarity: true,
        }
    }

    /// Create a new negative literal
    pub fn negative(atom: AtomId) -> Self {
        Literal {
            atom,
            polarity: false,
        }
    }

    pub fn atom(&self) -> AtomId {
        self.atom
    }

    pub fn is_negated(&self) -> bool {
        !self.polarity
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// Format this literal with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> LiteralDisplay<'a> {
        LiteralDisplay {
            literal: self,
            interner,
        }
    }
}

/// Canonical order: by atom, positive before negative.
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atom
            .cmp(&other.atom)
            .then_with(|| other.polarity.cmp(&self.polarity))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Display wrapper for Literal that includes an interner for name resolution
pub struct LiteralDisplay<'a> {
    literal: &'a Literal,
    interner: &'a Interner,
}

impl<'a> fmt::Display for LiteralDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.literal.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.interner.resolve_atom(self.literal.atom))
    }
}

// Display implementation that shows IDs (for debugging without interner)
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.polarity {
            write!(f, "~")?;
        }
        write!(f, "{}", self.atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement() {
        let mut interner = Interner::new();
        let p = interner.intern_atom("P");

        let lit = Literal::positive(p);
        let comp = lit.complement();

        assert_eq!(comp, Literal::negative(p));
        assert!(comp.is_negated());
        assert_ne!(lit, comp);
        assert_eq!(comp.complement(), lit);
    }

    #[test]
    fn test_new_matches_helpers() {
        let mut interner = Interner::new();
        let p = interner.intern_atom("P");

        assert_eq!(Literal::new(p, false), Literal::positive(p));
        assert_eq!(Literal::new(p, true), Literal::negative(p));
    }

    #[test]
    fn test_canonical_order() {
        let mut interner = Interner::new();
        let p = interner.intern_atom("P");
        let q = interner.intern_atom("Q");

        let mut lits = vec![
            Literal::negative(q),
            Literal::positive(q),
            Literal::negative(p),
            Literal::positive(p),
        ];
        lits.sort();
        assert_eq!(
            lits,
            vec![
                Literal::positive(p),
                Literal::negative(p),
                Literal::positive(q),
                Literal::negative(q),
            ]
        );
    }

    #[test]
    fn test_display() {
        let mut interner = Interner::new();
        let p = interner.intern_atom("P");

        assert_eq!(Literal::positive(p).display(&interner).to_string(), "P");
        assert_eq!(Literal::negative(p).display(&interner).to_string(), "~P");
        assert_eq!(Literal::negative(p).to_string(), "~A0");
    }
}

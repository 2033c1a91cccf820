//! Clauses: immutable sets of literals read as a disjunction

use super::interner::Interner;
use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A clause (disjunction of literals)
///
/// Literals are kept sorted in canonical order and deduplicated, so the
/// derived `Eq`/`Hash` compare set content regardless of construction order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Literal>", into = "Vec<Literal>")]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Create a new clause from literals (duplicates are dropped)
    pub fn new(mut literals: Vec<Literal>) -> Self {
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// The empty clause (contradiction)
    pub fn empty() -> Self {
        Clause {
            literals: Vec::new(),
        }
    }

    /// Literals in canonical order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// Number of distinct literals
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Check if this clause contains a literal together with its complement
    pub fn is_tautology(&self) -> bool {
        // Complementary literals are adjacent in canonical order
        self.literals
            .windows(2)
            .any(|pair| pair[0].atom == pair[1].atom)
    }

    /// Resolve this clause with `other` on `pivot`.
    ///
    /// `pivot` must occur in `self` and its complement in `other`. The
    /// resolvent holds every other literal of both clauses; `None` means there
    /// is no useful resolvent because it would be a tautology.
    pub fn resolve(&self, other: &Clause, pivot: &Literal) -> Option<Clause> {
        let complement = pivot.complement();
        let applicable = self.contains(pivot) && other.contains(&complement);
        debug_assert!(
            applicable,
            "resolve: pivot {} is not complementary between {} and {}",
            pivot, self, other
        );
        if !applicable {
            return None;
        }

        let literals = self
            .literals
            .iter()
            .filter(|lit| *lit != pivot)
            .chain(other.literals.iter().filter(|lit| **lit != complement))
            .copied()
            .collect();
        let resolvent = Clause::new(literals);

        if resolvent.is_tautology() {
            None
        } else {
            Some(resolvent)
        }
    }

    /// Format this clause with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> ClauseDisplay<'a> {
        ClauseDisplay {
            clause: self,
            interner,
        }
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl From<Clause> for Vec<Literal> {
    fn from(clause: Clause) -> Self {
        clause.literals
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

/// Smaller clauses first; equal sizes fall back to the canonical literal
/// sequence, so this is a total order consistent with `Eq`.
impl Ord for Clause {
    fn cmp(&self, other: &Self) -> Ordering {
        self.literals
            .len()
            .cmp(&other.literals.len())
            .then_with(|| self.literals.cmp(&other.literals))
    }
}

impl PartialOrd for Clause {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Display wrapper for Clause that includes an interner for name resolution
pub struct ClauseDisplay<'a> {
    clause: &'a Clause,
    interner: &'a Interner,
}

impl<'a> fmt::Display for ClauseDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.clause.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit.display(self.interner))?;
        }
        write!(f, "}}")
    }
}

// Display implementation that shows IDs (for debugging without interner)
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, "}}")
    }
}

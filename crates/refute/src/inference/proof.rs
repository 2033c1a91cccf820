//! Proof reconstruction and checking
//!
//! Once the empty clause is found, the derivation records are walked
//! backwards from it and the clauses the proof actually uses are numbered in
//! post-order, continuing after the premise numbers. Each derived line cites
//! the numbers of its two parents, which are always printed first.

use super::derivation::ProofRecorder;
use crate::index::ClauseIndex;
use crate::logic::{Clause, Interner};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// A numbered line of the transcript: a premise or a derived clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofLine {
    pub number: usize,
    pub clause_idx: usize,
    pub clause: Clause,
    /// Line numbers of the two parents (None for premises)
    pub parents: Option<[usize; 2]>,
}

impl ProofLine {
    pub fn premise(number: usize, clause_idx: usize, clause: Clause) -> Self {
        ProofLine {
            number,
            clause_idx,
            clause,
            parents: None,
        }
    }

    pub fn is_premise(&self) -> bool {
        self.parents.is_none()
    }

    /// Format this line with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> ProofLineDisplay<'a> {
        ProofLineDisplay {
            line: self,
            interner,
        }
    }
}

/// Display wrapper rendering `3. {} 1,2`
pub struct ProofLineDisplay<'a> {
    line: &'a ProofLine,
    interner: &'a Interner,
}

impl<'a> fmt::Display for ProofLineDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}",
            self.line.number,
            self.line.clause.display(self.interner)
        )?;
        if let Some([left, right]) = self.line.parents {
            write!(f, " {},{}", left, right)?;
        }
        Ok(())
    }
}

/// A refutation: the derived lines leading to the empty clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub lines: Vec<ProofLine>,
    pub empty_clause_idx: usize,
}

/// Number and emit the derivation of `empty_clause_idx`.
///
/// `numbering` holds the premise numbers (clause idx -> line number) and
/// `next_number` the first free number after them. Uses an explicit stack of
/// `(clause_idx, children_visited)` frames, so deep derivation chains cannot
/// overflow the call stack.
pub fn reconstruct(
    empty_clause_idx: usize,
    index: &ClauseIndex,
    recorder: &ProofRecorder,
    numbering: &HashMap<usize, usize>,
    next_number: usize,
) -> Vec<ProofLine> {
    let mut numbering = numbering.clone();
    let mut printed = HashSet::new();
    let mut lines = Vec::new();
    let mut next_number = next_number;
    let mut stack = vec![(empty_clause_idx, false)];

    while let Some((clause_idx, children_visited)) = stack.pop() {
        // Premises were shown at load time
        let Some(derivation) = recorder.derivation(clause_idx) else {
            continue;
        };

        if !children_visited {
            if !printed.contains(&clause_idx) {
                let [left, right] = derivation.premises;
                stack.push((clause_idx, true));
                stack.push((right, false));
                stack.push((left, false));
            }
            continue;
        }

        if !printed.insert(clause_idx) {
            continue;
        }
        let parents = derivation.premises.map(|parent| numbering[&parent]);
        numbering.insert(clause_idx, next_number);
        lines.push(ProofLine {
            number: next_number,
            clause_idx,
            clause: index.get(clause_idx).clone(),
            parents: Some(parents),
        });
        next_number += 1;
    }

    lines
}

/// Errors found while checking a transcript
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("line {number}: derived line has no parents")]
    MissingParents { number: usize },

    #[error("line {number}: cites line {parent}, which is not an earlier line")]
    InvalidPremise { number: usize, parent: usize },

    #[error("line {number}: line numbers must increase")]
    OutOfOrder { number: usize },

    #[error("line {number}: not a resolvent of lines {left} and {right}")]
    InvalidConclusion {
        number: usize,
        left: usize,
        right: usize,
    },

    #[error("proof does not end in the empty clause")]
    NoContradiction,
}

/// Check a transcript against the premises it was produced from.
///
/// Every derived line must cite two strictly smaller line numbers and be a
/// non-tautological resolvent of them; the last line must be the empty
/// clause. An empty transcript is accepted only when a premise is already
/// the empty clause.
pub fn verify_proof(premises: &[ProofLine], transcript: &[ProofLine]) -> Result<(), VerificationError> {
    let mut known: HashMap<usize, &Clause> = premises
        .iter()
        .map(|line| (line.number, &line.clause))
        .collect();
    let mut last_number = premises.iter().map(|line| line.number).max().unwrap_or(0);

    for line in transcript {
        let number = line.number;
        if number <= last_number {
            return Err(VerificationError::OutOfOrder { number });
        }
        let [left, right] = line
            .parents
            .ok_or(VerificationError::MissingParents { number })?;

        let parent_clause = |parent: usize| {
            known
                .get(&parent)
                .copied()
                .filter(|_| parent < number)
                .ok_or(VerificationError::InvalidPremise { number, parent })
        };
        let left_clause = parent_clause(left)?;
        let right_clause = parent_clause(right)?;

        if !is_resolvent(left_clause, right_clause, &line.clause) {
            return Err(VerificationError::InvalidConclusion {
                number,
                left,
                right,
            });
        }

        known.insert(number, &line.clause);
        last_number = number;
    }

    let contradiction = match transcript.last() {
        Some(line) => line.clause.is_empty(),
        None => premises.iter().any(|line| line.clause.is_empty()),
    };
    if contradiction {
        Ok(())
    } else {
        Err(VerificationError::NoContradiction)
    }
}

/// True if `conclusion` is obtained by resolving `left` with `right` on some
/// complementary pair.
fn is_resolvent(left: &Clause, right: &Clause, conclusion: &Clause) -> bool {
    left.iter()
        .filter(|lit| right.contains(&lit.complement()))
        .any(|pivot| left.resolve(right, pivot).as_ref() == Some(conclusion))
}

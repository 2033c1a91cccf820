//! Clause derivation tracking.
//!
//! Records how each derived clause was obtained: the two clauses that were
//! resolved and the pivot literal. Premises have no record.

use crate::logic::Literal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a clause was derived by binary resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// Clause indices of the two parents: the clause that was being explored
    /// first, the partner found through the index second
    pub premises: [usize; 2],
    /// Literal of the first parent that was resolved away
    pub pivot: Literal,
}

impl Derivation {
    pub fn resolution(left: usize, right: usize, pivot: Literal) -> Self {
        Derivation {
            premises: [left, right],
            pivot,
        }
    }
}

/// Parent links of every derived clause in a session, keyed by clause index.
#[derive(Debug, Clone, Default)]
pub struct ProofRecorder {
    derivations: HashMap<usize, Derivation>,
}

impl ProofRecorder {
    pub fn new() -> Self {
        ProofRecorder {
            derivations: HashMap::new(),
        }
    }

    /// Record the derivation of a newly admitted clause.
    ///
    /// The first record wins; a clause is only ever derived once because the
    /// index rejects duplicates before this is called.
    pub fn record(&mut self, clause_idx: usize, derivation: Derivation) {
        self.derivations.entry(clause_idx).or_insert(derivation);
    }

    pub fn derivation(&self, clause_idx: usize) -> Option<&Derivation> {
        self.derivations.get(&clause_idx)
    }

    /// Premises (and anything never derived) have no parents
    pub fn is_derived(&self, clause_idx: usize) -> bool {
        self.derivations.contains_key(&clause_idx)
    }

    pub fn len(&self) -> usize {
        self.derivations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derivations.is_empty()
    }
}

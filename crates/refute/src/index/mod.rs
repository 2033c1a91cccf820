//! Literal-keyed clause index for resolution candidate lookup.
//!
//! The index owns the clause store of a session. Every distinct clause gets a
//! stable index (its insertion position) the first time it is inserted, and
//! is filed under each of its literals. Buckets are kept sorted by clause
//! order (size first), so unit clauses are offered as resolution partners
//! before longer ones.
//!
//! Insertion is idempotent: inserting a clause equal to one already stored
//! changes nothing and reports "not newly added". The saturation loop relies
//! on this as its only duplicate check.

use crate::logic::{Clause, Literal};
use indexmap::IndexSet;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ClauseIndex {
    /// All admitted clauses, indexed by clause idx
    clauses: IndexSet<Clause>,
    /// Literal -> indices of clauses containing it, smallest clause first
    buckets: HashMap<Literal, Vec<usize>>,
}

impl ClauseIndex {
    pub fn new() -> Self {
        ClauseIndex {
            clauses: IndexSet::new(),
            buckets: HashMap::new(),
        }
    }

    /// Insert a clause into every bucket of its literals.
    ///
    /// Returns false if an equal clause was already indexed.
    pub fn insert(&mut self, clause: Clause) -> bool {
        self.insert_full(clause).1
    }

    /// Like `insert`, but also returns the index of the stored clause
    /// (the existing one when the clause was a duplicate).
    pub fn insert_full(&mut self, clause: Clause) -> (usize, bool) {
        let ClauseIndex { clauses, buckets } = self;
        let (idx, added) = clauses.insert_full(clause);
        if !added {
            return (idx, false);
        }

        let clause = &clauses[idx];
        for lit in clause {
            let bucket = buckets.entry(*lit).or_default();
            let pos = bucket.partition_point(|&other| clauses[other] < *clause);
            bucket.insert(pos, idx);
        }
        (idx, true)
    }

    /// Indices of the clauses containing `literal`, smallest clause first
    pub fn candidates_for(&self, literal: &Literal) -> &[usize] {
        self.buckets
            .get(literal)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Get a stored clause by index
    pub fn get(&self, idx: usize) -> &Clause {
        &self.clauses[idx]
    }

    /// Index of a stored clause equal to `clause`, if any
    pub fn index_of(&self, clause: &Clause) -> Option<usize> {
        self.clauses.get_index_of(clause)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// All stored clauses in insertion order
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Number of stored clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of literals with a non-empty bucket
    pub fn literal_count(&self) -> usize {
        self.buckets.len()
    }
}

//! Worklist-driven saturation by binary resolution
//!
//! ## State
//!
//! A session owns everything the search touches:
//!
//! - **Index**: every distinct clause seen so far, filed under its literals
//! - **Worklist**: FIFO queue of clause indices awaiting exploration
//! - **Recorder**: parent links of every derived clause
//! - **Numbering**: premise line numbers, used when the proof is printed
//!
//! ## Algorithm
//!
//! Each iteration dequeues one clause and, for each of its literals in
//! canonical order, scans the index bucket of the complementary literal
//! smallest clause first:
//!
//! 1. A tautological resolvent is discarded and the scan goes on.
//! 2. The empty clause ends the search: the proof is reconstructed.
//! 3. Any other resolvent is inserted into the index; if it is new it is
//!    recorded and enqueued. Either way the scan moves to the next literal.
//!
//! The index never admits a clause twice and the signature is finite, so the
//! worklist drains in finitely many steps when no contradiction exists.

use super::profile::SaturationProfile;
use crate::config::SaturationConfig;
use crate::index::ClauseIndex;
use crate::inference::{
    reconstruct, verify_proof, Derivation, Proof, ProofLine, ProofRecorder, VerificationError,
};
use crate::logic::{Clause, Interner};
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Terminal state of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty clause derived: the argument is valid
    Valid(Proof),
    /// Worklist exhausted without a contradiction: the argument is invalid
    Invalid,
    /// A configured clause or iteration limit stopped the search
    ResourceLimit,
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }
}

/// One proof-search session over a fixed clause sequence.
pub struct SaturationState {
    interner: Interner,
    index: ClauseIndex,
    worklist: VecDeque<usize>,
    recorder: ProofRecorder,
    /// Clause idx -> premise line number (a later duplicate overwrites)
    numbering: HashMap<usize, usize>,
    premises: Vec<ProofLine>,
    config: SaturationConfig,
    iterations: usize,
    profile: Option<SaturationProfile>,
    outcome: Option<Outcome>,
}

impl SaturationState {
    /// Load a session from the input clauses (premises followed by the
    /// negated conclusion; their order fixes the line numbers 1..n).
    ///
    /// # Arguments
    /// * `clauses` - The input clause sequence
    /// * `config` - Saturation configuration
    /// * `interner` - Names of the atoms the clauses were built from
    pub fn new(clauses: Vec<Clause>, config: SaturationConfig, interner: Interner) -> Self {
        let mut index = ClauseIndex::new();
        let mut worklist = VecDeque::with_capacity(clauses.len());
        let mut numbering = HashMap::new();
        let mut premises = Vec::with_capacity(clauses.len());

        for (i, clause) in clauses.into_iter().enumerate() {
            let number = i + 1;
            // Duplicate premises are tolerated; they share one stored clause
            let (clause_idx, _) = index.insert_full(clause);
            numbering.insert(clause_idx, number);
            worklist.push_back(clause_idx);
            premises.push(ProofLine::premise(
                number,
                clause_idx,
                index.get(clause_idx).clone(),
            ));
        }

        info!(
            premises = premises.len(),
            distinct = index.len(),
            atoms = interner.atom_count(),
            "loaded session"
        );

        let profile = if config.enable_profiling {
            Some(SaturationProfile::default())
        } else {
            None
        };

        SaturationState {
            interner,
            index,
            worklist,
            recorder: ProofRecorder::new(),
            numbering,
            premises,
            config,
            iterations: 0,
            profile,
            outcome: None,
        }
    }

    /// The numbered premise lines, in input order
    pub fn premises(&self) -> &[ProofLine] {
        &self.premises
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn index(&self) -> &ClauseIndex {
        &self.index
    }

    pub fn recorder(&self) -> &ProofRecorder {
        &self.recorder
    }

    pub fn config(&self) -> &SaturationConfig {
        &self.config
    }

    /// Profiling data (None unless enabled in the config)
    pub fn profile(&self) -> Option<&SaturationProfile> {
        self.profile.as_ref()
    }

    /// Run the search to completion. Later calls return the same outcome.
    pub fn run(&mut self) -> Outcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let start_time = Instant::now();
        let outcome = self.saturate();

        if let Some(p) = self.profile.as_mut() {
            p.iterations = self.iterations;
            p.total_time = start_time.elapsed();
        }
        match &outcome {
            Outcome::Valid(proof) => info!(
                iterations = self.iterations,
                clauses = self.index.len(),
                proof_lines = proof.lines.len(),
                "contradiction found"
            ),
            Outcome::Invalid => info!(
                iterations = self.iterations,
                clauses = self.index.len(),
                "worklist exhausted without contradiction"
            ),
            Outcome::ResourceLimit => info!(
                iterations = self.iterations,
                clauses = self.index.len(),
                "resource limit reached"
            ),
        }

        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Check a proof produced by this session against its premises
    pub fn verify_proof(&self, proof: &Proof) -> Result<(), VerificationError> {
        verify_proof(&self.premises, &proof.lines)
    }

    fn saturate(&mut self) -> Outcome {
        // An empty premise is already a contradiction
        if let Some(line) = self.premises.iter().find(|line| line.clause.is_empty()) {
            return Outcome::Valid(Proof {
                lines: Vec::new(),
                empty_clause_idx: line.clause_idx,
            });
        }

        while let Some(&current_idx) = self.worklist.front() {
            if self.config.iteration_limit_reached(self.iterations)
                || self.config.clause_limit_reached(self.index.len())
            {
                return Outcome::ResourceLimit;
            }
            self.worklist.pop_front();
            self.iterations += 1;

            let current = self.index.get(current_idx).clone();
            trace!(clause = %current.display(&self.interner), "exploring");

            for pivot in &current {
                let complement = pivot.complement();

                // First non-tautological resolvent with this pivot, if any
                let mut found = None;
                for &partner_idx in self.index.candidates_for(&complement) {
                    if let Some(p) = self.profile.as_mut() {
                        p.resolutions_attempted += 1;
                    }
                    match current.resolve(self.index.get(partner_idx), pivot) {
                        Some(resolvent) => {
                            found = Some((partner_idx, resolvent));
                            break;
                        }
                        None => {
                            if let Some(p) = self.profile.as_mut() {
                                p.tautologies_discarded += 1;
                            }
                        }
                    }
                }
                let Some((partner_idx, resolvent)) = found else {
                    continue;
                };
                let derivation = Derivation::resolution(current_idx, partner_idx, *pivot);

                if resolvent.is_empty() {
                    let (empty_idx, _) = self.index.insert_full(resolvent);
                    self.recorder.record(empty_idx, derivation);
                    return self.contradiction(empty_idx);
                }

                let (clause_idx, added) = self.index.insert_full(resolvent);
                if added {
                    debug!(
                        clause = %self.index.get(clause_idx).display(&self.interner),
                        parents = ?derivation.premises,
                        "new resolvent"
                    );
                    self.recorder.record(clause_idx, derivation);
                    self.worklist.push_back(clause_idx);
                    if let Some(p) = self.profile.as_mut() {
                        p.clauses_added += 1;
                        p.observe_worklist(self.worklist.len());
                    }
                } else {
                    trace!(
                        clause = %self.index.get(clause_idx).display(&self.interner),
                        "duplicate resolvent"
                    );
                    if let Some(p) = self.profile.as_mut() {
                        p.duplicates_discarded += 1;
                    }
                }
            }
        }

        Outcome::Invalid
    }

    fn contradiction(&mut self, empty_clause_idx: usize) -> Outcome {
        let t0 = self.profile.as_ref().map(|_| Instant::now());
        let lines = reconstruct(
            empty_clause_idx,
            &self.index,
            &self.recorder,
            &self.numbering,
            self.premises.len() + 1,
        );
        if let (Some(p), Some(t)) = (self.profile.as_mut(), t0) {
            p.reconstruct_time += t.elapsed();
        }

        Outcome::Valid(Proof {
            lines,
            empty_clause_idx,
        })
    }
}

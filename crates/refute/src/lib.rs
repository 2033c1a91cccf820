//! Refute: propositional argument checking by resolution refutation
//!
//! The premises and the negated conclusion are given as clauses. The engine
//! saturates the clause set under binary resolution; deriving the empty
//! clause shows the argument is valid, and exhausting the worklist without
//! it shows the argument is invalid. On success the derivation is
//! reconstructed as a numbered transcript citing parent lines.

pub mod config;
pub mod error;
pub mod index;
pub mod inference;
pub mod json;
pub mod logic;
pub mod parser;
pub mod report;
pub mod saturation;

pub use config::SaturationConfig;
pub use error::{RefuteError, Result};

// Re-export commonly used types from logic
pub use logic::{AtomId, Clause, ClauseDisplay, Interner, Literal, LiteralDisplay};

pub use index::ClauseIndex;

// Re-export proof types
pub use inference::{
    reconstruct, verify_proof, Derivation, Proof, ProofLine, ProofRecorder, VerificationError,
};

// Re-export saturation types
pub use saturation::{load_session, saturate, Outcome, SaturationProfile, SaturationState};

pub use json::{ClauseJson, OutcomeJson, ProofLineJson, SessionJson};

pub use parser::{parse_clause_file, parse_clause_line, parse_clauses, read_clauses, ParsedClauses};

//! Derivation records and proof reconstruction

pub mod derivation;
pub mod proof;

pub use derivation::{Derivation, ProofRecorder};
pub use proof::{reconstruct, verify_proof, Proof, ProofLine, ProofLineDisplay, VerificationError};

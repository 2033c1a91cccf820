//! Propositional logic data structures
//!
//! Atoms are interned once per session; literals and clauses are small
//! immutable values built on top of the interned ids.

pub mod clause;
pub mod interner;
pub mod literal;

#[cfg(test)]
mod proptest_tests;

pub use clause::{Clause, ClauseDisplay};
pub use interner::{AtomId, Interner};
pub use literal::{Literal, LiteralDisplay};

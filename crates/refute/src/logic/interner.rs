//! Atom interning
//!
//! Propositional atoms are referred to by a compact `AtomId` everywhere in the
//! engine. Names live in a single `Interner` owned by the caller and passed
//! alongside clauses wherever a human-readable form is needed.
//!
//! Ids are handed out in first-seen order, which makes the canonical literal
//! order (and therefore every printed clause) deterministic for a given input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// ID for an interned atom name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(pub(crate) u32);

impl AtomId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Symbol interner for propositional atoms
///
/// Pass it through the session context rather than keeping global state, so
/// independent sessions never share symbol tables.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    /// Interned names, indexed by ID
    names: Vec<String>,
    /// Lookup table from name to ID
    lookup: HashMap<String, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Interner {
            names: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Intern an atom name, returning its ID (get-or-create)
    pub fn intern_atom(&mut self, name: &str) -> AtomId {
        if let Some(&id) = self.lookup.get(name) {
            return AtomId(id);
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        AtomId(id)
    }

    /// Resolve an atom ID to its name
    pub fn resolve_atom(&self, id: AtomId) -> &str {
        &self.names[id.0 as usize]
    }

    /// Get the ID for an already-interned atom (returns None if not found)
    pub fn get_atom(&self, name: &str) -> Option<AtomId> {
        self.lookup.get(name).copied().map(AtomId)
    }

    /// Check if an atom name is already interned
    pub fn contains_atom(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Number of interned atoms (the size of the propositional signature)
    pub fn atom_count(&self) -> usize {
        self.names.len()
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

// Serialized as the raw u32; names are resolved by the json views.

impl Serialize for AtomId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AtomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(AtomId)
    }
}

//! Property-based tests for the literal and clause algebra.

use super::{AtomId, Clause, Interner, Literal};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const SIGNATURE: u8 = 4;

/// Literal description before interning: (atom index, negated)
fn arb_literal_desc() -> impl Strategy<Value = (u8, bool)> {
    (0..SIGNATURE, any::<bool>())
}

fn arb_clause_desc() -> impl Strategy<Value = Vec<(u8, bool)>> {
    proptest::collection::vec(arb_literal_desc(), 0..6)
}

fn signature() -> (Interner, Vec<AtomId>) {
    let mut interner = Interner::new();
    let atoms = (0..SIGNATURE)
        .map(|i| interner.intern_atom(&((b'P' + i) as char).to_string()))
        .collect();
    (interner, atoms)
}

fn build_literals(desc: &[(u8, bool)], atoms: &[AtomId]) -> Vec<Literal> {
    desc.iter()
        .map(|&(atom, negated)| Literal::new(atoms[atom as usize], negated))
        .collect()
}

fn hash_of(clause: &Clause) -> u64 {
    let mut hasher = DefaultHasher::new();
    clause.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    /// complement is an involution without fixed points
    #[test]
    fn complement_involution((atom, negated) in arb_literal_desc()) {
        let (_, atoms) = signature();
        let lit = Literal::new(atoms[atom as usize], negated);
        prop_assert_eq!(lit.complement().complement(), lit);
        prop_assert_ne!(lit.complement(), lit);
    }

    /// Equality and hashing ignore construction order and duplicates
    #[test]
    fn clause_identity_is_set_content(desc in arb_clause_desc()) {
        let (_, atoms) = signature();
        let lits = build_literals(&desc, &atoms);
        let mut reversed = lits.clone();
        reversed.reverse();
        reversed.extend(lits.iter().copied());

        let c1 = Clause::new(lits);
        let c2 = Clause::new(reversed);
        prop_assert_eq!(&c1, &c2);
        prop_assert_eq!(hash_of(&c1), hash_of(&c2));
    }

    /// Accepted resolvents are never tautologies and never contain the pivot pair
    #[test]
    fn resolve_never_yields_tautology(
        d1 in arb_clause_desc(),
        d2 in arb_clause_desc(),
        (atom, negated) in arb_literal_desc(),
    ) {
        let (_, atoms) = signature();
        let pivot = Literal::new(atoms[atom as usize], negated);
        let mut l1 = build_literals(&d1, &atoms);
        let mut l2 = build_literals(&d2, &atoms);
        l1.push(pivot);
        l2.push(pivot.complement());
        let c1 = Clause::new(l1);
        let c2 = Clause::new(l2);

        if let Some(resolvent) = c1.resolve(&c2, &pivot) {
            prop_assert!(!resolvent.is_tautology());
            prop_assert!(!resolvent.contains(&pivot) || !resolvent.contains(&pivot.complement()));
            for lit in &resolvent {
                prop_assert!(c1.contains(lit) || c2.contains(lit));
            }
        }
    }

    /// Clause ordering is a total order consistent with equality
    #[test]
    fn clause_order_is_total(
        d1 in arb_clause_desc(),
        d2 in arb_clause_desc(),
        d3 in arb_clause_desc(),
    ) {
        let (_, atoms) = signature();
        let a = Clause::new(build_literals(&d1, &atoms));
        let b = Clause::new(build_literals(&d2, &atoms));
        let c = Clause::new(build_literals(&d3, &atoms));

        // antisymmetry
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        // consistent with Eq
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        // transitivity
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        // size dominates
        if a.len() < b.len() {
            prop_assert_eq!(a.cmp(&b), Ordering::Less);
        }
    }
}

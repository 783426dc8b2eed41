//! The proof value type: target leaf positions with the sibling hashes
//! needed to reconstruct their subtree roots.

use super::hash::Hash;

/// An ordered list of target leaf positions together with the proof
/// hashes needed to walk them up to their subtree roots.
///
/// `targets` need not be pre-sorted;
/// [`crate::reconstruct::calculate_roots`] sorts them internally.
/// Reconstruction drains `proof`, so a caller that wants to reuse a
/// `Proof` after verification must clone it first.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Proof {
    /// Leaf positions this proof witnesses membership for.
    pub targets: Vec<u64>,
    /// Sibling hashes needed to walk `targets` up to their subtree roots,
    /// in the order [`crate::reconstruct::calculate_roots`] consumes them.
    pub proof: Vec<Hash>,
}

impl Proof {
    /// Builds a proof from target positions and their sibling hashes.
    pub fn new(targets: Vec<u64>, proof: Vec<Hash>) -> Proof {
        Proof { targets, proof }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_independent() {
        let original = Proof::new(vec![2, 0], vec![Hash([1; 32])]);
        let mut copy = original.clone();
        copy.proof.clear();
        assert_eq!(original.proof.len(), 1);
        assert!(copy.proof.is_empty());
    }

    #[test]
    fn default_is_empty() {
        let p = Proof::default();
        assert!(p.targets.is_empty());
        assert!(p.proof.is_empty());
    }
}

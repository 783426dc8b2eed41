//! The accumulator itself: a leaf count and the current subtree roots.

use super::error::UError;
use super::hash::{combine, Hash, NodeHasher, Sha512_256Hasher};
use super::proof::Proof;
use super::reconstruct::calculate_roots;

/// A compact, append-only accumulator: a leaf count `n` and one digest per
/// perfect subtree currently present, ordered tallest to shortest.
///
/// `roots.len() == n.count_ones()` always. A `None` slot is a root that
/// has been fully deleted but not removed; see [`Stump::delete`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Stump {
    /// Total number of leaves ever added.
    pub n: u64,
    /// Subtree roots, tallest first.
    pub roots: Vec<Option<Hash>>,
}

impl Stump {
    /// An empty stump.
    pub fn new() -> Stump {
        Stump::default()
    }

    /// Extends the stump with `leaves`, coalescing perfect subtrees of
    /// equal height as they meet. Uses the reference SHA-512/256 hash
    /// primitive; see [`Stump::add_with_hasher`] to supply another.
    pub fn add(&mut self, leaves: &[Hash]) {
        self.add_with_hasher(&Sha512_256Hasher, leaves)
    }

    /// [`Stump::add`], parameterized over the hash primitive.
    pub fn add_with_hasher(&mut self, hasher: &dyn NodeHasher, leaves: &[Hash]) {
        for &leaf in leaves {
            let mut carry = Some(leaf);
            let mut row = 0u32;
            while (self.n >> row) & 1 == 1 {
                let sibling = self
                    .roots
                    .pop()
                    .expect("root list shorter than popcount(n)");
                carry = combine(hasher, sibling.as_ref(), carry.as_ref());
                row += 1;
            }
            self.roots.push(carry);
            self.n += 1;
        }
    }

    /// Verifies that `dels` are members under `proof`, without mutating
    /// the stump. Returns the stored root indices the proof's subtrees
    /// matched, needed by [`Stump::delete`]. Uses the reference
    /// SHA-512/256 hash primitive; see [`Stump::verify_with_hasher`].
    pub fn verify(&self, dels: &[Hash], proof: &Proof) -> Result<Vec<usize>, UError> {
        self.verify_with_hasher(&Sha512_256Hasher, dels, proof)
    }

    /// [`Stump::verify`], parameterized over the hash primitive.
    pub fn verify_with_hasher(
        &self,
        hasher: &dyn NodeHasher,
        dels: &[Hash],
        proof: &Proof,
    ) -> Result<Vec<usize>, UError> {
        if dels.len() != proof.targets.len() {
            return Err(UError::ProofShape {
                targets: proof.targets.len(),
                dels: dels.len(),
            });
        }

        let candidates = calculate_roots(hasher, self.n, Some(dels), proof)?;

        // Candidates are produced shortest-subtree-first; the stored root
        // list is ordered tallest-first, so matching walks it from the end.
        let mut root_idxs = Vec::with_capacity(candidates.len());
        let mut cursor = 0;
        for j in (0..self.roots.len()).rev() {
            if cursor >= candidates.len() {
                break;
            }
            if self.roots[j] == candidates[cursor] {
                root_idxs.push(j);
                cursor += 1;
            }
        }

        if root_idxs.len() != candidates.len() {
            return Err(UError::RootMismatch);
        }

        Ok(root_idxs)
    }

    /// Deletes `dels` (proven by `proof`), rewriting the stored roots of
    /// the subtrees they belonged to. `n` is unchanged: a subtree whose
    /// every leaf is deleted becomes a `None` root, not a removed one, so
    /// future `add`s still coalesce at the right height. Uses the
    /// reference SHA-512/256 hash primitive; see
    /// [`Stump::delete_with_hasher`].
    ///
    /// Verifies against clones first; if that fails, `self` is untouched.
    pub fn delete(&mut self, dels: &[Hash], proof: &Proof) -> Result<(), UError> {
        self.delete_with_hasher(&Sha512_256Hasher, dels, proof)
    }

    /// [`Stump::delete`], parameterized over the hash primitive.
    pub fn delete_with_hasher(
        &mut self,
        hasher: &dyn NodeHasher,
        dels: &[Hash],
        proof: &Proof,
    ) -> Result<(), UError> {
        let dels_copy = dels.to_vec();
        let proof_copy = proof.clone();
        let root_idxs = self.verify_with_hasher(hasher, &dels_copy, &proof_copy)?;

        let modified_roots = calculate_roots(hasher, self.n, None, proof)?;

        for (idx, modified_root) in root_idxs.into_iter().zip(modified_roots) {
            self.roots[idx] = modified_root;
        }

        Ok(())
    }
}

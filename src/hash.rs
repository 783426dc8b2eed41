//! The 32-byte digest type and the pluggable node-hashing primitive.

use core::fmt;
use sha2::{Digest, Sha512_256};

/// Digest of a forest node.
///
/// A `None` slot in a root list or a `None` child passed to [`combine`]
/// represents a deleted, not-yet-coalesced node, not a literal all-zero
/// hash. Hosts that serialize a stump to hex (e.g. a test harness) are
/// expected to render `None` as the all-zero 32-byte string themselves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash(pub [u8; 32]);

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::ops::Deref for Hash {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

/// The hash primitive that combines two sibling digests into their parent.
///
/// The digest function is an external collaborator supplied by the host.
/// This trait is that seam: it lets the crate ship a working default
/// ([`Sha512_256Hasher`]) while still letting a host swap in its own
/// instantiation without touching the reconstruction algorithm. The
/// null-child identity rule lives in [`combine`], one layer up, not here;
/// a `NodeHasher` only ever sees two real digests.
pub trait NodeHasher {
    /// Hashes the concatenation `left || right`.
    fn parent_hash(&self, left: &Hash, right: &Hash) -> Hash;
}

/// Reference hash primitive: SHA-512 truncated to 256 bits (SHA-512/256),
/// applied to `left || right`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512_256Hasher;

impl NodeHasher for Sha512_256Hasher {
    fn parent_hash(&self, left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Sha512_256::new();
        hasher.update(left.0);
        hasher.update(right.0);
        let digest = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        Hash(out)
    }
}

/// Combines two possibly-absent children under the identity rule:
/// `combine(x, None) = combine(None, x) = x`, `combine(None, None) = None`.
///
/// This is the specification's null semantics, not an optimization: a
/// `NodeHasher` that is asked to hash a null child would disagree with the
/// reference, so the identity is enforced here, before the primitive ever
/// sees the inputs.
pub fn combine(hasher: &dyn NodeHasher, left: Option<&Hash>, right: Option<&Hash>) -> Option<Hash> {
    match (left, right) {
        (Some(l), Some(r)) => Some(hasher.parent_hash(l, r)),
        (Some(l), None) => Some(*l),
        (None, Some(r)) => Some(*r),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(b: u8) -> Hash {
        Hash([b; 32])
    }

    #[test]
    fn identity_rule() {
        let hasher = Sha512_256Hasher;
        assert_eq!(combine(&hasher, None, None), None);
        assert_eq!(combine(&hasher, Some(&h(1)), None), Some(h(1)));
        assert_eq!(combine(&hasher, None, Some(&h(2))), Some(h(2)));
    }

    #[test]
    fn combine_is_order_sensitive() {
        let hasher = Sha512_256Hasher;
        let left = combine(&hasher, Some(&h(1)), Some(&h(2))).unwrap();
        let right = combine(&hasher, Some(&h(2)), Some(&h(1))).unwrap();
        assert_ne!(left, right);
    }

    #[test]
    fn debug_prints_hex() {
        let hash = h(0xab);
        assert_eq!(format!("{:?}", hash), format!("Hash({})", "ab".repeat(32)));
    }
}

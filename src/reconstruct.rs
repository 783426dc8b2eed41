//! The root reconstructor: walks a merged frontier of target positions
//! and computed parent positions in strict ascending order, consuming
//! proof hashes only when a sibling is not already present in the
//! frontier.

use std::collections::{HashSet, VecDeque};

use super::error::UError;
use super::hash::{combine, Hash, NodeHasher};
use super::positional::{is_left, is_root, parent, right_sibling, tree_rows};
use super::proof::Proof;

type Frontier = VecDeque<(u64, Option<Hash>)>;

/// `true` if `targets`'s head is the smaller (or tied) position, `false`
/// if `next`'s head is smaller. `None` if both are empty. Ties favor
/// `targets`, matching the sort that interleaved leaf hashes with them.
fn smaller_is_targets(targets: &Frontier, next: &Frontier) -> Option<bool> {
    match (targets.front(), next.front()) {
        (Some(_), None) => Some(true),
        (None, Some(_)) => Some(false),
        (None, None) => None,
        (Some((t, _)), Some((n, _))) => Some(t <= n),
    }
}

/// Reconstructs the subtree roots that `proof.targets` fall under.
///
/// `leaves` is either aligned 1-to-1 with `proof.targets` (verification)
/// or `None` (deletion, where every target hashes to null). The proof's
/// hash list must be drained exactly: leftover hashes are as malformed as
/// running out early.
///
/// Output is ordered shortest-subtree-first, the order in which the
/// ascending-position walk completes each subtree; callers matching
/// against a stump's tallest-first root list must scan it from the end.
pub fn calculate_roots(
    hasher: &dyn NodeHasher,
    n: u64,
    leaves: Option<&[Hash]>,
    proof: &Proof,
) -> Result<Vec<Option<Hash>>, UError> {
    let total_rows = tree_rows(n);

    if proof.targets.is_empty() {
        return Ok(Vec::new());
    }

    let target_count = proof.targets.len();
    let dels: Vec<Option<Hash>> = match leaves {
        Some(hs) => {
            if hs.len() != target_count {
                return Err(UError::ProofShape {
                    targets: target_count,
                    dels: hs.len(),
                });
            }
            hs.iter().cloned().map(Some).collect()
        }
        None => vec![None; target_count],
    };

    let bound = 1u64 << total_rows;
    let mut seen = HashSet::with_capacity(target_count);
    for &t in &proof.targets {
        if t >= bound {
            return Err(UError::TargetOutOfRange { pos: t, n });
        }
        if !seen.insert(t) {
            return Err(UError::DuplicateTarget { pos: t });
        }
    }

    let mut paired: Vec<(u64, Option<Hash>)> = proof.targets.iter().cloned().zip(dels).collect();
    paired.sort_by_key(|(pos, _)| *pos);

    let mut targets: Frontier = paired.into_iter().collect();
    let mut next: Frontier = VecDeque::new();
    let mut proof_hashes: VecDeque<Hash> = proof.proof.iter().cloned().collect();
    let mut roots = Vec::new();

    while let Some(from_targets) = smaller_is_targets(&targets, &next) {
        let (pos, hash) = if from_targets {
            targets.pop_front().unwrap()
        } else {
            next.pop_front().unwrap()
        };

        if is_root(pos, n, total_rows) {
            roots.push(hash);
            continue;
        }

        let mut sibling_hash = None;
        if is_left(pos) {
            let sib_pos = right_sibling(pos);
            if let Some(from_t) = smaller_is_targets(&targets, &next) {
                let front_pos = if from_t {
                    targets.front().unwrap().0
                } else {
                    next.front().unwrap().0
                };
                if front_pos == sib_pos {
                    let (_, h) = if from_t {
                        targets.pop_front().unwrap()
                    } else {
                        next.pop_front().unwrap()
                    };
                    sibling_hash = Some(h);
                }
            }
        }

        let computed = if let Some(sibling) = sibling_hash {
            // `pos` is a left child here (sibling lookups only happen for
            // those), so `hash` is the left side and `sibling` the right.
            combine(hasher, hash.as_ref(), sibling.as_ref())
        } else {
            let proof_hash = proof_hashes.pop_front().ok_or(UError::ProofExhausted)?;
            if is_left(pos) {
                combine(hasher, hash.as_ref(), Some(&proof_hash))
            } else {
                combine(hasher, Some(&proof_hash), hash.as_ref())
            }
        };

        next.push_back((parent(pos, total_rows), computed));
    }

    if !proof_hashes.is_empty() {
        return Err(UError::ProofNotDrained);
    }

    Ok(roots)
}

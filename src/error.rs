//! Failure modes of proof verification and root reconstruction.
//!
//! `add` never fails. `delete` verifies against clones before mutating
//! anything, so any error here leaves the stump untouched.

/// Everything that can go wrong verifying or consuming a [`crate::Proof`].
#[derive(Fail, Clone, Debug, Eq, PartialEq)]
pub enum UError {
    /// `dels` and `proof.targets` did not have matching lengths.
    #[fail(display = "proof shape mismatch: {} targets, {} dels", targets, dels)]
    ProofShape { targets: usize, dels: usize },

    /// Reconstruction needed another proof hash but the list was empty.
    #[fail(display = "proof hash list exhausted during reconstruction")]
    ProofExhausted,

    /// Reconstruction finished with proof hashes left over: the proof
    /// carried more hashes than the targets needed.
    #[fail(display = "proof hash list was not fully drained by reconstruction")]
    ProofNotDrained,

    /// A reconstructed candidate root matched no unmatched stored root.
    #[fail(display = "candidate root did not match any unmatched stored root")]
    RootMismatch,

    /// A target position fell outside `[0, 2^T)` for the stump's leaf count.
    #[fail(display = "target position {} out of range for {} leaves", pos, n)]
    TargetOutOfRange { pos: u64, n: u64 },

    /// The same leaf position appeared twice among a proof's targets.
    #[fail(display = "duplicate target position {}", pos)]
    DuplicateTarget { pos: u64 },
}

//! A Utreexo-style cryptographic accumulator running in stump mode: a
//! compact, append-only forest of perfect binary trees summarized by a
//! leaf count and a list of subtree-root digests, with proof verification
//! and deletion running in time logarithmic in the set size.
//!
//! The forest itself is never materialized; see [`positional`] for the
//! bit arithmetic that names every node from `n` and a position alone.

#[macro_use]
extern crate failure;

mod error;
mod hash;
mod positional;
mod proof;
mod reconstruct;
mod stump;

pub use error::UError;
pub use hash::{combine, Hash, NodeHasher, Sha512_256Hasher};
pub use positional::{
    is_left, is_root, parent, right_sibling, root_position, root_present, row_maxpos, row_of,
    tree_rows,
};
pub use proof::Proof;
pub use reconstruct::calculate_roots;
pub use stump::Stump;

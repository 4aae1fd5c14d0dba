//! Verified hash-tree storage for content-block downloads.
//!
//! A flat, fixed-size complete binary Merkle tree over fixed-size content
//! blocks, used to incrementally verify downloaded data against a single
//! trusted root hash. The tree starts out knowing only its root, accepts
//! whole candidate trees proven consistent with that root, derives
//! interior hashes from externally supplied piece layers, and invalidates
//! subtrees whose data failed verification downstream.
//!
//! # Core types
//!
//! - [`HashTree`] — the container (construct, load, fill, clear, inspect).
//! - [`LoadOutcome`] — tagged result of a bulk load attempt.
//! - [`Combiner`] — the pairwise-hash + padding-table seam.
//! - [`Blake3Combiner`] — the provided Blake3 combiner.
//! - [`TreeError`] — recoverable input errors from fill and clear.
//!
//! # Helpers
//!
//! Position and size arithmetic for the flat breadth-first layout is
//! re-exported from the `helper` module: [`num_leafs`], [`num_nodes`],
//! [`first_leaf`], [`parent`], [`sibling`], [`first_child`],
//! [`num_layers`].

#![warn(missing_docs)]

mod combine;
mod error;
pub(crate) mod helper;
mod tree;


pub use combine::{
    Blake3Combiner, Combiner, Hash, MAX_TREE_DEPTH, ZERO_HASH, root_from_piece_layer,
};
pub use error::TreeError;
pub use helper::{first_child, first_leaf, num_layers, num_leafs, num_nodes, parent, sibling};
pub use tree::{HashTree, LoadOutcome};

use thiserror::Error;

/// Errors from hash tree fill and clear operations.
///
/// Fatal precondition violations (out-of-range `get`/`set`, `root()` on an
/// empty tree, constructing from a zero or non-power-of-two leaf count)
/// panic instead; these variants cover caller input a downloader can
/// legitimately get wrong and recover from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The supplied piece layer has no entries.
    #[error("piece layer is empty")]
    EmptyPieceLayer,
    /// The supplied piece layer does not fit in the addressed row.
    #[error("piece layer of {got} hashes does not fit in a row of {capacity} slots")]
    PieceLayerTooLarge {
        /// Number of hashes supplied.
        got: usize,
        /// Slots available at the addressed level.
        capacity: usize,
    },
    /// `level_start` is outside the tree or not aligned to a complete
    /// subtree of the input's width.
    #[error("index {index} does not start an aligned level row in a tree of {len} nodes")]
    InvalidLevelStart {
        /// The offending start index.
        index: usize,
        /// Node count of the tree.
        len: usize,
    },
    /// The addressed clear region does not describe a complete subtree
    /// inside the tree.
    #[error(
        "region of {num_leafs} nodes at index {level_start} does not address a complete subtree of a {len}-node tree"
    )]
    RegionOutOfRange {
        /// First index of the addressed row segment.
        level_start: usize,
        /// Width of the addressed row segment.
        num_leafs: usize,
        /// Node count of the tree.
        len: usize,
    },
    /// Fill or clear called on a tree with no storage.
    #[error("operation on an empty tree")]
    EmptyTree,
}

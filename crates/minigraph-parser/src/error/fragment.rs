//! Errors from interpreting a single fragment.

use thiserror::Error;

/// Why a fragment could not be interpreted as a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentError {
    /// The fragment is a group of siblings rather than one node.
    ///
    /// Recoverable: the fragment is transparent and its subtrees take its
    /// place.
    #[error("{kind} with {entries} entries does not name a single node")]
    AmbiguousNode { kind: &'static str, entries: usize },

    /// The fragment cannot appear in a node tree at all.
    #[error("{kind} value cannot be part of a node tree")]
    Malformed { kind: &'static str },
}

impl FragmentError {
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, FragmentError::AmbiguousNode { .. })
    }
}

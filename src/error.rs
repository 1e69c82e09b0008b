//! Error sentinels returned by the validating constructor and the applier.
//!
//! Neither error type carries more detail than the invariant it reports
//! broke; see the "Open questions" note in the crate-level docs for why
//! [`IncompatibleBase`] in particular stays coarse.

use std::fmt;

use thiserror::Error;

/// Which half of a [`Change`](crate::Change) an offset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A `Remove` change.
    Remove,
    /// An `Insert` change.
    Insert,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Remove => f.write_str("remove"),
            ChangeKind::Insert => f.write_str("insert"),
        }
    }
}

/// Returned by [`Difference::from_changes`](crate::Difference::from_changes)
/// when the supplied changes violate one of the structural invariants of a
/// [`Difference`](crate::Difference): duplicate offsets within a kind, or an
/// `associated_with` link that isn't symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDifference {
    /// Two changes of the same kind (`Remove` or `Insert`) share an offset.
    #[error("duplicate {kind} offset {offset}")]
    DuplicateOffset {
        /// The kind that had the duplicate.
        kind: ChangeKind,
        /// The offset that appeared more than once.
        offset: u32,
    },
    /// A `Remove` at `remove_offset` associates with an `Insert` at
    /// `insert_offset` (or vice versa) but the reverse link is missing or
    /// points elsewhere.
    #[error("association between remove@{remove_offset} and insert@{insert_offset} is not symmetric")]
    AsymmetricAssociation {
        /// Offset of the `Remove` side of the broken association.
        remove_offset: u32,
        /// Offset of the `Insert` side of the broken association.
        insert_offset: u32,
    },
}

/// Returned by [`apply`](crate::apply) when a [`Difference`](crate::Difference)
/// does not line up with the supplied base sequence.
///
/// Per the design notes this is intentionally coarse: callers that need to
/// know *why* a patch failed are expected to diff again against the actual
/// base they have in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("difference is incompatible with the supplied base sequence")]
pub struct IncompatibleBase;

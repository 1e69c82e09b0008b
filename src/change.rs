//! The [`Change`] element type: a single remove or insert carried by a
//! [`Difference`](crate::Difference).

/// A single change recorded by a [`Difference`](crate::Difference).
///
/// For a `Remove`, `offset` is the position of `element` in the *base*
/// state. For an `Insert`, `offset` is the position of `element` in the
/// *final* (post-patch) state. `associated_with`, when present, is the
/// offset of a complementary change on the other side that [`infer_moves`]
/// has linked to this one; it is pure metadata and never affects the state
/// transition a [`Difference`](crate::Difference) encodes.
///
/// [`infer_moves`]: crate::Difference::infer_moves
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Change<E> {
    /// `element` was removed from the base sequence at `offset`.
    Remove {
        /// Position of `element` in the base sequence.
        offset: u32,
        /// The removed element.
        element: E,
        /// Offset of the associated `Insert`, if a move was inferred.
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
        associated_with: Option<u32>,
    },
    /// `element` was inserted into the final sequence at `offset`.
    Insert {
        /// Position of `element` in the final sequence.
        offset: u32,
        /// The inserted element.
        element: E,
        /// Offset of the associated `Remove`, if a move was inferred.
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
        associated_with: Option<u32>,
    },
}

impl<E> Change<E> {
    /// The change's offset: a base position for `Remove`, a final position
    /// for `Insert`.
    pub fn offset(&self) -> u32 {
        match self {
            Change::Remove { offset, .. } | Change::Insert { offset, .. } => *offset,
        }
    }

    /// The element carried by this change.
    pub fn element(&self) -> &E {
        match self {
            Change::Remove { element, .. } | Change::Insert { element, .. } => element,
        }
    }

    /// Consumes the change, returning its element.
    pub fn into_element(self) -> E {
        match self {
            Change::Remove { element, .. } | Change::Insert { element, .. } => element,
        }
    }

    /// The offset of the complementary change this one was associated with
    /// by [`Difference::infer_moves`](crate::Difference::infer_moves), if any.
    pub fn associated_with(&self) -> Option<u32> {
        match self {
            Change::Remove {
                associated_with, ..
            }
            | Change::Insert {
                associated_with, ..
            } => *associated_with,
        }
    }

    /// Returns `true` if this is a `Remove`.
    pub fn is_remove(&self) -> bool {
        matches!(self, Change::Remove { .. })
    }

    /// Returns `true` if this is an `Insert`.
    pub fn is_insert(&self) -> bool {
        matches!(self, Change::Insert { .. })
    }

    pub(crate) fn set_associated_with(&mut self, assoc: Option<u32>) {
        match self {
            Change::Remove {
                associated_with, ..
            }
            | Change::Insert {
                associated_with, ..
            } => *associated_with = assoc,
        }
    }
}

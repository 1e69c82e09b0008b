//! The [`Difference`] value: a validated, ordered, sliceable collection of
//! insert/remove changes with a move-inference pass.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;

use crate::change::Change;
use crate::changes::{self, Segment};
use crate::error::{ChangeKind, MalformedDifference};
use crate::myers;
use crate::sequence::OrderedSequence;

/// A finite set of [`Change`]s representing a state transition between two
/// ordered sequences.
///
/// Removals and insertions are always kept sorted ascending by offset
/// (`removals` by base offset, `insertions` by final offset); this is what
/// lets equality and hashing treat a `Difference` as the multiset of changes
/// it was built from, independent of how it was constructed.
///
/// A `Difference` is immutable once built: it is either produced by
/// [`difference`](crate::difference)/[`difference_by`](crate::difference_by)
/// against two live sequences, or rebuilt via [`Difference::from_changes`]
/// from an externally supplied set of changes. [`Difference::infer_moves`]
/// produces a *new* `Difference`; there is no in-place mutation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Difference<E> {
    removals: Vec<Change<E>>,
    insertions: Vec<Change<E>>,
}

impl<E: fmt::Debug> fmt::Debug for Difference<E> {
    /// Prints changes in public iteration order (removes descending, then
    /// inserts ascending), not in the internal sorted-by-kind layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E> Difference<E> {
    /// The removes, sorted ascending by base offset.
    pub fn removals(&self) -> &[Change<E>] {
        &self.removals
    }

    /// The inserts, sorted ascending by final offset.
    pub fn insertions(&self) -> &[Change<E>] {
        &self.insertions
    }

    /// The number of changes (removes plus inserts).
    pub fn len(&self) -> usize {
        self.removals.len() + self.insertions.len()
    }

    /// Returns `true` if this difference contains no changes at all.
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.insertions.is_empty()
    }

    /// Iterates all changes in the difference's public order: every
    /// `Remove` in *descending* base-offset order, followed by every
    /// `Insert` in *ascending* final-offset order.
    ///
    /// This order guarantees that applying the changes one at a time to a
    /// mutable copy of a compatible base via point mutations leaves every
    /// unconsumed change's offset still valid: once the removes are applied
    /// back-to-front, no later removal shifts an earlier one's offset, and
    /// once they're done the inserts can be applied front-to-back into the
    /// now-target-length-shaped sequence.
    pub fn iter(&self) -> impl Iterator<Item = &Change<E>> + '_ {
        self.removals.iter().rev().chain(self.insertions.iter())
    }

    /// Validates an arbitrary collection of changes and, if it satisfies the
    /// structural invariants of a `Difference`, rebuilds it.
    ///
    /// Invariants enforced: all `Remove` offsets are pairwise distinct, all
    /// `Insert` offsets are pairwise distinct, and every `associated_with`
    /// link is symmetric (a `Remove` pointing at an `Insert` offset implies
    /// that `Insert` points back at it, and vice versa). Runs in `O(k log
    /// k)` by sorting, then scanning.
    pub fn from_changes<I>(changes: I) -> Result<Self, MalformedDifference>
    where
        I: IntoIterator<Item = Change<E>>,
    {
        let mut removals = Vec::new();
        let mut insertions = Vec::new();
        for change in changes {
            match change {
                Change::Remove { .. } => removals.push(change),
                Change::Insert { .. } => insertions.push(change),
            }
        }
        removals.sort_by_key(Change::offset);
        insertions.sort_by_key(Change::offset);

        for pair in removals.windows(2) {
            if pair[0].offset() == pair[1].offset() {
                return Err(MalformedDifference::DuplicateOffset {
                    kind: ChangeKind::Remove,
                    offset: pair[0].offset(),
                });
            }
        }
        for pair in insertions.windows(2) {
            if pair[0].offset() == pair[1].offset() {
                return Err(MalformedDifference::DuplicateOffset {
                    kind: ChangeKind::Insert,
                    offset: pair[0].offset(),
                });
            }
        }

        for remove in &removals {
            if let Some(insert_offset) = remove.associated_with() {
                let linked_back = insertions
                    .binary_search_by_key(&insert_offset, Change::offset)
                    .ok()
                    .map(|idx| insertions[idx].associated_with() == Some(remove.offset()))
                    .unwrap_or(false);
                if !linked_back {
                    return Err(MalformedDifference::AsymmetricAssociation {
                        remove_offset: remove.offset(),
                        insert_offset,
                    });
                }
            }
        }
        for insert in &insertions {
            if let Some(remove_offset) = insert.associated_with() {
                let linked_back = removals
                    .binary_search_by_key(&remove_offset, Change::offset)
                    .ok()
                    .map(|idx| removals[idx].associated_with() == Some(insert.offset()))
                    .unwrap_or(false);
                if !linked_back {
                    return Err(MalformedDifference::AsymmetricAssociation {
                        remove_offset,
                        insert_offset: insert.offset(),
                    });
                }
            }
        }

        Ok(Self {
            removals,
            insertions,
        })
    }

    pub(crate) fn from_sorted(removals: Vec<Change<E>>, insertions: Vec<Change<E>>) -> Self {
        debug_assert!(removals.windows(2).all(|w| w[0].offset() < w[1].offset()));
        debug_assert!(insertions.windows(2).all(|w| w[0].offset() < w[1].offset()));
        Self {
            removals,
            insertions,
        }
    }
}

impl<E: Eq + Hash + Clone> Difference<E> {
    /// Produces a new `Difference` where every `Remove`/`Insert` pair whose
    /// element value appears exactly once as a remove and exactly once as
    /// an insert is associated as a move. Elements that occur more than
    /// once on either side are left unassociated, since there is no unique
    /// pairing to infer. Runs in expected `O(k)`.
    pub fn infer_moves(&self) -> Self {
        let mut remove_offsets_by_value: HashMap<&E, Vec<u32>, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for remove in &self.removals {
            remove_offsets_by_value
                .entry(remove.element())
                .or_default()
                .push(remove.offset());
        }
        let mut insert_offsets_by_value: HashMap<&E, Vec<u32>, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for insert in &self.insertions {
            insert_offsets_by_value
                .entry(insert.element())
                .or_default()
                .push(insert.offset());
        }

        let mut removals = self.removals.clone();
        let mut insertions = self.insertions.clone();

        for remove in removals.iter_mut() {
            if let (Some(rs), Some(is)) = (
                remove_offsets_by_value.get(remove.element()),
                insert_offsets_by_value.get(remove.element()),
            ) {
                if rs.len() == 1 && is.len() == 1 {
                    remove.set_associated_with(Some(is[0]));
                }
            }
        }
        for insert in insertions.iter_mut() {
            if let (Some(rs), Some(is)) = (
                remove_offsets_by_value.get(insert.element()),
                insert_offsets_by_value.get(insert.element()),
            ) {
                if rs.len() == 1 && is.len() == 1 {
                    insert.set_associated_with(Some(rs[0]));
                }
            }
        }

        Self {
            removals,
            insertions,
        }
    }
}

impl<'a, E> IntoIterator for &'a Difference<E> {
    type Item = &'a Change<E>;
    type IntoIter = Box<dyn Iterator<Item = &'a Change<E>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Difference<E> {
    /// Serializes as the ordered list of change records described in the
    /// crate's serialization schema, in public iteration order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for Difference<E> {
    /// Deserializes a list of change records and re-validates it through
    /// [`Difference::from_changes`], so a round trip can never smuggle in a
    /// malformed difference.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let changes = Vec::<Change<E>>::deserialize(deserializer)?;
        Difference::from_changes(changes).map_err(serde::de::Error::custom)
    }
}

/// Computes the minimal [`Difference`] that transforms `base` into `target`
/// under `eq`.
pub(crate) fn compute<S, T, E, F>(base: &S, target: &T, mut eq: F) -> Difference<E>
where
    S: OrderedSequence<Item = E> + ?Sized,
    T: OrderedSequence<Item = E> + ?Sized,
    E: Clone,
    F: FnMut(&E, &E) -> bool,
{
    let a_len = base.len() as u32;
    let b_len = target.len() as u32;
    let path = myers::solve(base, target, &mut eq);

    let mut removals = Vec::new();
    let mut insertions = Vec::new();
    for segment in changes::segments(&path.points, a_len, b_len) {
        match segment {
            Segment::Removed { offsets, start } => {
                let mut cursor = start;
                for offset in offsets {
                    removals.push(Change::Remove {
                        offset,
                        element: base.at(cursor).clone(),
                        associated_with: None,
                    });
                    cursor = base.advance(cursor);
                }
            }
            Segment::Inserted { offsets, start } => {
                let mut cursor = start;
                for offset in offsets {
                    insertions.push(Change::Insert {
                        offset,
                        element: target.at(cursor).clone(),
                        associated_with: None,
                    });
                    cursor = target.advance(cursor);
                }
            }
            Segment::Matched => {}
        }
    }

    Difference::from_sorted(removals, insertions)
}

//! The [`OrderedSequence`] capability and the counting-index cursor (§4.B)
//! that streams it.
//!
//! Adoption by concrete container types beyond the std slice/`Vec` case is
//! deliberately out of scope for this crate (see the crate-level docs); the
//! blanket impls below cover the base case every example in the test suite
//! exercises.

/// A finite, positionally ordered collection.
///
/// A sequence exposes only forward movement through an opaque,
/// cheaply-copyable [`Cursor`](OrderedSequence::Cursor) plus an end
/// sentinel, mirroring the "forward iteration with advancing, an end
/// sentinel, and element access by position" contract: no implementation is
/// required to seek to an arbitrary position in O(1), only to read whatever
/// element its *own* cursor currently designates and step that cursor one
/// place forward. `[T]`/`Vec<T>` happen to use a plain `usize` cursor, which
/// supports jumping anywhere — that is an implementation detail of those
/// two impls, not a requirement the trait imposes on others.
pub trait OrderedSequence {
    /// The element type of the sequence.
    type Item;

    /// An opaque cursor into the sequence. Two cursors compare equal iff
    /// they designate the same position; cursors are only ever produced by
    /// [`start`](OrderedSequence::start) or
    /// [`advance`](OrderedSequence::advance) on this same sequence.
    type Cursor: Copy + Eq;

    /// The number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cursor positioned at the first element (or at [`end`](Self::end)
    /// if the sequence is empty).
    fn start(&self) -> Self::Cursor;

    /// The end sentinel: one step past the last element. No element lies at
    /// or past this cursor.
    fn end(&self) -> Self::Cursor;

    /// The element designated by `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor == self.end()`.
    fn at(&self, cursor: Self::Cursor) -> &Self::Item;

    /// `cursor` advanced one step forward.
    ///
    /// # Panics
    ///
    /// Panics if `cursor == self.end()`.
    fn advance(&self, cursor: Self::Cursor) -> Self::Cursor;
}

impl<T> OrderedSequence for [T] {
    type Item = T;
    type Cursor = usize;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    fn advance(&self, cursor: usize) -> usize {
        cursor + 1
    }
}

impl<T> OrderedSequence for Vec<T> {
    type Item = T;
    type Cursor = usize;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn start(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.as_slice().len()
    }

    fn at(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    fn advance(&self, cursor: usize) -> usize {
        cursor + 1
    }
}

impl<T: OrderedSequence + ?Sized> OrderedSequence for &T {
    type Item = T::Item;
    type Cursor = T::Cursor;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn start(&self) -> Self::Cursor {
        (**self).start()
    }

    fn end(&self) -> Self::Cursor {
        (**self).end()
    }

    fn at(&self, cursor: Self::Cursor) -> &Self::Item {
        (**self).at(cursor)
    }

    fn advance(&self, cursor: Self::Cursor) -> Self::Cursor {
        (**self).advance(cursor)
    }
}

/// The counting index adapter (§4.B): pairs a sequence's own cursor with a
/// zero-based offset counted up from [`start`](OrderedSequence::start),
/// so the solver can emit `Change` offsets directly from a forward walk
/// instead of rescanning from the beginning to learn "what offset is this
/// cursor at". The `end` cursor carries no offset, modeled here as `None`.
///
/// For a slice or `Vec`, a cursor *is* already a zero-based offset, so this
/// adapter is mostly bookkeeping; it earns its keep for sequences whose
/// cursor isn't itself an offset (for instance a byte index into a UTF-8
/// string, counting *characters* rather than bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CountingCursor<C> {
    pub cursor: C,
    pub offset: Option<u32>,
}

impl<C: Copy + Eq> CountingCursor<C> {
    /// The counting cursor positioned at `seq`'s first element.
    pub fn start<S>(seq: &S) -> Self
    where
        S: OrderedSequence<Cursor = C> + ?Sized,
    {
        let cursor = seq.start();
        let offset = if cursor == seq.end() { None } else { Some(0) };
        Self { cursor, offset }
    }

    /// The counting cursor positioned at `seq`'s end sentinel.
    pub fn end<S>(seq: &S) -> Self
    where
        S: OrderedSequence<Cursor = C> + ?Sized,
    {
        Self {
            cursor: seq.end(),
            offset: None,
        }
    }

    /// Returns `true` if this cursor has reached `seq`'s end sentinel.
    pub fn is_end<S>(&self, seq: &S) -> bool
    where
        S: OrderedSequence<Cursor = C> + ?Sized,
    {
        self.cursor == seq.end()
    }

    /// Steps one element forward, bumping the offset unless the new cursor
    /// lands on `seq`'s end.
    ///
    /// # Panics
    ///
    /// Panics if this cursor is already at `seq`'s end.
    pub fn advance<S>(&self, seq: &S) -> Self
    where
        S: OrderedSequence<Cursor = C> + ?Sized,
    {
        let cursor = seq.advance(self.cursor);
        let offset = if cursor == seq.end() {
            None
        } else {
            Some(self.offset.expect("advancing a cursor already at end") + 1)
        };
        Self { cursor, offset }
    }

    /// The offset, treating the absent end-sentinel offset as `len` — the
    /// numeric value every implementation already uses as its upper bound,
    /// making this a drop-in replacement for the offset comparisons the
    /// solver's tie-break rule needs.
    pub fn offset_or(&self, len: u32) -> u32 {
        self.offset.unwrap_or(len)
    }
}

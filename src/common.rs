//! The common-prefix primitive: advances two cursors in lock-step while an
//! equivalence predicate holds. This is the hot path of the solver — every
//! diagonal extension during the search invokes it.

use crate::sequence::{CountingCursor, OrderedSequence};

/// Advances `(ca, cb)` while `eq` holds and neither cursor has reached its
/// end. Returns the final `(cursor, offset)` pairs reached.
///
/// Never advances past either side's end, and never buffers anything:
/// equivalence is evaluated directly against `a`/`b` through their own
/// cursors, one step at a time.
pub(crate) fn advance_while_equal<S, T, E, F>(
    a: &S,
    b: &T,
    mut ca: CountingCursor<S::Cursor>,
    mut cb: CountingCursor<T::Cursor>,
    eq: &mut F,
) -> (CountingCursor<S::Cursor>, CountingCursor<T::Cursor>)
where
    S: OrderedSequence<Item = E> + ?Sized,
    T: OrderedSequence<Item = E> + ?Sized,
    F: FnMut(&E, &E) -> bool,
{
    while !ca.is_end(a) && !cb.is_end(b) && eq(a.at(ca.cursor), b.at(cb.cursor)) {
        ca = ca.advance(a);
        cb = cb.advance(b);
    }
    (ca, cb)
}

//! The change-list view: interprets a difference path as a sequence of
//! remove / insert / match ranges.

use std::ops::Range;

use crate::matrix::Point;

/// A single segment of an edit path.
///
/// A removed/inserted segment carries the cursor its run starts at, not just
/// the offset range: offsets alone can't re-derive an element from a
/// sequence whose cursor isn't itself a position (§4.B), so the difference
/// builder walks forward from `start` with `advance` instead of indexing by
/// offset.
pub(crate) enum Segment<CA, CB> {
    /// A run of positions removed from the base sequence.
    Removed { offsets: Range<u32>, start: CA },
    /// A run of positions inserted into the target sequence.
    Inserted { offsets: Range<u32>, start: CB },
    /// A run of positions that matched on both sides (dropped by the
    /// [`Difference`](crate::Difference) builder).
    Matched,
}

/// Translates consecutive waypoint pairs into [`Segment`]s. Waypoint `i` and
/// `i + 1` both advancing means a match, only the base side advancing means
/// a remove, only the target side advancing means an insert.
pub(crate) fn segments<CA, CB>(
    points: &[Point<CA, CB>],
    a_len: u32,
    b_len: u32,
) -> impl Iterator<Item = Segment<CA, CB>> + '_
where
    CA: Copy + Eq,
    CB: Copy + Eq,
{
    points.windows(2).filter_map(move |pair| {
        let (p, q) = (pair[0], pair[1]);
        let pa = p.a.offset_or(a_len);
        let qa = q.a.offset_or(a_len);
        let pb = p.b.offset_or(b_len);
        let qb = q.b.offset_or(b_len);
        if qa > pa && qb == pb {
            Some(Segment::Removed {
                offsets: pa..qa,
                start: p.a.cursor,
            })
        } else if qb > pb && qa == pa {
            Some(Segment::Inserted {
                offsets: pb..qb,
                start: p.b.cursor,
            })
        } else if qa > pa && qb > pb {
            Some(Segment::Matched)
        } else {
            None
        }
    })
}

//! The applier: materializes the target sequence from a base and a
//! [`Difference`] in a single forward pass.

use crate::diff::Difference;
use crate::error::IncompatibleBase;
use crate::sequence::OrderedSequence;

/// Applies `diff` to `base`, producing the sequence `diff` was built to
/// reconstruct.
///
/// Walks `removals` and `insertions` each with their own cursor in the
/// "base-anchored" merged order described by the crate docs: at each step,
/// whichever change has the smaller `offset - changes_of_its_kind_seen_so_far`
/// is taken next, which is the only order that lets this function stream
/// `base` once, left to right.
///
/// Returns [`IncompatibleBase`] if `diff`'s offsets don't line up with
/// `base`: a removal pointing past `base`'s end, an insertion whose
/// projected position exceeds the reconstructed length, or offsets that
/// would require copying a negative span. Per the crate's error handling
/// notes this check does *not* compare a removal's stored element against
/// what's actually at that position in `base` — compatibility here is purely
/// positional.
pub fn apply<S, E>(base: &S, diff: &Difference<E>) -> Result<Vec<E>, IncompatibleBase>
where
    S: OrderedSequence<Item = E> + ?Sized,
    E: Clone,
{
    let len = base.len();
    let removals = diff.removals();
    let insertions = diff.insertions();

    let mut er = 0usize;
    let mut ei = 0usize;
    let mut pos = 0usize;
    let mut cursor = base.start();
    let mut removes_seen: u32 = 0;
    let mut inserts_seen: u32 = 0;
    let mut result = Vec::with_capacity(len + insertions.len());

    while er < removals.len() || ei < insertions.len() {
        let take_remove = if er < removals.len() && ei < insertions.len() {
            let remove_key = removals[er].offset() as i64 - er as i64;
            let insert_key = insertions[ei].offset() as i64 - ei as i64;
            remove_key <= insert_key
        } else {
            er < removals.len()
        };

        if take_remove {
            let offset = removals[er].offset() as usize;
            if offset < pos || offset >= len {
                return Err(IncompatibleBase);
            }
            while pos < offset {
                result.push(base.at(cursor).clone());
                cursor = base.advance(cursor);
                pos += 1;
            }
            cursor = base.advance(cursor); // discard the removed element
            pos += 1;
            removes_seen += 1;
            er += 1;
        } else {
            let offset = insertions[ei].offset();
            let target = offset as i64 + removes_seen as i64 - inserts_seen as i64;
            if target < pos as i64 || target > len as i64 {
                return Err(IncompatibleBase);
            }
            let target = target as usize;
            while pos < target {
                result.push(base.at(cursor).clone());
                cursor = base.advance(cursor);
                pos += 1;
            }
            result.push(insertions[ei].element().clone());
            inserts_seen += 1;
            ei += 1;
        }
    }

    while pos < len {
        result.push(base.at(cursor).clone());
        cursor = base.advance(cursor);
        pos += 1;
    }

    let expected_len = len as i64 + inserts_seen as i64 - removes_seen as i64;
    if pos != len || result.len() as i64 != expected_len {
        return Err(IncompatibleBase);
    }

    Ok(result)
}

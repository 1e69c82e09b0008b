//! The Myers O(ND) edit-path solver.
//!
//! A faithful variation of Myers' greedy LCS/SES algorithm (1986): the
//! search frontier `V[d][k]` (the furthest point reachable on diagonal `k`
//! after a script of length `d`) is stored in a [`LowerTriangularMatrix`],
//! row `d` holding one cell per reachable diagonal. Diagonal `k` at row `d`
//! lives in column `(k + d) / 2`, which is always an integer because `k`
//! and `d` share parity.
//!
//! The tie-break used both while expanding the frontier and while walking it
//! backward — "if `V[d-1][k-1]`'s base offset is less than `V[d-1][k+1]`'s,
//! take the insert branch" — fixes a single canonical minimal script for any
//! pair of inputs. This is what lets two [`Difference`](crate::Difference)s
//! produced by the same state transition compare equal.

use crate::common::advance_while_equal;
use crate::matrix::{LowerTriangularMatrix, Point};
use crate::sequence::{CountingCursor, OrderedSequence};

/// An ascending sequence of waypoints. Consecutive waypoints differ either
/// in `a` only (a remove run), in `b` only (an insert run), or in both (a
/// match run).
pub(crate) struct DiffPath<CA, CB> {
    pub points: Vec<Point<CA, CB>>,
}

/// Computes the minimal edit path between `a` (base) and `b` (target) under
/// `eq`.
pub(crate) fn solve<S, T, E, F>(a: &S, b: &T, mut eq: F) -> DiffPath<S::Cursor, T::Cursor>
where
    S: OrderedSequence<Item = E> + ?Sized,
    T: OrderedSequence<Item = E> + ?Sized,
    F: FnMut(&E, &E) -> bool,
{
    let a_len = a.len() as u32;
    let b_len = b.len() as u32;

    let start = Point {
        a: CountingCursor::start(a),
        b: CountingCursor::start(b),
    };
    let (seed_a, seed_b) = advance_while_equal(a, b, start.a, start.b, &mut eq);
    let seed = Point { a: seed_a, b: seed_b };

    // Either side was exhausted by the common prefix: the remainder is a
    // single remove or insert run (or nothing at all).
    if seed.a.is_end(a) || seed.b.is_end(b) {
        let terminal = Point {
            a: CountingCursor::end(a),
            b: CountingCursor::end(b),
        };
        let mut points = vec![start];
        if seed != start {
            points.push(seed);
        }
        if seed != terminal {
            points.push(terminal);
        }
        return DiffPath { points };
    }

    let max_d = a_len + b_len;
    let mut v: LowerTriangularMatrix<Point<S::Cursor, T::Cursor>> = LowerTriangularMatrix::new();
    v.append_row(seed);

    let mut terminal_d: u32 = 0;
    let mut terminal_col: u32 = 0;
    let mut found = false;
    'search: for d in 1..=max_d {
        v.append_row(seed);
        for col in 0..=d {
            let k = 2 * col as i64 - d as i64;
            let take_insert = if k == -(d as i64) {
                true
            } else if k == d as i64 {
                false
            } else {
                let left = v.get((d - 1) as usize, (col - 1) as usize);
                let right = v.get((d - 1) as usize, col as usize);
                left.a.offset_or(a_len) < right.a.offset_or(a_len)
            };

            let pred = if take_insert {
                *v.get((d - 1) as usize, col as usize)
            } else {
                *v.get((d - 1) as usize, (col - 1) as usize)
            };

            let stepped = if take_insert {
                let b_cursor = if pred.b.is_end(b) { pred.b } else { pred.b.advance(b) };
                Point { a: pred.a, b: b_cursor }
            } else {
                let a_cursor = if pred.a.is_end(a) { pred.a } else { pred.a.advance(a) };
                Point { a: a_cursor, b: pred.b }
            };

            let (ca, cb) = advance_while_equal(a, b, stepped.a, stepped.b, &mut eq);
            let cell = Point { a: ca, b: cb };
            *v.get_mut(d as usize, col as usize) = cell;

            if cell.a.is_end(a) && cell.b.is_end(b) {
                terminal_d = d;
                terminal_col = col;
                found = true;
                break 'search;
            }
        }
    }
    // `d` cannot exceed `a.len() + b.len()`, so the search above always
    // reaches the terminal before the loop runs out.
    debug_assert!(found, "edit distance is bounded by base.len() + target.len()");

    let raw = reconstruct(a, b, &v, terminal_d, terminal_col, a_len, b_len);

    // The frontier is done being read; reclaim its allocation as the
    // destination for the coalesced path instead of letting `coalesce`
    // allocate a third buffer.
    let scratch = v.into_data();
    DiffPath {
        points: coalesce(raw, scratch, a_len, b_len),
    }
}

/// Walks the frontier backward from `(terminal_d, terminal_col)` to `d = 0`,
/// re-deriving each predecessor with the same tie-break rule used during
/// expansion, and returns the raw (uncoalesced) ascending waypoint list.
fn reconstruct<S, T>(
    a: &S,
    b: &T,
    v: &LowerTriangularMatrix<Point<S::Cursor, T::Cursor>>,
    terminal_d: u32,
    terminal_col: u32,
    a_len: u32,
    b_len: u32,
) -> Vec<Point<S::Cursor, T::Cursor>>
where
    S: OrderedSequence + ?Sized,
    T: OrderedSequence + ?Sized,
{
    let start = *v.get(terminal_d as usize, terminal_col as usize);
    let mut raw = vec![start];
    // Tracks `raw`'s last element alongside it, since `raw` is push-only
    // here and its last entry is always this loop's `pred` from the
    // previous step (or `start` before the first step).
    let mut cur = start;
    let mut d = terminal_d;
    let mut col = terminal_col;

    while d > 0 {
        let k = 2 * col as i64 - d as i64;
        let take_insert = if k == -(d as i64) {
            true
        } else if k == d as i64 {
            false
        } else {
            let left = v.get((d - 1) as usize, (col - 1) as usize);
            let right = v.get((d - 1) as usize, col as usize);
            left.a.offset_or(a_len) < right.a.offset_or(a_len)
        };

        let (prev_col, prev_d) = if take_insert { (col, d - 1) } else { (col - 1, d - 1) };
        let pred = *v.get(prev_d as usize, prev_col as usize);

        let edit_point = if take_insert {
            Point {
                a: pred.a,
                b: pred.b.advance(b),
            }
        } else {
            Point {
                a: pred.a.advance(a),
                b: pred.b,
            }
        };
        if edit_point != cur {
            raw.push(edit_point);
        }
        raw.push(pred);
        cur = pred;

        d = prev_d;
        col = prev_col;
    }
    let _ = b_len; // symmetry with a_len kept for readability at call sites
    raw.reverse();
    raw
}

#[derive(PartialEq, Eq, Clone, Copy)]
enum Kind {
    Remove,
    Insert,
    Match,
}

fn classify<CA, CB>(p: Point<CA, CB>, q: Point<CA, CB>, a_len: u32, b_len: u32) -> Option<Kind>
where
    CA: Copy + Eq,
    CB: Copy + Eq,
{
    let a_advanced = q.a.offset_or(a_len) > p.a.offset_or(a_len);
    let b_advanced = q.b.offset_or(b_len) > p.b.offset_or(b_len);
    match (a_advanced, b_advanced) {
        (true, false) => Some(Kind::Remove),
        (false, true) => Some(Kind::Insert),
        (true, true) => Some(Kind::Match),
        (false, false) => None,
    }
}

/// Merges consecutive waypoints that continue the same run (consecutive
/// removes, consecutive inserts, or a contiguous match) into a single
/// segment, as required by the "Reconstruct" step. Writes into `dest`,
/// reusing its existing capacity (donated from the frontier) rather than
/// allocating a new buffer when that capacity already suffices.
fn coalesce<CA, CB>(
    raw: Vec<Point<CA, CB>>,
    mut dest: Vec<Point<CA, CB>>,
    a_len: u32,
    b_len: u32,
) -> Vec<Point<CA, CB>>
where
    CA: Copy + Eq,
    CB: Copy + Eq,
{
    dest.clear();
    let mut current_kind: Option<Kind> = None;

    for p in raw {
        match dest.last_mut() {
            None => dest.push(p),
            Some(last) => match classify(*last, p, a_len, b_len) {
                None => {}
                Some(kind) => {
                    if current_kind == Some(kind) {
                        *last = p;
                    } else {
                        dest.push(p);
                        current_kind = Some(kind);
                    }
                }
            },
        }
    }
    dest
}

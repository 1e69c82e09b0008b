#![deny(missing_docs)]
//! `ondiff` computes and applies differences between two ordered sequences
//! of comparable elements.
//!
//! Given a *base* sequence and a *target* sequence, [`difference`] produces
//! a compact [`Difference`] value that, applied to the base with [`apply`],
//! reconstructs the target. The same `Difference` is a portable boundary
//! value: it can be persisted (behind the `serde` feature), inspected
//! through [`Difference::removals`]/[`Difference::insertions`], and replayed
//! against any sequence whose current state is the original base.
//!
//! # Computing a difference
//!
//! ```
//! use ondiff::difference;
//!
//! let base: Vec<char> = "XABCD".chars().collect();
//! let target: Vec<char> = "XYCD".chars().collect();
//! let diff = difference(&base, &target);
//!
//! assert_eq!(diff.removals().len() + diff.insertions().len(), 3);
//! ```
//!
//! # Applying a difference
//!
//! ```
//! use ondiff::{apply, difference};
//!
//! let base: Vec<char> = "XABCD".chars().collect();
//! let target: Vec<char> = "XYCD".chars().collect();
//! let diff = difference(&base, &target);
//!
//! let rebuilt = apply(&base, &diff).unwrap();
//! assert_eq!(rebuilt, target);
//! ```
//!
//! # Custom equivalence
//!
//! [`difference`] requires `E: PartialEq`. For an explicit predicate (a
//! caller-supplied reflexive, symmetric, transitive equivalence), use
//! [`difference_by`] — the same split `slice::sort`/`slice::sort_by` uses.
//!
//! # Validating externally supplied changes
//!
//! A [`Difference`] can also be rebuilt from a flat collection of
//! [`Change`]s (for example, after deserializing one) via
//! [`Difference::from_changes`], which enforces the structural invariants
//! documented on [`Difference`] and fails with [`MalformedDifference`] if
//! they don't hold.
//!
//! # Moves
//!
//! A move is never a first-class change kind; it is a post-hoc association
//! over a remove/insert pair with equal element values, computed by
//! [`Difference::infer_moves`].
//!
//! # Concurrency
//!
//! The engine is purely in-memory and synchronous. A `Difference`, once
//! built, is deeply immutable and `Send + Sync` whenever `E` is, so
//! concurrent calls to [`apply`] against independent base sequences over the
//! same `Difference` are race-free. The equivalence predicate passed to
//! [`difference_by`] runs on the caller's thread and must be pure
//! (deterministic, side-effect-free); a non-pure predicate yields an
//! unspecified but still memory-safe result.

mod apply;
mod change;
mod changes;
mod common;
mod diff;
mod error;
mod matrix;
mod myers;
mod sequence;

pub use apply::apply;
pub use change::Change;
pub use diff::Difference;
pub use error::{ChangeKind, IncompatibleBase, MalformedDifference};
pub use sequence::OrderedSequence;

/// Computes the minimal [`Difference`] that transforms `base` into `target`,
/// using `E: PartialEq` as the equivalence predicate.
///
/// Always succeeds: every combination of inputs, including empty or
/// identical sequences, produces a well-defined (possibly empty)
/// `Difference`. The number of changes it contains equals the Myers edit
/// distance between `base` and `target`.
pub fn difference<S, T, E>(base: &S, target: &T) -> Difference<E>
where
    S: OrderedSequence<Item = E> + ?Sized,
    T: OrderedSequence<Item = E> + ?Sized,
    E: PartialEq + Clone,
{
    difference_by(base, target, |a, b| a == b)
}

/// Like [`difference`], but with an explicit equivalence predicate instead
/// of `E: PartialEq`.
pub fn difference_by<S, T, E, F>(base: &S, target: &T, eq: F) -> Difference<E>
where
    S: OrderedSequence<Item = E> + ?Sized,
    T: OrderedSequence<Item = E> + ?Sized,
    E: Clone,
    F: FnMut(&E, &E) -> bool,
{
    diff::compute(base, target, eq)
}

#[cfg(test)]
mod tests;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{apply, difference, Change, Difference, MalformedDifference};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn scenario_remove_and_insert() {
    let base = chars("XABCD");
    let target = chars("XYCD");
    let diff = difference(&base, &target);

    assert_eq!(
        diff.removals().iter().map(Change::offset).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(
        diff.insertions().iter().map(Change::offset).collect::<Vec<_>>(),
        vec![1]
    );
    assert_eq!(apply(&base, &diff).unwrap(), target);
}

#[test]
fn scenario_pure_insertion() {
    let base: Vec<i32> = vec![];
    let target = vec![1, 2, 3];
    let diff = difference(&base, &target);

    assert!(diff.removals().is_empty());
    assert_eq!(
        diff.insertions().iter().map(Change::offset).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(apply(&base, &diff).unwrap(), target);
}

#[test]
fn scenario_pure_removal() {
    let base = vec![1, 2, 3];
    let target: Vec<i32> = vec![];
    let diff = difference(&base, &target);

    assert!(diff.insertions().is_empty());
    assert_eq!(
        diff.removals().iter().map(Change::offset).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    // Public iteration yields removes in strictly descending base-offset order.
    assert_eq!(
        diff.iter().map(Change::offset).collect::<Vec<_>>(),
        vec![2, 1, 0]
    );
    assert_eq!(apply(&base, &diff).unwrap(), target);
}

#[test]
fn scenario_move_inference() {
    let base = vec![1, 2, 3];
    let target = vec![3, 1, 2];
    let diff = difference(&base, &target);

    // A minimal script is `remove 3@2, insert 3@0`.
    assert_eq!(diff.removals().len() + diff.insertions().len(), 2);

    let inferred = diff.infer_moves();
    let remove = inferred
        .removals()
        .iter()
        .find(|c| *c.element() == 3)
        .unwrap();
    let insert = inferred
        .insertions()
        .iter()
        .find(|c| *c.element() == 3)
        .unwrap();
    assert_eq!(remove.associated_with(), Some(insert.offset()));
    assert_eq!(insert.associated_with(), Some(remove.offset()));
    assert_eq!(apply(&base, &inferred).unwrap(), target);
}

#[test]
fn scenario_identical_sequences() {
    let base = chars("abc");
    let diff = difference(&base, &base);
    assert!(diff.is_empty());
    assert_eq!(apply(&base, &diff).unwrap(), base);
}

#[test]
fn scenario_apply_is_positional_not_element_aware() {
    let base = vec![1, 2, 3];
    let target = vec![3, 1, 2];
    let diff = difference(&base, &target);

    // The applier never checks that a removed element in `other_base`
    // matches what the diff recorded; compatibility is purely positional.
    let other_base = vec![9, 9, 9];
    let result = apply(&other_base, &diff).unwrap();
    assert_eq!(result.len(), 3);
}

#[test]
fn empty_diff_applies_to_empty_base() {
    let base: Vec<i32> = vec![];
    let diff = difference(&base, &base);
    assert!(diff.is_empty());
    assert_eq!(apply(&base, &diff).unwrap(), base);
}

#[test]
fn from_changes_round_trips_a_computed_difference() {
    let base = chars("XABCD");
    let target = chars("XYCD");
    let diff = difference(&base, &target);

    let rebuilt = Difference::from_changes(diff.iter().cloned()).unwrap();
    assert_eq!(rebuilt, diff);
}

#[test]
fn from_changes_rejects_duplicate_offsets() {
    let changes = vec![
        Change::Remove {
            offset: 0,
            element: 'a',
            associated_with: None,
        },
        Change::Remove {
            offset: 0,
            element: 'b',
            associated_with: None,
        },
    ];
    assert!(matches!(
        Difference::from_changes(changes),
        Err(MalformedDifference::DuplicateOffset { offset: 0, .. })
    ));
}

#[test]
fn from_changes_rejects_asymmetric_association() {
    let changes = vec![
        Change::Remove {
            offset: 0,
            element: 'a',
            associated_with: Some(0),
        },
        Change::Insert {
            offset: 0,
            element: 'a',
            associated_with: None,
        },
    ];
    assert!(matches!(
        Difference::from_changes(changes),
        Err(MalformedDifference::AsymmetricAssociation { .. })
    ));
}

#[test]
fn from_changes_accepts_symmetric_association() {
    let changes = vec![
        Change::Remove {
            offset: 2,
            element: 'a',
            associated_with: Some(0),
        },
        Change::Insert {
            offset: 0,
            element: 'a',
            associated_with: Some(2),
        },
    ];
    assert!(Difference::from_changes(changes).is_ok());
}

#[test]
fn apply_via_public_iteration_order_matches_apply() {
    let base = chars("XABCD");
    let target = chars("XYCD");
    let diff = difference(&base, &target);

    // Removes descending, then inserts ascending, applied one at a time to
    // a mutable copy, should reconstruct the target.
    let mut working = base.clone();
    for change in diff.iter() {
        match change {
            Change::Remove { offset, .. } => {
                working.remove(*offset as usize);
            }
            Change::Insert { offset, element, .. } => {
                working.insert(*offset as usize, element.clone());
            }
        }
    }
    assert_eq!(working, target);
}

fn brute_force_lcs_len<E: PartialEq>(a: &[E], b: &[E]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table[a.len()][b.len()]
}

proptest! {
    #[test]
    fn round_trip(a in prop::collection::vec(0i32..6, 0..12), b in prop::collection::vec(0i32..6, 0..12)) {
        let diff = difference(&a, &b);
        let rebuilt = apply(&a, &diff).unwrap();
        prop_assert_eq!(rebuilt, b);
    }

    #[test]
    fn minimality_matches_brute_force_lcs(a in prop::collection::vec(0i32..4, 0..8), b in prop::collection::vec(0i32..4, 0..8)) {
        let diff = difference(&a, &b);
        let edit_distance = diff.removals().len() + diff.insertions().len();
        let lcs = brute_force_lcs_len(&a, &b);
        prop_assert_eq!(edit_distance, a.len() + b.len() - 2 * lcs);
    }

    #[test]
    fn determinism(a in prop::collection::vec(0i32..6, 0..12), b in prop::collection::vec(0i32..6, 0..12)) {
        let first = difference(&a, &b);
        let second = difference(&a, &b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn from_changes_round_trips_any_computed_diff(a in prop::collection::vec(0i32..6, 0..12), b in prop::collection::vec(0i32..6, 0..12)) {
        let diff = difference(&a, &b);
        let rebuilt = Difference::from_changes(diff.iter().cloned()).unwrap();
        prop_assert_eq!(rebuilt, diff);
    }

    #[test]
    fn move_inference_preserves_round_trip(a in prop::collection::vec(0i32..6, 1..10), b in prop::collection::vec(0i32..6, 1..10)) {
        let diff = difference(&a, &b).infer_moves();
        let rebuilt = apply(&a, &diff).unwrap();
        prop_assert_eq!(rebuilt, b);
    }
}

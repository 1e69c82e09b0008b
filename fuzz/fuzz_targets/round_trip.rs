#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use ondiff::{apply, difference, Difference};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input {
    base: Vec<u8>,
    target: Vec<u8>,
}

/// Exercises the full public surface on arbitrary byte sequences:
/// - `difference` always succeeds and `apply` always reconstructs `target`.
/// - the changes it contains round-trip through `from_changes`.
/// - `infer_moves` never breaks the round-trip.
fn do_fuzz(Input { base, target }: Input) {
    let diff = difference(&base, &target);
    let rebuilt = apply(&base, &diff).expect("a computed diff must apply to the base it was built from");
    assert_eq!(rebuilt, target);

    let revalidated = Difference::from_changes(diff.iter().cloned())
        .expect("a computed diff must satisfy its own invariants");
    assert_eq!(revalidated, diff);

    let moved = diff.infer_moves();
    let rebuilt_after_moves = apply(&base, &moved).expect("move inference must preserve compatibility");
    assert_eq!(rebuilt_after_moves, target);
}

fuzz_target!(|input: Input| {
    do_fuzz(input);
});

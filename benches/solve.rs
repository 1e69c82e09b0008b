use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ondiff::{apply, difference};

fn random_lines(seed: u64, count: usize, vocab: usize) -> Vec<u32> {
    // A tiny xorshift so the bench has no extra dependency on `rand`.
    let mut state = seed | 1;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % vocab as u64) as u32
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let base = random_lines(1, 5_000, 200);
    let mut target = base.clone();
    // Perturb ~5% of the lines to produce a realistic, mostly-similar diff.
    for i in (0..target.len()).step_by(20) {
        target[i] = target[i].wrapping_add(1);
    }

    c.bench_function("difference/5k_lines_5pct_changed", |b| {
        b.iter(|| black_box(difference(black_box(&base), black_box(&target))))
    });

    let diff = difference(&base, &target);
    c.bench_function("apply/5k_lines_5pct_changed", |b| {
        b.iter(|| black_box(apply(black_box(&base), black_box(&diff)).unwrap()))
    });
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

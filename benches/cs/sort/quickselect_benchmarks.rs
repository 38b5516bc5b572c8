use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use quickrank::sort::kth_smallest;

fn random_values(len: usize) -> Vec<i32> {
    let mut rng = ChaCha20Rng::seed_from_u64(0xA1C0);
    (0..len).map(|_| rng.gen_range(0..100)).collect()
}

fn bench_quickselect(c: &mut Criterion) {
    let mut group = c.benchmark_group("quickselect");
    for &size in &[5_000usize, 10_000, 20_000, 50_000] {
        let data = random_values(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut arr| {
                    let high = arr.len() - 1;
                    black_box(kth_smallest(&mut arr, 0, high, 1_000).unwrap())
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quickselect);
criterion_main!(benches);

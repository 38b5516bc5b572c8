use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use quickrank::sort::quicksort;

fn random_values(len: usize) -> Vec<i32> {
    let mut rng = ChaCha20Rng::seed_from_u64(0xA1C0);
    (0..len).map(|_| rng.gen_range(0..100)).collect()
}

fn bench_quicksort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quicksort");
    for &size in &[5_000usize, 10_000, 20_000, 50_000] {
        let data = random_values(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut arr| {
                    let high = arr.len() - 1;
                    quicksort(&mut arr, 0, high);
                    black_box(arr)
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quicksort);
criterion_main!(benches);

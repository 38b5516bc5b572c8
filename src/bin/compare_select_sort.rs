use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use quickrank::sort::{kth_smallest, quicksort};
use quickrank::Result;

/// Times quickselect against quicksort for the k-th smallest element on
/// random arrays of each given size. Each algorithm gets its own copy of
/// the same input so the comparison stays fair.
fn run(sizes: &[usize], k: usize, seed: u64) -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    for &size in sizes {
        println!("\n=== Array size: {size} ===");
        let original: Vec<i32> = (0..size).map(|_| rng.gen_range(0..100)).collect();
        let high = original.len() - 1;

        let mut arr = original.clone();
        let start = Instant::now();
        let kth = kth_smallest(&mut arr, 0, high, k)?;
        let elapsed = start.elapsed();
        println!("Quickselect:");
        println!("  K-th smallest element: {kth}");
        println!("  Time taken: {:.6} seconds", elapsed.as_secs_f64());

        let mut arr = original.clone();
        let start = Instant::now();
        quicksort(&mut arr, 0, high);
        let kth = arr[k - 1];
        let elapsed = start.elapsed();
        println!("Quicksort:");
        println!("  K-th smallest element: {kth}");
        println!("  Time taken: {:.6} seconds", elapsed.as_secs_f64());
    }

    Ok(())
}

fn main() -> Result<()> {
    run(&[5_000, 10_000, 20_000, 50_000], 1_000, 0x5eed)
}

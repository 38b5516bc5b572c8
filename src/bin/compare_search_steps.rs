use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use quickrank::randomized::{RandomizedBst, SkipList};

const QUERIES: usize = 1_000_000;
const MAX_LEVEL: usize = 16;
const P: f64 = 0.5;

/// Builds a randomized BST and a skip list from the same random keys at
/// each size, then reports the average number of search steps per query.
/// Half the queries look up stored keys, half are fresh draws.
fn run(sizes: &[usize], queries: usize, seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    for &size in sizes {
        println!("\nn = {size}");
        let data: Vec<i32> = (0..size).map(|_| rng.gen_range(0..1_000_000)).collect();
        let lookups: Vec<i32> = (0..queries)
            .map(|i| {
                if i < queries / 2 {
                    data[rng.gen_range(0..size)]
                } else {
                    rng.gen_range(0..1_000_000)
                }
            })
            .collect();

        let mut bst = RandomizedBst::new();
        let mut skip = SkipList::new(MAX_LEVEL, P);
        for &key in &data {
            bst.insert(key);
            skip.insert(key);
        }

        let mut bst_steps: u64 = 0;
        let mut skip_steps: u64 = 0;
        for key in &lookups {
            bst_steps += bst.search_steps(key).1 as u64;
            skip_steps += skip.search_steps(key).1 as u64;
        }

        println!("RBST: {:.2}", bst_steps as f64 / queries as f64);
        println!("Skip: {:.2}", skip_steps as f64 / queries as f64);
    }
}

fn main() {
    run(&[5_000, 10_000, 20_000, 50_000, 100_000], QUERIES, 0xB57);
}

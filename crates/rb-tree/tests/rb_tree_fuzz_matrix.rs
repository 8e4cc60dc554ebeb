use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_tree::RbTree;

/// Replays a seeded random insert/delete trace against a `BTreeSet` model.
fn run_trace(seed: u64, steps: usize, key_range: i64) {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut tree = RbTree::new();
    let mut model = BTreeSet::new();

    for step in 0..steps {
        let key = rng.gen_range(0..key_range);
        let insert = rng.gen_bool(0.55);
        if insert {
            assert_eq!(tree.insert(key).unwrap(), model.insert(key));
        } else {
            assert_eq!(tree.delete_by_key(&key), model.remove(&key));
        }
        if let Err(err) = tree.validate() {
            let op = if insert { 'i' } else { 'd' };
            panic!("seed {seed} step {step} ({op},{key}): {err}\n{}", tree.dump());
        }
        assert_eq!(tree.len(), model.len(), "seed {seed} step {step}");
    }

    assert!(tree.iter().eq(model.iter()), "seed {seed}: traversal diverged");

    // Drain in random order.
    let mut rest: Vec<i64> = model.iter().copied().collect();
    while !rest.is_empty() {
        let key = rest.swap_remove(rng.gen_range(0..rest.len()));
        assert!(tree.delete_by_key(&key));
        if let Err(err) = tree.validate() {
            panic!("seed {seed} drain ({key}): {err}");
        }
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_fuzz_dense_keys_matrix() {
    for seed in 0..16 {
        run_trace(seed, 2_000, 64);
    }
}

#[test]
fn rb_fuzz_sparse_keys_matrix() {
    for seed in 100..108 {
        run_trace(seed, 4_000, 1_000_000);
    }
}

#[test]
fn rb_fuzz_mid_range_keys_matrix() {
    for seed in [7, 42, 1337, 0xdead_beef] {
        run_trace(seed, 3_000, 512);
    }
}

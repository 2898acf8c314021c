use btree::BTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::time::Instant;

/// Apply the same random insert/remove stream to both sets and compare
/// answers at every step.
fn random_ops_match_btreeset(min_degree: usize, operations: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = BTree::new(min_degree).unwrap();
    let mut reference = BTreeSet::new();

    for step in 0..operations {
        let key: i32 = rng.gen_range(0..400);
        if rng.gen_bool(0.6) {
            assert_eq!(
                tree.insert(key),
                reference.insert(key),
                "insert({}) diverged at step {}",
                key,
                step
            );
        } else {
            assert_eq!(
                tree.remove(&key),
                reference.remove(&key),
                "remove({}) diverged at step {}",
                key,
                step
            );
        }

        let probe: i32 = rng.gen_range(-10..410);
        assert_eq!(tree.contains(&probe), reference.contains(&probe));

        if step % 97 == 0 {
            tree.validate().unwrap();
        }
    }

    tree.validate().unwrap();
    assert_eq!(tree.len(), reference.len());
    assert_eq!(
        tree.in_order_keys(),
        reference.iter().copied().collect::<Vec<_>>()
    );
    assert_eq!(tree.first(), reference.first());
    assert_eq!(tree.last(), reference.last());
}

/// Fill, then drain in random order, checking the structure after each removal.
fn drain_matches_btreeset(min_degree: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = BTree::new(min_degree).unwrap();
    let mut reference = BTreeSet::new();

    while reference.len() < 300 {
        let key: i32 = rng.gen_range(-1000..1000);
        assert_eq!(tree.insert(key), reference.insert(key));
    }

    let mut remaining: Vec<i32> = reference.iter().copied().collect();
    while !remaining.is_empty() {
        let key = remaining.swap_remove(rng.gen_range(0..remaining.len()));
        assert!(tree.remove(&key));
        reference.remove(&key);
        tree.validate().unwrap();
        assert_eq!(tree.len(), reference.len());
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 1);
}

macro_rules! degree_battery {
    ($($degree:literal),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_random_ops_match_btreeset_t $degree>]() {
                    random_ops_match_btreeset($degree, 3000, 0xb7ee + $degree);
                }

                #[test]
                fn [<test_drain_matches_btreeset_t $degree>]() {
                    drain_matches_btreeset($degree, 0xd7a1 + $degree);
                }
            }
        )*
    };
}

degree_battery!(2, 3, 4, 5, 8, 16, 32);

#[test]
fn test_insertion_vs_btreeset() {
    const TEST_SIZE: i32 = 10000;
    const MIN_DEGREE: usize = 16;

    let start = Instant::now();
    let mut reference = BTreeSet::new();
    for key in 0..TEST_SIZE {
        reference.insert(key);
    }
    let std_duration = start.elapsed();

    let start = Instant::now();
    let mut tree = BTree::new(MIN_DEGREE).unwrap();
    for key in 0..TEST_SIZE {
        tree.insert(key);
    }
    let btree_duration = start.elapsed();

    println!("=== INSERTION vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", std_duration);
    println!("BTree: {:?}", btree_duration);

    assert_eq!(reference.len(), TEST_SIZE as usize);
    assert_eq!(tree.len(), TEST_SIZE as usize);
}

#[test]
fn test_lookup_vs_btreeset() {
    const TEST_SIZE: i32 = 10000;
    const MIN_DEGREE: usize = 16;

    let mut reference = BTreeSet::new();
    let mut tree = BTree::new(MIN_DEGREE).unwrap();
    for key in (0..TEST_SIZE).map(|i| i * 2) {
        reference.insert(key);
        tree.insert(key);
    }

    let start = Instant::now();
    let std_hits = (0..TEST_SIZE).filter(|k| reference.contains(k)).count();
    let std_duration = start.elapsed();

    let start = Instant::now();
    let btree_hits = (0..TEST_SIZE).filter(|k| tree.contains(k)).count();
    let btree_duration = start.elapsed();

    println!("=== LOOKUP vs BTreeSet ===");
    println!("std::collections::BTreeSet: {:?}", std_duration);
    println!("BTree: {:?}", btree_duration);

    assert_eq!(std_hits, btree_hits);
    assert_eq!(btree_hits, (TEST_SIZE / 2) as usize);
}

use btree::{BTree, BTreeError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn test_small_degree_two_tree() {
    let mut tree = BTree::new(2).unwrap();
    for key in [10, 20, 5, 6, 12, 30, 7, 17] {
        assert!(tree.insert(key));
    }

    assert!(tree.contains(&17));
    assert!(!tree.contains(&18));
    assert_eq!(tree.in_order_keys(), vec![5, 6, 7, 10, 12, 17, 20, 30]);
    tree.validate().unwrap();
}

#[test]
fn test_degree_one_is_rejected() {
    let err = BTree::<i32>::new(1).unwrap_err();
    assert!(matches!(err, BTreeError::InvalidDegree(_)));
}

#[test]
fn test_duplicate_insert_then_deletes() {
    // Degree 1 is unsupported, so the sequence runs at the smallest legal degree.
    let mut tree = BTree::new(2).unwrap();
    let keys = [20, 40, 10, 30, 32, 50, 60, 5, 15, 25, 28, 31, 32, 35, 45, 55, 65];

    let inserted: Vec<bool> = keys.iter().map(|&key| tree.insert(key)).collect();
    assert_eq!(inserted.iter().filter(|&&added| !added).count(), 1);
    assert!(!inserted[12], "second 32 must be a no-op");
    assert_eq!(tree.len(), 16);
    tree.validate().unwrap();

    for key in [31, 28, 45, 32] {
        assert!(tree.remove(&key), "expected {} to be present", key);
        tree.validate().unwrap();
    }

    assert_eq!(
        tree.in_order_keys(),
        vec![5, 10, 15, 20, 25, 30, 35, 40, 50, 55, 60, 65]
    );
    let depths = tree.leaf_depths();
    assert!(depths.iter().all(|&d| d == depths[0]));
}

fn bulk_round_trip(min_degree: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<i32> = (0..500).collect();
    keys.shuffle(&mut rng);

    let mut tree = BTree::new(min_degree).unwrap();
    for &key in &keys {
        tree.insert(key);
    }
    tree.validate().unwrap();

    for key in &keys {
        assert!(tree.contains(key), "missing {}", key);
    }
    for absent in [507, 513, 5000, -1, 1000, 3100, 2900] {
        assert!(!tree.contains(&absent), "unexpected {}", absent);
    }

    for key in &keys {
        assert!(tree.remove(key));
    }
    assert!(tree.is_empty());
    tree.validate().unwrap();

    for &key in &keys {
        tree.insert(key);
    }
    for key in keys.iter().rev() {
        assert!(tree.remove(key));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.allocated_node_count(), 1);
}

#[test]
fn test_bulk_round_trip() {
    bulk_round_trip(3, 0x5eed);
}

#[test]
fn test_bulk_round_trip_across_degrees() {
    for min_degree in [2, 4, 7, 16, 64] {
        bulk_round_trip(min_degree, min_degree as u64);
    }
}

//!
//! test of the collections through the public api
//!
use linear::prelude::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::Write;
use test_case::test_case;

/// Apply the same random operations to a `Sequence` and a std `Vec`
/// and check that they never disagree.
fn check_against_vec<S: Sequence<Item = u32>>(mut seq: S, seed: u64, steps: usize) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut model: Vec<u32> = Vec::new();
    for step in 0..steps {
        let x: u32 = rng.gen_range(0..1000);
        match rng.gen_range(0..6) {
            0 | 1 => {
                seq.add(x);
                model.push(x);
            }
            2 => {
                seq.add_front(x);
                model.insert(0, x);
            }
            3 => {
                let i = rng.gen_range(0..model.len() + 2);
                let r = seq.insert_at(i, x);
                if i <= model.len() {
                    assert!(r.is_ok());
                    model.insert(i, x);
                } else {
                    assert!(r.unwrap_err().is_out_of_bounds());
                }
            }
            4 => {
                let i = rng.gen_range(0..model.len() + 2);
                let r = seq.remove(i);
                if i < model.len() {
                    assert_eq!(r.unwrap(), model.remove(i));
                } else {
                    assert!(r.unwrap_err().is_out_of_bounds());
                }
            }
            _ => {
                assert_eq!(seq.index_of(&x), model.iter().position(|&y| y == x));
            }
        }
        assert_eq!(seq.size(), model.len(), "step {}", step);
    }
    assert_eq!(seq.values(), model);
    for (i, x) in model.iter().enumerate() {
        assert_eq!(seq.get(i).unwrap(), x);
    }
}

#[test_case(0 ; "seed 0")]
#[test_case(1 ; "seed 1")]
#[test_case(42 ; "seed 42")]
fn vector_matches_vec(seed: u64) {
    check_against_vec(Vector::new(), seed, 2000);
    check_against_vec(Vector::array_list(), seed, 2000);
}

#[test_case(0 ; "seed 0")]
#[test_case(7 ; "seed 7")]
fn chain_matches_vec(seed: u64) {
    check_against_vec(SinglyLinkedChain::new(), seed, 1000);
}

#[test_case(-1 ; "negative")]
#[test_case(3 ; "at length")]
#[test_case(10 ; "far beyond")]
fn get_out_of_bounds(index: i32) {
    let v = vector![10, 20, 30];
    let l = chain![10, 20, 30];
    assert!(v.get(index).unwrap_err().is_out_of_bounds());
    assert!(l.get(index).unwrap_err().is_out_of_bounds());
}

#[test]
fn growth_invariant_with_random_policy() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    for _ in 0..20 {
        let growth = rng.gen_range(1.01..4.0);
        let policy = GrowthPolicy::new(growth, 0.25, IndexMode::Absolute, false);
        let mut v: Vector<usize> = Vector::with_policy(policy).unwrap();
        let mut capacity = v.capacity();
        for i in 0..500 {
            v.add(i);
            assert!(v.size() <= v.capacity());
            assert!(v.capacity() >= capacity);
            capacity = v.capacity();
        }
        assert!((0..500).all(|i| *v.get(i).unwrap() == i));
    }
}

#[test]
fn removal_shifts_left() {
    let original: Vec<i32> = (0..10).collect();
    for i in 0..10 {
        let mut v: Vector<i32> = original.iter().cloned().collect();
        let mut l: SinglyLinkedChain<i32> = original.iter().cloned().collect();
        v.remove(i).unwrap();
        l.remove(i).unwrap();
        assert_eq!(v.size(), 9);
        assert_eq!(l.size(), 9);
        for j in 0..9 {
            let expected = if j < i { original[j] } else { original[j + 1] };
            assert_eq!(*v.get(j).unwrap(), expected);
            assert_eq!(*l.get(j).unwrap(), expected);
        }
    }
}

#[test]
fn stack_reverses_pushes() {
    let mut s = stack![1, 2, 3];
    let popped: Vec<i32> = (0..3).map(|_| s.pop().unwrap()).collect();
    assert_eq!(popped, vec![3, 2, 1]);
    assert!(s.pop().unwrap_err().is_empty_container());
}

#[test]
fn clear_is_idempotent_everywhere() {
    let mut v = vector![1, 2];
    let mut l = chain![1, 2];
    let mut s = stack![1, 2];
    for _ in 0..2 {
        Collection::clear(&mut v);
        Collection::clear(&mut l);
        Collection::clear(&mut s);
        assert_eq!(Collection::size(&v), 0);
        assert_eq!(Collection::size(&l), 0);
        assert_eq!(Collection::size(&s), 0);
    }
}

#[test]
fn policy_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"growth": 2.0, "shrink": 0.5, "auto_shrink": true}}"#).unwrap();
    let policy = GrowthPolicy::from_file(file.path()).unwrap();
    assert_eq!(policy.growth, 2.0);
    assert_eq!(policy.shrink, 0.5);
    assert!(policy.auto_shrink);
    assert_eq!(policy.index_mode, IndexMode::Absolute);

    let mut v: Vector<u8> = Vector::with_policy(policy).unwrap();
    v.add_all(0..8);
    let full = v.capacity();
    for _ in 0..6 {
        v.remove(0).unwrap();
    }
    assert!(v.capacity() < full);
    assert_eq!(v.values(), &[6, 7]);
}

#[test]
fn policy_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let e = GrowthPolicy::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(e, CollectionError::Io(_)));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"growth": 1e20}}"#).unwrap();
    let e = GrowthPolicy::from_file(file.path()).unwrap_err();
    assert!(matches!(e, CollectionError::InvalidPolicy(_)));
}

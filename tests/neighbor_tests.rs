mod common;

use common::*;
use nk_landscape::{NkError, NkModel};
use std::collections::HashMap;

#[test]
fn test_neighbors_match_full_evaluation() {
    let m = NkModel::with_seed(10, 3, 1.0, 2024).unwrap();
    let g = vec![0, 1, 1, 0, 1, 0, 0, 1, 1, 0];
    let all: Vec<usize> = (0..10).collect();

    for (locus, (neighbor, value)) in m.neighbors(&g, &all).unwrap().into_iter().enumerate() {
        let mut expected = g.clone();
        expected[locus] = 1 - expected[locus];
        assert_eq!(neighbor, expected);
        assert_eq!(value, m.evaluate(&expected).unwrap(), "Locus {} diverged", locus);
    }
}

#[test]
fn test_stub_neighbors() {
    let m = stub_model(1.0);
    let (states, values) = m
        .neighbor_values(&HashMap::from([(0u32, STUB_STATE.to_vec())]), None)
        .unwrap();

    assert_eq!(
        states[&0],
        vec![
            vec![0, 0, 1, 1],
            vec![1, 1, 1, 1],
            vec![1, 0, 0, 1],
            vec![1, 0, 1, 0]
        ]
    );
    // 0011 = 16/32, 1111 = 19/32, 1001 = 15/32, 1010 = 25/32
    assert_eq!(values[&0], vec![16.0 / 32.0, 19.0 / 32.0, 15.0 / 32.0, 25.0 / 32.0]);
}

#[test]
fn test_neighbor_values_with_subsets_and_exponent() {
    let m = NkModel::with_seed(8, 2, 3.0, 8).unwrap();
    let genotypes = HashMap::from([
        ("a", vec![0, 0, 0, 0, 0, 0, 0, 0]),
        ("b", vec![1, 0, 1, 0, 1, 0, 1, 0]),
    ]);
    let loci = HashMap::from([("a", vec![7, 0]), ("b", vec![3])]);

    let (states, values) = m.neighbor_values(&genotypes, Some(&loci)).unwrap();

    assert_eq!(states["a"].len(), 2);
    assert_eq!(states["a"][0], vec![0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(states["b"], vec![vec![1, 0, 1, 1, 1, 0, 1, 0]]);
    for id in ["a", "b"] {
        for (s, v) in states[id].iter().zip(&values[id]) {
            assert_eq!(*v, m.evaluate(s).unwrap());
        }
    }
}

#[test]
fn test_subset_count_mismatch() {
    let m = NkModel::with_seed(4, 1, 1.0, 1).unwrap();
    let genotypes = HashMap::from([(1, vec![0, 0, 0, 0]), (2, vec![1, 1, 1, 1])]);
    let loci = HashMap::from([(1, vec![0])]);

    let res = m.neighbor_values(&genotypes, Some(&loci));
    assert!(matches!(res, Err(NkError::Validation(_))));
    assert!(m.table().is_empty(), "No evaluation should happen on a rejected call");
}

#[test]
fn test_batch_locus_out_of_range() {
    let m = NkModel::with_seed(4, 1, 1.0, 1).unwrap();
    let genotypes = HashMap::from([(1, vec![0, 0, 0, 0]), (2, vec![1, 1, 1, 1])]);
    let loci = HashMap::from([(1, vec![0, 2]), (2, vec![1, 4])]);

    let res = m.neighbor_values(&genotypes, Some(&loci));
    assert!(matches!(res, Err(NkError::Validation(_))));
    assert!(m.table().is_empty());
}

#[test]
fn test_subset_ids_must_match() {
    let m = NkModel::with_seed(4, 1, 1.0, 1).unwrap();
    let genotypes = HashMap::from([(1, vec![0, 0, 0, 0])]);
    let loci = HashMap::from([(9, vec![0])]);
    assert!(matches!(
        m.neighbor_values(&genotypes, Some(&loci)),
        Err(NkError::Validation(_))
    ));
}

#[test]
fn test_empty_subset_gives_no_neighbors() {
    let m = stub_model(1.0);
    let genotypes = HashMap::from([(0, STUB_STATE.to_vec())]);
    let loci = HashMap::from([(0, Vec::new())]);
    let (states, values) = m.neighbor_values(&genotypes, Some(&loci)).unwrap();
    assert!(states[&0].is_empty());
    assert!(values[&0].is_empty());
}

#![allow(dead_code)]

use nk_landscape::{ModelBuildParams, NkModel};

/// Builds a model with a fully specified landscape.
pub fn fixed_model(
    k: usize,
    exponent: f64,
    dependence: Vec<Vec<usize>>,
    table: Vec<Vec<(Vec<u8>, f64)>>,
) -> NkModel {
    ModelBuildParams::builder()
        .n(dependence.len())
        .k(k)
        .exponent(exponent)
        .dependence(dependence)
        .table(table)
        .build()
        .build_model()
        .expect("Failed to build fixed model")
}

fn pairs(values: [f64; 4]) -> Vec<(Vec<u8>, f64)> {
    vec![
        (vec![0, 0], values[0]),
        (vec![0, 1], values[1]),
        (vec![1, 0], values[2]),
        (vec![1, 1], values[3]),
    ]
}

/// 4 loci, K = 1, contributions in eighths.
pub fn stub_model(exponent: f64) -> NkModel {
    fixed_model(
        1,
        exponent,
        vec![vec![0, 2], vec![1, 3], vec![1, 2], vec![2, 3]],
        vec![
            pairs([1.0 / 8.0, 3.0 / 8.0, 5.0 / 8.0, 7.0 / 8.0]),
            pairs([4.0 / 8.0, 4.0 / 8.0, 5.0 / 8.0, 3.0 / 8.0]),
            pairs([3.0 / 8.0, 6.0 / 8.0, 1.0 / 8.0, 6.0 / 8.0]),
            pairs([2.0 / 8.0, 3.0 / 8.0, 8.0 / 8.0, 3.0 / 8.0]),
        ],
    )
}

pub const STUB_STATE: [u8; 4] = [1, 0, 1, 1];
pub const STUB_VALUE: f64 = (7.0 / 8.0 + 4.0 / 8.0 + 6.0 / 8.0 + 3.0 / 8.0) / 4.0;
pub const STUB_MAX_STATE: [u8; 4] = [1, 1, 1, 0];
pub const STUB_MAX_VALUE: f64 = (7.0 / 8.0 + 5.0 / 8.0 + 6.0 / 8.0 + 8.0 / 8.0) / 4.0;

/// Fitness of every stub genotype, in 32nds, binary counting order.
pub const STUB_ALL_STATES_32NDS: [f64; 16] = [
    10.0, 11.0, 21.0, 16.0, 9.0, 8.0, 22.0, 15.0, 14.0, 15.0, 25.0, 20.0, 13.0, 12.0, 26.0, 19.0,
];

/// 2 fully coupled loci with peaks at 00 (12/8) and 11 (`peak_11` + 5/8).
pub fn two_peak_model(peak_11: f64) -> NkModel {
    fixed_model(
        1,
        1.0,
        vec![vec![0, 1], vec![0, 1]],
        vec![
            pairs([6.0 / 8.0, 1.0 / 8.0, 2.0 / 8.0, 5.0 / 8.0]),
            pairs([6.0 / 8.0, 2.0 / 8.0, 1.0 / 8.0, peak_11]),
        ],
    )
}

pub fn all_genotypes(n: usize) -> Vec<Vec<u8>> {
    (0..1u64 << n)
        .map(|i| (0..n).map(|l| ((i >> (n - 1 - l)) & 1) as u8).collect())
        .collect()
}

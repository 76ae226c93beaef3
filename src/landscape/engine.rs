use super::NkModel;
use crate::core_types::{Genotype, GenotypeIndex};
use crate::error::NkResult;
use crate::genotype::{self, local_config, local_config_from_index};
use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

pub fn evaluate(model: &NkModel, genotype: &[u8]) -> NkResult<f64> {
    genotype::validate(genotype, model.n)?;
    Ok(model.normalize(raw_sum(model, genotype)))
}

pub fn evaluate_batch<Id>(
    model: &NkModel,
    genotypes: &HashMap<Id, Genotype>,
) -> NkResult<HashMap<Id, f64>>
where
    Id: Eq + Hash + Clone + Send + Sync,
{
    for g in genotypes.values() {
        genotype::validate(g, model.n)?;
    }
    Ok(genotypes
        .par_iter()
        .map(|(id, g)| (id.clone(), model.normalize(raw_sum(model, g))))
        .collect())
}

pub fn contributions(model: &NkModel, genotype: &[u8]) -> NkResult<Vec<f64>> {
    genotype::validate(genotype, model.n)?;
    Ok(contribution_vector(model, genotype))
}

/// Unnormalized sum of contributions, accumulated in locus order.
/// Every evaluation path sums in this order so results compare exactly.
#[inline]
pub(crate) fn raw_sum(model: &NkModel, genotype: &[u8]) -> f64 {
    (0..model.n)
        .map(|locus| {
            model
                .table
                .contribution(locus, local_config(genotype, model.deps.of(locus)))
        })
        .sum::<f64>()
}

#[inline]
pub(crate) fn raw_sum_index(model: &NkModel, index: GenotypeIndex) -> f64 {
    let n = model.n;
    (0..n)
        .map(|locus| {
            model
                .table
                .contribution(locus, local_config_from_index(index, n, model.deps.of(locus)))
        })
        .sum::<f64>()
}

pub(crate) fn contribution_vector(model: &NkModel, genotype: &[u8]) -> Vec<f64> {
    (0..model.n)
        .map(|locus| {
            model
                .table
                .contribution(locus, local_config(genotype, model.deps.of(locus)))
        })
        .collect()
}

use super::engine::contribution_vector;
use super::NkModel;
use crate::core_types::{Genotype, NeighborMaps};
use crate::error::{NkError, NkResult};
use crate::genotype::{self, local_config};
use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

impl NkModel {
    /// Fitness of every single-flip neighbor, for each genotype.
    ///
    /// `loci` selects which loci to flip per id; `None` flips all of them.
    /// Only loci whose dependency set contains the flipped locus are
    /// recomputed, and the result matches a full evaluation exactly.
    pub fn neighbor_values<Id>(
        &self,
        genotypes: &HashMap<Id, Genotype>,
        loci: Option<&HashMap<Id, Vec<usize>>>,
    ) -> NkResult<NeighborMaps<Id>>
    where
        Id: Eq + Hash + Clone + Send + Sync,
    {
        if let Some(subsets) = loci {
            if subsets.len() != genotypes.len() {
                return Err(NkError::Validation(format!(
                    "Got {} genotypes but {} locus subsets",
                    genotypes.len(),
                    subsets.len()
                )));
            }
        }

        let all_loci: Vec<usize> = (0..self.n).collect();
        let mut jobs = Vec::with_capacity(genotypes.len());
        for (id, g) in genotypes {
            genotype::validate(g, self.n)?;
            let flips = match loci {
                Some(subsets) => subsets.get(id).ok_or_else(|| {
                    NkError::Validation("Locus subsets do not cover every genotype id".into())
                })?,
                None => &all_loci,
            };
            self.check_loci(flips)?;
            jobs.push((id, g, flips));
        }

        let results: Vec<(Id, Vec<Genotype>, Vec<f64>)> = jobs
            .into_par_iter()
            .map(|(id, g, flips)| {
                let (states, values): (Vec<Genotype>, Vec<f64>) =
                    self.flip_all(g, flips).into_iter().unzip();
                (id.clone(), states, values)
            })
            .collect();

        let mut states = HashMap::with_capacity(results.len());
        let mut values = HashMap::with_capacity(results.len());
        for (id, s, v) in results {
            states.insert(id.clone(), s);
            values.insert(id, v);
        }
        Ok((states, values))
    }

    /// Single-genotype form of [`NkModel::neighbor_values`].
    pub fn neighbors(&self, genotype: &[u8], loci: &[usize]) -> NkResult<Vec<(Genotype, f64)>> {
        genotype::validate(genotype, self.n)?;
        self.check_loci(loci)?;
        Ok(self.flip_all(genotype, loci))
    }

    fn check_loci(&self, loci: &[usize]) -> NkResult<()> {
        match loci.iter().find(|&&l| l >= self.n) {
            Some(l) => Err(NkError::Validation(format!(
                "Locus {} is outside 0..{}",
                l, self.n
            ))),
            None => Ok(()),
        }
    }

    fn flip_all(&self, genotype: &[u8], loci: &[usize]) -> Vec<(Genotype, f64)> {
        let base = contribution_vector(self, genotype);
        loci.iter()
            .map(|&l| {
                let neighbor = genotype::flipped(genotype, l);
                let sum = self.flipped_sum(&base, &neighbor, l);
                (neighbor, self.normalize(sum))
            })
            .collect()
    }

    /// Raw sum of `neighbor` (= base genotype with `locus` flipped),
    /// reusing `base` for every locus the flip cannot reach.
    #[inline]
    pub(crate) fn flipped_sum(&self, base: &[f64], neighbor: &[u8], locus: usize) -> f64 {
        let mut values = base.to_vec();
        for &affected in self.deps.affected_by(locus) {
            values[affected] = self
                .table
                .contribution(affected, local_config(neighbor, self.deps.of(affected)));
        }
        values.iter().copied().sum::<f64>()
    }
}

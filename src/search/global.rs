use super::search_space;
use crate::consts::MAX_EXHAUSTIVE_LOCI;
use crate::core_types::{Genotype, GenotypeIndex, GlobalMaximum};
use crate::error::{NkError, NkResult};
use crate::genotype::from_index;
use crate::landscape::engine::raw_sum_index;
use crate::landscape::NkModel;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Best raw sum seen so far and every index attaining it.
struct MaxAccumulator {
    sum: f64,
    indices: Vec<GenotypeIndex>,
}

impl Default for MaxAccumulator {
    fn default() -> Self {
        Self {
            sum: f64::NEG_INFINITY,
            indices: Vec::new(),
        }
    }
}

impl MaxAccumulator {
    fn push(mut self, sum: f64, index: GenotypeIndex) -> Self {
        if sum > self.sum {
            self.sum = sum;
            self.indices.clear();
            self.indices.push(index);
        } else if sum == self.sum {
            self.indices.push(index);
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        if other.sum > self.sum {
            other
        } else {
            if other.sum == self.sum {
                self.indices.extend(other.indices);
            }
            self
        }
    }
}

impl NkModel {
    /// Exhaustive search for the fittest genotype.
    ///
    /// Genotypes are compared on raw contribution sums; only the reported
    /// value is normalized. If several genotypes share the maximal sum the
    /// search returns [`NkError::TiedMaximum`] listing all of them in binary
    /// counting order, instead of picking one.
    pub fn global_maximum(&self) -> NkResult<GlobalMaximum> {
        let space = search_space(self.n, MAX_EXHAUSTIVE_LOCI)?;
        info!("Global search over {} genotypes (n={}, k={})", space, self.n, self.k);

        let best = (0..space)
            .into_par_iter()
            .map(|index| (raw_sum_index(self, index), index))
            .fold(MaxAccumulator::default, |acc, (sum, index)| acc.push(sum, index))
            .reduce(MaxAccumulator::default, MaxAccumulator::merge);

        let value = self.normalize(best.sum);
        let mut indices = best.indices;
        indices.sort_unstable();

        if indices.len() > 1 {
            warn!("{} genotypes tie for the global maximum {}", indices.len(), value);
            return Err(NkError::TiedMaximum {
                value,
                genotypes: indices.iter().map(|&i| from_index(i, self.n)).collect(),
            });
        }

        let genotype = from_index(indices[0], self.n);
        info!("Global maximum {:?} = {:.6}", genotype, value);
        Ok(GlobalMaximum { genotype, value })
    }

    /// Fitness of every genotype. Realizes the whole fitness table.
    pub fn all_state_values(&self) -> NkResult<BTreeMap<Genotype, f64>> {
        let space = search_space(self.n, MAX_EXHAUSTIVE_LOCI)?;
        info!("Enumerating {} genotypes (n={}, k={})", space, self.n, self.k);

        Ok((0..space)
            .into_par_iter()
            .map(|index| (from_index(index, self.n), self.normalize(raw_sum_index(self, index))))
            .collect())
    }
}

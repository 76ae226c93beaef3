use super::search_space;
use crate::consts::{MAX_MEMOIZED_LOCI, UNRESOLVED};
use crate::core_types::{AdaptiveWalk, Genotype, GenotypeIndex};
use crate::error::NkResult;
use crate::genotype::{self, flip_index, flipped, from_index};
use crate::landscape::engine::{contribution_vector, raw_sum_index};
use crate::landscape::NkModel;
use fnv::{FnvHashMap, FnvHashSet};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Steepest strictly-improving neighbor of `index`, ties to the lowest locus.
#[inline]
fn steepest_step(sums: &[f64], n: usize, index: GenotypeIndex) -> Option<GenotypeIndex> {
    let mut best = sums[index as usize];
    let mut next = None;
    for locus in 0..n {
        let candidate = flip_index(index, n, locus);
        let sum = sums[candidate as usize];
        if sum > best {
            best = sum;
            next = Some(candidate);
        }
    }
    next
}

impl NkModel {
    /// Every genotype that has no strictly fitter single-flip neighbor.
    ///
    /// Keeps two 2^N tables in memory, so N is limited to
    /// [`MAX_MEMOIZED_LOCI`]; larger models return [`NkError::SearchSpace`].
    ///
    /// [`NkError::SearchSpace`]: crate::NkError::SearchSpace
    pub fn local_maxima(&self) -> NkResult<BTreeSet<Genotype>> {
        let memo = self.resolve_climbs()?;
        let peaks: FnvHashSet<GenotypeIndex> = memo.iter().copied().collect();
        info!("Found {} local maxima (n={}, k={})", peaks.len(), self.n, self.k);
        Ok(peaks.into_iter().map(|i| from_index(i, self.n)).collect())
    }

    /// Basin size of each local maximum: how many starting genotypes
    /// climb to it under steepest ascent. Same memory bound as
    /// [`NkModel::local_maxima`].
    pub fn basins(&self) -> NkResult<BTreeMap<Genotype, usize>> {
        let memo = self.resolve_climbs()?;
        let mut sizes: FnvHashMap<GenotypeIndex, usize> = FnvHashMap::default();
        for &peak in &memo {
            *sizes.entry(peak).or_insert(0) += 1;
        }
        Ok(sizes
            .into_iter()
            .map(|(i, size)| (from_index(i, self.n), size))
            .collect())
    }

    /// Climbs from every genotype; `memo[g]` is the local maximum `g` reaches.
    ///
    /// Steepest ascent gives each genotype a single successor, so a climb
    /// that lands on an already resolved genotype inherits its answer and
    /// the whole path is compressed onto it.
    fn resolve_climbs(&self) -> NkResult<Vec<GenotypeIndex>> {
        let space = search_space(self.n, MAX_MEMOIZED_LOCI)? as usize;
        let n = self.n;

        let sums: Vec<f64> = (0..space)
            .into_par_iter()
            .map(|index| raw_sum_index(self, index as GenotypeIndex))
            .collect();

        let mut memo = vec![UNRESOLVED; space];
        let mut path: Vec<GenotypeIndex> = Vec::new();
        let mut climbs = 0usize;

        for start in 0..space as GenotypeIndex {
            if memo[start as usize] != UNRESOLVED {
                continue;
            }
            climbs += 1;
            path.clear();

            let mut current = start;
            let peak = loop {
                let known = memo[current as usize];
                if known != UNRESOLVED {
                    break known;
                }
                path.push(current);
                match steepest_step(&sums, n, current) {
                    Some(next) => current = next,
                    None => break current,
                }
            };

            for &g in &path {
                memo[g as usize] = peak;
            }
        }

        debug!("Resolved {} genotypes with {} climbs", space, climbs);
        Ok(memo)
    }

    /// One steepest-ascent adaptive walk from `genotype`.
    ///
    /// Neighbor sums are computed incrementally, so this works for any N.
    pub fn climb(&self, genotype: &[u8]) -> NkResult<AdaptiveWalk> {
        genotype::validate(genotype, self.n)?;

        let mut current = genotype.to_vec();
        let mut base = contribution_vector(self, &current);
        let mut current_sum = base.iter().copied().sum::<f64>();
        let mut path = vec![current.clone()];

        loop {
            let mut best: Option<(Genotype, f64)> = None;
            for locus in 0..self.n {
                let neighbor = flipped(&current, locus);
                let sum = self.flipped_sum(&base, &neighbor, locus);
                let threshold = best.as_ref().map_or(current_sum, |(_, s)| *s);
                if sum > threshold {
                    best = Some((neighbor, sum));
                }
            }

            match best {
                Some((next, sum)) => {
                    base = contribution_vector(self, &next);
                    current_sum = sum;
                    path.push(next.clone());
                    current = next;
                }
                None => break,
            }
        }

        debug!("Adaptive walk reached a local maximum in {} steps", path.len() - 1);
        Ok(AdaptiveWalk {
            path,
            value: self.normalize(current_sum),
        })
    }
}

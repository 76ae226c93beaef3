use crate::error::{NkError, NkResult};
use fastrand::Rng;
use itertools::Itertools;

/// Which loci feed each locus's contribution, and the reverse mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyStructure {
    /// `dependence[i]`: K + 1 loci including `i`, ascending.
    dependence: Vec<Vec<usize>>,
    /// `depends_on[i]`: loci whose dependency set contains `i`, ascending.
    depends_on: Vec<Vec<usize>>,
}

impl DependencyStructure {
    /// Samples K partners per locus uniformly without replacement.
    pub fn random(n: usize, k: usize, rng: &mut Rng) -> NkResult<Self> {
        if n == 0 || k > n - 1 {
            return Err(NkError::Config(format!(
                "Cannot sample {} partners per locus from {} loci",
                k, n
            )));
        }

        let dependence = (0..n)
            .map(|locus| {
                let mut others: Vec<usize> = (0..n).filter(|&o| o != locus).collect();
                // Partial Fisher-Yates: the first k slots become the sample.
                for slot in 0..k {
                    let pick = rng.usize(slot..others.len());
                    others.swap(slot, pick);
                }
                others.truncate(k);
                others.push(locus);
                others.sort_unstable();
                others
            })
            .collect();

        Ok(Self::from_sets_unchecked(n, dependence))
    }

    /// Accepts caller-supplied dependency sets after checking their shape.
    pub fn from_sets(n: usize, k: usize, dependence: Vec<Vec<usize>>) -> NkResult<Self> {
        if dependence.len() != n {
            return Err(NkError::Config(format!(
                "Expected {} dependency sets, got {}",
                n,
                dependence.len()
            )));
        }
        for (locus, deps) in dependence.iter().enumerate() {
            if deps.len() != k + 1 {
                return Err(NkError::Config(format!(
                    "Locus {} has {} dependencies, expected {}",
                    locus,
                    deps.len(),
                    k + 1
                )));
            }
            if !deps.iter().tuple_windows().all(|(a, b)| a < b) {
                return Err(NkError::Config(format!(
                    "Dependencies of locus {} must be strictly ascending: [{}]",
                    locus,
                    deps.iter().join(", ")
                )));
            }
            if deps.iter().any(|&d| d >= n) {
                return Err(NkError::Config(format!(
                    "Locus {} depends on a locus outside 0..{}",
                    locus, n
                )));
            }
            if deps.binary_search(&locus).is_err() {
                return Err(NkError::Config(format!(
                    "Locus {} must depend on itself",
                    locus
                )));
            }
        }
        Ok(Self::from_sets_unchecked(n, dependence))
    }

    fn from_sets_unchecked(n: usize, dependence: Vec<Vec<usize>>) -> Self {
        let mut depends_on = vec![Vec::new(); n];
        for (locus, deps) in dependence.iter().enumerate() {
            for &d in deps {
                depends_on[d].push(locus);
            }
        }
        // Loci are visited in order, so every list is already ascending.
        Self {
            dependence,
            depends_on,
        }
    }

    pub fn n(&self) -> usize {
        self.dependence.len()
    }

    #[inline(always)]
    pub fn of(&self, locus: usize) -> &[usize] {
        &self.dependence[locus]
    }

    #[inline(always)]
    pub fn affected_by(&self, locus: usize) -> &[usize] {
        &self.depends_on[locus]
    }

    pub fn dependence(&self) -> &[Vec<usize>] {
        &self.dependence
    }

    pub fn depends_on(&self) -> &[Vec<usize>] {
        &self.depends_on
    }
}

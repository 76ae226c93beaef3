use crate::core_types::LocalConfig;
use crate::error::{NkError, NkResult};
use crate::genotype::pack_config;
use dashmap::DashMap;
use fastrand::Rng;
use fnv::FnvBuildHasher;

type LocusMap = DashMap<LocalConfig, f64, FnvBuildHasher>;

/// Lazily realized per-locus contribution tables.
///
/// Append-only: once a (locus, configuration) pair has a value it is never
/// replaced. The value of an unseen pair is a pure function of the landscape
/// seed and the pair, so concurrent first observations agree and evaluation
/// order never changes the landscape.
pub struct FitnessTable {
    loci: Vec<LocusMap>,
    seed: u64,
}

impl FitnessTable {
    pub fn new(n: usize, seed: u64) -> Self {
        Self {
            loci: (0..n)
                .map(|_| DashMap::with_hasher(FnvBuildHasher::default()))
                .collect(),
            seed,
        }
    }

    /// Builds a table pre-populated with explicit allele tuples.
    /// Pairs left out are generated on demand like any other table.
    pub fn from_entries(
        width: usize,
        seed: u64,
        entries: Vec<Vec<(Vec<u8>, f64)>>,
    ) -> NkResult<Self> {
        let table = Self::new(entries.len(), seed);
        for (locus, locus_entries) in entries.into_iter().enumerate() {
            for (alleles, value) in locus_entries {
                if alleles.len() != width || alleles.iter().any(|&a| a > 1) {
                    return Err(NkError::Config(format!(
                        "Locus {} table key {:?} is not a {}-allele binary tuple",
                        locus, alleles, width
                    )));
                }
                if !(0.0..=1.0).contains(&value) {
                    return Err(NkError::Config(format!(
                        "Locus {} table value {} is outside [0, 1]",
                        locus, value
                    )));
                }
                table.loci[locus].insert(pack_config(&alleles), value);
            }
        }
        Ok(table)
    }

    /// Returns the contribution, drawing and storing it on first sight.
    #[inline]
    pub fn contribution(&self, locus: usize, config: LocalConfig) -> f64 {
        let map = &self.loci[locus];
        if let Some(v) = map.get(&config) {
            return *v;
        }
        *map.entry(config)
            .or_insert_with(|| draw(self.seed, locus, config))
    }

    /// Lookup without generation.
    pub fn get(&self, locus: usize, config: LocalConfig) -> Option<f64> {
        self.loci.get(locus)?.get(&config).map(|v| *v)
    }

    pub fn len(&self) -> usize {
        self.loci.iter().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.loci.iter().all(|m| m.is_empty())
    }

    pub fn locus_len(&self, locus: usize) -> usize {
        self.loci[locus].len()
    }

    /// Stored pairs of one locus, ordered by configuration.
    pub fn entries(&self, locus: usize) -> Vec<(LocalConfig, f64)> {
        let mut out: Vec<(LocalConfig, f64)> = self.loci[locus]
            .iter()
            .map(|r| (*r.key(), *r.value()))
            .collect();
        out.sort_unstable_by_key(|&(k, _)| k);
        out
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[inline(always)]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform draw in [0, 1) keyed by (seed, locus, config).
fn draw(seed: u64, locus: usize, config: LocalConfig) -> f64 {
    let stream = splitmix64(splitmix64(seed ^ locus as u64) ^ config);
    Rng::with_seed(stream).f64()
}

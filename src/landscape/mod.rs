pub mod builder;
pub mod dependence;
pub mod engine;
pub mod neighbors;
pub mod table;

pub use self::builder::ModelBuildParams;
pub use self::dependence::DependencyStructure;
pub use self::table::FitnessTable;

use crate::config::ModelConfig;
use crate::core_types::Genotype;
use crate::error::NkResult;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// One NK landscape: fixed dependency structure plus a lazily realized
/// fitness table shared by every evaluation path.
pub struct NkModel {
    pub(crate) n: usize,
    pub(crate) k: usize,
    pub(crate) exponent: f64,
    pub(crate) seed: u64,
    pub(crate) deps: DependencyStructure,
    pub(crate) table: FitnessTable,
}

impl fmt::Debug for NkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NkModel")
            .field("n", &self.n)
            .field("k", &self.k)
            .field("exponent", &self.exponent)
            .field("seed", &self.seed)
            .field("table_entries", &self.table.len())
            .finish()
    }
}

impl NkModel {
    /// Unseeded model: a fresh landscape on every construction.
    pub fn new(n: usize, k: usize, exponent: f64) -> NkResult<Self> {
        ModelBuildParams::builder()
            .n(n)
            .k(k)
            .exponent(exponent)
            .build()
            .build_model()
    }

    pub fn with_seed(n: usize, k: usize, exponent: f64, seed: u64) -> NkResult<Self> {
        ModelBuildParams::builder()
            .n(n)
            .k(k)
            .exponent(exponent)
            .seed(seed)
            .build()
            .build_model()
    }

    pub fn from_config(config: &ModelConfig) -> NkResult<Self> {
        ModelBuildParams::from(config).build_model()
    }

    /// Total fitness of one genotype.
    pub fn evaluate(&self, genotype: &[u8]) -> NkResult<f64> {
        engine::evaluate(self, genotype)
    }

    /// Total fitness per id. Each entry equals [`NkModel::evaluate`].
    pub fn evaluate_batch<Id>(&self, genotypes: &HashMap<Id, Genotype>) -> NkResult<HashMap<Id, f64>>
    where
        Id: Eq + Hash + Clone + Send + Sync,
    {
        engine::evaluate_batch(self, genotypes)
    }

    /// Per-locus contributions, in locus order.
    pub fn contributions(&self, genotype: &[u8]) -> NkResult<Vec<f64>> {
        engine::contributions(self, genotype)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Seed that reproduces this landscape via [`NkModel::with_seed`].
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn dependence(&self) -> &[Vec<usize>] {
        self.deps.dependence()
    }

    pub fn depends_on(&self) -> &[Vec<usize>] {
        self.deps.depends_on()
    }

    pub fn dependency_structure(&self) -> &DependencyStructure {
        &self.deps
    }

    pub fn table(&self) -> &FitnessTable {
        &self.table
    }

    /// Turns a raw contribution sum into reported fitness.
    #[inline(always)]
    pub(crate) fn normalize(&self, raw_sum: f64) -> f64 {
        let mean = raw_sum / self.n as f64;
        if self.exponent != 1.0 {
            mean.powf(self.exponent)
        } else {
            mean
        }
    }
}

use crate::config::ModelConfig;
use crate::error::{NkError, NkResult};
use crate::landscape::{DependencyStructure, FitnessTable, NkModel};
use fastrand::Rng;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Everything needed to construct an [`NkModel`].
///
/// `dependence` and `table` pin a model down exactly; both are optional and
/// otherwise generated from `seed`.
#[derive(TypedBuilder)]
pub struct ModelBuildParams {
    pub n: usize,
    pub k: usize,
    #[builder(default = 1.0)]
    pub exponent: f64,
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub dependence: Option<Vec<Vec<usize>>>,
    /// Per locus: (allele tuple in dependency order, contribution).
    #[builder(default, setter(strip_option))]
    pub table: Option<Vec<Vec<(Vec<u8>, f64)>>>,
}

impl From<&ModelConfig> for ModelBuildParams {
    fn from(cfg: &ModelConfig) -> Self {
        Self {
            n: cfg.n,
            k: cfg.k,
            exponent: cfg.exponent,
            seed: cfg.seed,
            dependence: None,
            table: None,
        }
    }
}

impl ModelBuildParams {
    pub fn build_model(self) -> NkResult<NkModel> {
        let config = ModelConfig {
            n: self.n,
            k: self.k,
            exponent: self.exponent,
            seed: self.seed,
        };
        config.validate()?;

        let seed = self.seed.unwrap_or_else(|| fastrand::u64(..));
        let mut rng = Rng::with_seed(seed);

        let deps = match self.dependence {
            Some(sets) => DependencyStructure::from_sets(self.n, self.k, sets)?,
            None => DependencyStructure::random(self.n, self.k, &mut rng)?,
        };

        // Drawn after sampling so one seed reproduces both.
        let landscape_seed = rng.u64(..);
        let table = match self.table {
            Some(entries) => {
                if entries.len() != self.n {
                    return Err(NkError::Config(format!(
                        "Expected {} locus tables, got {}",
                        self.n,
                        entries.len()
                    )));
                }
                FitnessTable::from_entries(self.k + 1, landscape_seed, entries)?
            }
            None => FitnessTable::new(self.n, landscape_seed),
        };

        debug!(
            "Built NK model: n={} k={} exponent={} seed={} preloaded={}",
            self.n,
            self.k,
            self.exponent,
            seed,
            table.len()
        );

        Ok(NkModel {
            n: self.n,
            k: self.k,
            exponent: self.exponent,
            seed,
            deps,
            table,
        })
    }
}

use crate::consts::MAX_DEPENDENCY_WIDTH;
use crate::error::{NkError, NkResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a single NK model.
///
/// Drivers can `#[command(flatten)]` this into their own CLI, or load it
/// from a JSON file. Missing JSON fields fall back to [`Default`].
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Genotype length (number of loci).
    #[arg(short = 'n', long = "loci", default_value_t = 10)]
    pub n: usize,

    /// Extra loci each locus depends on.
    #[arg(short = 'k', long = "epistasis", default_value_t = 2)]
    pub k: usize,

    /// Applied to the normalized fitness.
    #[arg(long, default_value_t = 1.0)]
    pub exponent: f64,

    /// Fixes the landscape. Unseeded models draw a fresh seed.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n: 10,
            k: 2,
            exponent: 1.0,
            seed: None,
        }
    }
}

impl ModelConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NkResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NkResult<()> {
        if self.n == 0 {
            return Err(NkError::Config("N must be positive".into()));
        }
        if self.k > self.n - 1 {
            return Err(NkError::Config(format!(
                "K = {} needs {} other loci, but N = {} only has {}",
                self.k,
                self.k,
                self.n,
                self.n - 1
            )));
        }
        if self.k + 1 > MAX_DEPENDENCY_WIDTH {
            return Err(NkError::Config(format!(
                "K + 1 = {} exceeds the {}-bit configuration key",
                self.k + 1,
                MAX_DEPENDENCY_WIDTH
            )));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(NkError::Config(format!(
                "Exponent must be finite and positive, got {}",
                self.exponent
            )));
        }
        Ok(())
    }
}

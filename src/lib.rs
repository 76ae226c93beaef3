//! NK fitness landscapes over binary genotypes.
//!
//! Each of the N loci contributes a value that depends on its own allele and
//! on K other loci. Contributions are drawn lazily on first observation and
//! cached for the lifetime of the model, so every evaluation path sees the
//! same landscape.
//!
//! ```rust
//! use nk_landscape::NkModel;
//!
//! let model = NkModel::with_seed(8, 2, 1.0, 42).unwrap();
//! let fitness = model.evaluate(&[0, 1, 1, 0, 1, 0, 0, 1]).unwrap();
//! assert!((0.0..1.0).contains(&fitness));
//!
//! let peak = model.global_maximum().unwrap();
//! assert!(model.local_maxima().unwrap().contains(&peak.genotype));
//! ```

pub mod config;
pub mod consts;
pub mod core_types;
pub mod error;
pub mod genotype;
pub mod landscape;
pub mod search;

pub use config::ModelConfig;
pub use core_types::{AdaptiveWalk, Genotype, GlobalMaximum, LocalConfig};
pub use error::{NkError, NkResult};
pub use landscape::{ModelBuildParams, NkModel};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A full assignment of alleles, one `0` or `1` per locus.
pub type Genotype = Vec<u8>;

/// Packed genotype used by the exhaustive searches.
/// Locus 0 is the most significant of the low `n` bits.
pub type GenotypeIndex = u64;

/// States of a locus's dependency set, packed with the lowest
/// dependency index as the most significant bit.
pub type LocalConfig = u64;

/// Flipped genotypes and their fitness values, keyed by caller id.
pub type NeighborMaps<Id> = (HashMap<Id, Vec<Genotype>>, HashMap<Id, Vec<f64>>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMaximum {
    pub genotype: Genotype,
    pub value: f64,
}

/// Result of a single steepest-ascent walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveWalk {
    /// Every genotype visited, starting genotype first, local maximum last.
    pub path: Vec<Genotype>,
    pub value: f64,
}

impl AdaptiveWalk {
    /// Last genotype of the path; `None` only for an empty path.
    pub fn local_maximum(&self) -> Option<&Genotype> {
        self.path.last()
    }

    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

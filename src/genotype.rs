use crate::core_types::{Genotype, GenotypeIndex, LocalConfig};
use crate::error::{NkError, NkResult};

/// Rejects genotypes of the wrong length or with non-binary alleles.
pub fn validate(genotype: &[u8], n: usize) -> NkResult<()> {
    if genotype.len() != n {
        return Err(NkError::Validation(format!(
            "Genotype has {} loci, model expects {}",
            genotype.len(),
            n
        )));
    }
    if let Some(pos) = genotype.iter().position(|&a| a > 1) {
        return Err(NkError::Validation(format!(
            "Allele {} at locus {} is not binary",
            genotype[pos], pos
        )));
    }
    Ok(())
}

/// Packs the alleles at `deps` (ascending) into a configuration key.
#[inline(always)]
pub fn local_config(genotype: &[u8], deps: &[usize]) -> LocalConfig {
    deps.iter()
        .fold(0, |key, &d| (key << 1) | genotype[d] as LocalConfig)
}

/// Same as [`local_config`] but reads alleles from a packed index.
#[inline(always)]
pub fn local_config_from_index(index: GenotypeIndex, n: usize, deps: &[usize]) -> LocalConfig {
    deps.iter()
        .fold(0, |key, &d| (key << 1) | ((index >> (n - 1 - d)) & 1))
}

/// Packs an explicit allele tuple, e.g. `[1, 0]` -> `0b10`.
pub fn pack_config(alleles: &[u8]) -> LocalConfig {
    alleles
        .iter()
        .fold(0, |key, &a| (key << 1) | (a & 1) as LocalConfig)
}

#[cfg(test)]
fn to_index(genotype: &[u8]) -> GenotypeIndex {
    pack_config(genotype)
}

pub fn from_index(index: GenotypeIndex, n: usize) -> Genotype {
    (0..n).map(|i| ((index >> (n - 1 - i)) & 1) as u8).collect()
}

/// Index of the neighbor with `locus` flipped.
#[inline(always)]
pub fn flip_index(index: GenotypeIndex, n: usize, locus: usize) -> GenotypeIndex {
    index ^ (1u64 << (n - 1 - locus))
}

/// Fresh copy of `genotype` with `locus` flipped.
pub fn flipped(genotype: &[u8], locus: usize) -> Genotype {
    let mut g = genotype.to_vec();
    g[locus] ^= 1;
    g
}

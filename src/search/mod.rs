pub mod global;
pub mod local;

use crate::error::{NkError, NkResult};

/// Size of the genotype space, if `n` is within `max` loci.
pub(crate) fn search_space(n: usize, max: usize) -> NkResult<u64> {
    if n > max {
        return Err(NkError::SearchSpace { n, max });
    }
    Ok(1u64 << n)
}

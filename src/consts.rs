/// Width of a packed local configuration key. Bounds K + 1.
pub const MAX_DEPENDENCY_WIDTH: usize = 64;

/// Largest N accepted by the exhaustive searches (2^N genotypes).
pub const MAX_EXHAUSTIVE_LOCI: usize = 32;

/// Largest N accepted by the memoized local-maxima finder. It holds a raw
/// sum and a memo slot per genotype (16 bytes each, 4 GiB at this bound).
pub const MAX_MEMOIZED_LOCI: usize = 28;

/// Marks a genotype index whose climb has not been resolved yet.
pub const UNRESOLVED: u64 = u64::MAX;

use crate::core_types::Genotype;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NkError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Search Space Error: {n} loci exceeds the exhaustive limit of {max}")]
    SearchSpace { n: usize, max: usize },

    /// More than one genotype attains the maximal raw fitness sum.
    /// `genotypes` lists every co-maximal genotype in enumeration order.
    #[error("Tied Global Maximum: {} genotypes share value {value}", .genotypes.len())]
    TiedMaximum { value: f64, genotypes: Vec<Genotype> },
}

pub type NkResult<T> = Result<T, NkError>;

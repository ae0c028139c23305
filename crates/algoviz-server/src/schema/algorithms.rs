//! Algorithm catalog response types.

use serde::Serialize;

use algoviz_core::{Algorithm, Family};

/// One catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    pub name: Algorithm,
    pub family: Family,
    /// Parameters beyond the array that the algorithm requires.
    pub requires: Vec<&'static str>,
}

impl From<Algorithm> for AlgorithmInfo {
    fn from(algorithm: Algorithm) -> Self {
        let requires = match algorithm.family() {
            Family::Sort => vec![],
            Family::Search => vec!["target"],
            Family::Graph => vec!["graph", "start"],
        };
        AlgorithmInfo {
            name: algorithm,
            family: algorithm.family(),
            requires,
        }
    }
}

//! Core error types for algoviz-core.
//!
//! Generators themselves never fail: degenerate input yields a degenerate but
//! well-formed trace. These errors come from the input layer (parsing arrays,
//! building graphs, resolving algorithm names and parameters).

use thiserror::Error;

/// Errors produced while turning user input into generator arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A token in a comma-separated array could not be parsed as an integer.
    #[error("invalid number: '{token}'")]
    InvalidNumber { token: String },

    /// An edge weight was negative, NaN or infinite.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Graph JSON did not have the expected shape.
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// The algorithm name is not in the catalog.
    #[error("unknown algorithm: '{name}'")]
    UnknownAlgorithm { name: String },

    /// A parameter required by the chosen algorithm was not supplied.
    #[error("algorithm '{algorithm}' requires parameter '{parameter}'")]
    MissingParameter {
        algorithm: &'static str,
        parameter: &'static str,
    },

    /// Binary search was asked to run over input that is not ascending.
    #[error("binary search requires ascending input (out of order at index {index})")]
    UnsortedInput { index: usize },
}

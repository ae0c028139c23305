//! Trace generation request/response types.

use serde::{Deserialize, Serialize};

use algoviz_core::{Algorithm, Family, GeneratedTrace};

/// Request to generate a trace.
///
/// `graph` is kept as raw JSON so graph validation errors surface as API
/// errors rather than extractor rejections.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTraceRequest {
    /// Catalog name, e.g. "bubble-sort".
    pub algorithm: String,
    /// Array input for sorts and searches.
    #[serde(default)]
    pub array: Option<Vec<i64>>,
    /// Generate the array instead of supplying it.
    #[serde(default)]
    pub random: Option<RandomInput>,
    /// Search target.
    #[serde(default)]
    pub target: Option<i64>,
    /// Adjacency object, e.g. `{"A": ["B", {"to": "C", "weight": 2}]}`.
    #[serde(default)]
    pub graph: Option<serde_json::Value>,
    /// Start vertex for graph algorithms.
    #[serde(default)]
    pub start: Option<String>,
}

/// Seeded random array parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RandomInput {
    pub len: usize,
    #[serde(default)]
    pub seed: u64,
}

/// A generated (or recalled) trace.
#[derive(Debug, Clone, Serialize)]
pub struct TraceResponse {
    pub algorithm: Algorithm,
    pub family: Family,
    /// Replay id: `GET /traces/{fingerprint}`.
    pub fingerprint: String,
    pub len: usize,
    pub steps: GeneratedTrace,
}

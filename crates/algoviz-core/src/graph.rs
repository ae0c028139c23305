//! Graph input for the traversal generators.
//!
//! A [`Graph`] is an insertion-ordered adjacency map from [`VertexId`] to its
//! outgoing [`Edge`]s. Insertion order is significant: it fixes neighbor
//! exploration order for BFS/DFS and the tie-break scan order for Dijkstra.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Vertex identifier, e.g. `"A"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId(s.to_string())
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        VertexId(s)
    }
}

/// Weight used when a neighbor entry does not specify one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A directed, weighted edge to `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: VertexId,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// Tentative or final shortest-path distance.
///
/// Unreached vertices hold [`Distance::INFINITY`]. Serializes finite values as
/// JSON numbers and infinity as the string `"Infinity"`, since JSON has no
/// infinite number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "Infinity")
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str("Infinity")
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Distance(n)),
            Repr::Text(s) if s == "Infinity" => Ok(Distance::INFINITY),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"Infinity\", got \"{}\"",
                s
            ))),
        }
    }
}

/// One neighbor entry in graph JSON: either a bare id or `{to, weight}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum NeighborSpec {
    Id(String),
    Weighted {
        to: String,
        #[serde(default)]
        weight: Option<f64>,
    },
}

/// Insertion-ordered adjacency map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: IndexMap<VertexId, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Adds a vertex with no edges. Re-adding an existing vertex is a no-op
    /// and keeps its original position.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Adds a directed edge, creating either endpoint if missing.
    ///
    /// The source is created before the target, so a target first mentioned
    /// here lands after the source in vertex order.
    pub fn add_edge(
        &mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
        weight: f64,
    ) -> Result<(), CoreError> {
        let from = from.into();
        let to = to.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(CoreError::InvalidWeight {
                from: from.0,
                to: to.0,
                weight,
            });
        }
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to: to.clone(), weight });
        self.adjacency.entry(to).or_default();
        Ok(())
    }

    /// Builds an unweighted graph from `(vertex, neighbors)` pairs.
    ///
    /// Listed vertices come first in the given order; vertices mentioned only
    /// as neighbors follow in first-mention order.
    pub fn from_adjacency<'a, I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, N)>,
        N: IntoIterator<Item = &'a str>,
    {
        let entries: Vec<(&str, Vec<&str>)> = entries
            .into_iter()
            .map(|(v, ns)| (v, ns.into_iter().collect()))
            .collect();
        let mut graph = Graph::new();
        for (v, _) in &entries {
            graph.add_vertex(*v);
        }
        for (v, neighbors) in entries {
            for n in neighbors {
                // Unit weight is always valid.
                let _ = graph.add_edge(v, n, DEFAULT_WEIGHT);
            }
        }
        graph
    }

    /// Parses graph JSON of the form
    /// `{"A": ["B", {"to": "C", "weight": 4}], "B": []}`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        let object = value.as_object().ok_or_else(|| CoreError::InvalidGraph {
            reason: "expected an object mapping vertex ids to neighbor lists".into(),
        })?;

        let mut parsed = Vec::with_capacity(object.len());
        for (vertex, neighbors) in object {
            let specs: Vec<NeighborSpec> = serde_json::from_value(neighbors.clone())
                .map_err(|e| CoreError::InvalidGraph {
                    reason: format!("neighbors of '{}': {}", vertex, e),
                })?;
            parsed.push((vertex.clone(), specs));
        }

        let mut graph = Graph::new();
        for (vertex, _) in &parsed {
            graph.add_vertex(vertex.as_str());
        }
        for (vertex, specs) in parsed {
            for spec in specs {
                let (to, weight) = match spec {
                    NeighborSpec::Id(to) => (to, DEFAULT_WEIGHT),
                    NeighborSpec::Weighted { to, weight } => {
                        (to, weight.unwrap_or(DEFAULT_WEIGHT))
                    }
                };
                graph.add_edge(vertex.as_str(), to, weight)?;
            }
        }
        Ok(graph)
    }

    pub fn contains(&self, id: &VertexId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `id` in listed order (empty for unknown vertices).
    pub fn edges(&self, id: &VertexId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Graph::from_json(&value).map_err(serde::de::Error::custom)
    }
}

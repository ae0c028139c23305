//! Algorithm catalog and request dispatch.
//!
//! Callers that pick the algorithm at runtime (the CLI, the HTTP server) name
//! it with an [`Algorithm`], describe the input with a [`TraceRequest`], and
//! get back a [`GeneratedTrace`]. Parameter presence is checked here; the
//! generators themselves never fail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::graph::{Graph, VertexId};
use crate::searching::{binary_search, check_ascending, linear_search};
use crate::sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use crate::step::{GraphStep, SearchStep, SortStep};
use crate::trace::Trace;
use crate::traversal::{bfs, dfs, dijkstra};

/// The input shape an algorithm consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Sort,
    Search,
    Graph,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Sort => "sort",
            Family::Search => "search",
            Family::Graph => "graph",
        })
    }
}

/// Every algorithm with a trace generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::BubbleSort,
            Algorithm::InsertionSort,
            Algorithm::SelectionSort,
            Algorithm::MergeSort,
            Algorithm::QuickSort,
            Algorithm::HeapSort,
            Algorithm::LinearSearch,
            Algorithm::BinarySearch,
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Dijkstra,
        ]
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::SelectionSort => "selection-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::HeapSort => "heap-sort",
            Algorithm::LinearSearch => "linear-search",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Algorithm::LinearSearch | Algorithm::BinarySearch => Family::Search,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra => Family::Graph,
            _ => Family::Sort,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::all()
            .iter()
            .copied()
            .find(|a| a.name() == wanted || a.name().trim_end_matches("-sort") == wanted)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Everything any generator might need. Fields irrelevant to the chosen
/// algorithm are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraceRequest {
    #[serde(default)]
    pub array: Vec<i64>,
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub graph: Option<Graph>,
    #[serde(default)]
    pub start: Option<VertexId>,
}

impl TraceRequest {
    /// Upper bound on the snapshot cells (array slots, vertex ids and map
    /// entries, summed over every step) of the trace `algorithm` would produce.
    ///
    /// Each step carries a full copy of the visible state, so the trace is
    /// much larger than the input: sorts take at most `n^2 + 3n + 1` steps
    /// of `n` cells, searches `2n + 1` steps of `n` cells, and traversals at
    /// most `3V + 2E + 2` steps of at most `3V` cells.
    pub fn projected_cells(&self, algorithm: Algorithm) -> u64 {
        let n = self.array.len() as u64;
        match algorithm.family() {
            Family::Sort => n
                .saturating_mul(n)
                .saturating_add(n.saturating_mul(3))
                .saturating_add(1)
                .saturating_mul(n),
            Family::Search => n.saturating_mul(2).saturating_add(1).saturating_mul(n),
            Family::Graph => match &self.graph {
                Some(graph) => {
                    let v = graph.vertex_count() as u64;
                    let e = graph.edge_count() as u64;
                    v.saturating_mul(3)
                        .saturating_add(e.saturating_mul(2))
                        .saturating_add(2)
                        .saturating_mul(v.saturating_mul(3))
                }
                None => 0,
            },
        }
    }
}

/// A trace from any family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedTrace {
    Sort(Trace<SortStep>),
    Search(Trace<SearchStep>),
    Graph(Trace<GraphStep>),
}

impl GeneratedTrace {
    pub fn len(&self) -> usize {
        match self {
            GeneratedTrace::Sort(t) => t.len(),
            GeneratedTrace::Search(t) => t.len(),
            GeneratedTrace::Graph(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot cells actually held, counted the same way as
    /// [`TraceRequest::projected_cells`].
    pub fn snapshot_cells(&self) -> u64 {
        let cells: usize = match self {
            GeneratedTrace::Sort(t) => t.iter().map(|s| s.array.len()).sum(),
            GeneratedTrace::Search(t) => t.iter().map(|s| s.array.len()).sum(),
            GeneratedTrace::Graph(t) => t
                .iter()
                .map(|s| {
                    s.visited.len()
                        + s.frontier.len()
                        + s.distances.as_ref().map_or(0, |d| d.len())
                        + s.previous.as_ref().map_or(0, |p| p.len())
                })
                .sum(),
        };
        cells as u64
    }

    /// Replay id for this trace as produced by `algorithm`.
    ///
    /// Different algorithms can emit byte-identical steps (every sort of `[]`,
    /// bubble and insertion sort on sorted pairs), so the algorithm name is
    /// hashed together with the steps.
    pub fn fingerprint(&self, algorithm: Algorithm) -> String {
        let keyed = KeyedTrace {
            algorithm,
            steps: self,
        };
        // Plain data only, so encoding cannot fail.
        let bytes = serde_json::to_vec(&keyed).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }
}

#[derive(Serialize)]
struct KeyedTrace<'a> {
    algorithm: Algorithm,
    steps: &'a GeneratedTrace,
}

/// Runs `algorithm` on `request`.
///
/// Fails only when a required parameter is missing, or when binary search is
/// given unsorted input.
pub fn generate(algorithm: Algorithm, request: &TraceRequest) -> Result<GeneratedTrace, CoreError> {
    let missing = |parameter| CoreError::MissingParameter {
        algorithm: algorithm.name(),
        parameter,
    };

    let trace = match algorithm {
        Algorithm::BubbleSort => GeneratedTrace::Sort(bubble_sort(&request.array)),
        Algorithm::InsertionSort => GeneratedTrace::Sort(insertion_sort(&request.array)),
        Algorithm::SelectionSort => GeneratedTrace::Sort(selection_sort(&request.array)),
        Algorithm::MergeSort => GeneratedTrace::Sort(merge_sort(&request.array)),
        Algorithm::QuickSort => GeneratedTrace::Sort(quick_sort(&request.array)),
        Algorithm::HeapSort => GeneratedTrace::Sort(heap_sort(&request.array)),
        Algorithm::LinearSearch => {
            let target = request.target.ok_or_else(|| missing("target"))?;
            GeneratedTrace::Search(linear_search(&request.array, target))
        }
        Algorithm::BinarySearch => {
            let target = request.target.ok_or_else(|| missing("target"))?;
            check_ascending(&request.array)?;
            GeneratedTrace::Search(binary_search(&request.array, target))
        }
        Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra => {
            let graph = request.graph.as_ref().ok_or_else(|| missing("graph"))?;
            let start = request.start.as_ref().ok_or_else(|| missing("start"))?;
            let trace = match algorithm {
                Algorithm::Bfs => bfs(graph, start),
                Algorithm::Dfs => dfs(graph, start),
                _ => dijkstra(graph, start),
            };
            GeneratedTrace::Graph(trace)
        }
    };

    tracing::debug!(
        algorithm = algorithm.name(),
        steps = trace.len(),
        "generated trace"
    );
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for &a in Algorithm::all() {
            assert_eq!(a.name().parse::<Algorithm>().unwrap(), a);
        }
        assert_eq!("Quick_Sort".parse::<Algorithm>().unwrap(), Algorithm::QuickSort);
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::BubbleSort);
        assert!(matches!(
            "bogo-sort".parse::<Algorithm>(),
            Err(CoreError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn serde_name_matches_display() {
        let json = serde_json::to_value(Algorithm::BinarySearch).unwrap();
        assert_eq!(json, serde_json::json!("binary-search"));
    }

    #[test]
    fn families() {
        assert_eq!(Algorithm::HeapSort.family(), Family::Sort);
        assert_eq!(Algorithm::LinearSearch.family(), Family::Search);
        assert_eq!(Algorithm::Dijkstra.family(), Family::Graph);
    }

    #[test]
    fn search_requires_target() {
        let req = TraceRequest {
            array: vec![1, 2],
            ..Default::default()
        };
        assert_eq!(
            generate(Algorithm::LinearSearch, &req),
            Err(CoreError::MissingParameter {
                algorithm: "linear-search",
                parameter: "target"
            })
        );
    }

    #[test]
    fn binary_search_rejects_unsorted() {
        let req = TraceRequest {
            array: vec![3, 1],
            target: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            generate(Algorithm::BinarySearch, &req),
            Err(CoreError::UnsortedInput { index: 1 })
        ));
    }

    #[test]
    fn graph_requires_start() {
        let req = TraceRequest {
            graph: Some(Graph::from_adjacency([("A", vec![])])),
            ..Default::default()
        };
        assert!(matches!(
            generate(Algorithm::Bfs, &req),
            Err(CoreError::MissingParameter { parameter: "start", .. })
        ));
    }

    #[test]
    fn fingerprint_separates_algorithms_with_identical_steps() {
        let req = TraceRequest {
            array: vec![1, 2],
            ..Default::default()
        };
        let bubble = generate(Algorithm::BubbleSort, &req).unwrap();
        let insertion = generate(Algorithm::InsertionSort, &req).unwrap();
        assert_eq!(bubble, insertion);

        assert_ne!(
            bubble.fingerprint(Algorithm::BubbleSort),
            insertion.fingerprint(Algorithm::InsertionSort)
        );
        assert_eq!(
            bubble.fingerprint(Algorithm::BubbleSort),
            generate(Algorithm::BubbleSort, &req)
                .unwrap()
                .fingerprint(Algorithm::BubbleSort)
        );
    }

    #[test]
    fn projection_bounds_the_worst_case_sort() {
        let req = TraceRequest {
            array: (0..24).rev().collect(),
            ..Default::default()
        };
        for &algorithm in Algorithm::all().iter().filter(|a| a.family() == Family::Sort) {
            let trace = generate(algorithm, &req).unwrap();
            assert!(
                trace.snapshot_cells() <= req.projected_cells(algorithm),
                "{} exceeds its projection",
                algorithm
            );
        }
        // Reversed input is bubble sort's worst case: n^2 + 1 steps of n cells.
        let bubble = generate(Algorithm::BubbleSort, &req).unwrap();
        assert_eq!(bubble.snapshot_cells(), 24 * (24 * 24 + 1));
    }

    #[test]
    fn projection_bounds_graph_traces() {
        let req = TraceRequest {
            graph: Some(Graph::from_adjacency([
                ("A", vec!["B", "C", "D"]),
                ("B", vec!["C", "D"]),
                ("C", vec!["D", "A"]),
                ("D", vec!["A"]),
            ])),
            start: Some(VertexId::from("A")),
            ..Default::default()
        };
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
            let trace = generate(algorithm, &req).unwrap();
            assert!(trace.snapshot_cells() <= req.projected_cells(algorithm));
        }
        assert_eq!(req.projected_cells(Algorithm::Dijkstra), (12 + 16 + 2) * 12);
    }

    #[test]
    fn request_deserializes_graph_json() {
        let req: TraceRequest = serde_json::from_value(serde_json::json!({
            "graph": {"A": ["B"]},
            "start": "A"
        }))
        .unwrap();
        let trace = generate(Algorithm::Dfs, &req).unwrap();
        assert!(matches!(trace, GeneratedTrace::Graph(ref t) if t.len() > 2));
    }
}

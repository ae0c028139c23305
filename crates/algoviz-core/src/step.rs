//! Step records: one discrete, observable event in an algorithm's execution.
//!
//! Each algorithm family has its own step struct pairing a tagged event
//! (`kind` plus kind-specific fields) with a value snapshot of the visible
//! state *after* the event took effect. Snapshots are owned copies, never
//! views into the generator's working state, so any step can be rendered on
//! its own without replaying earlier ones.
//!
//! All three families serialize flat, e.g.
//! `{"kind":"swap","left":0,"right":1,"array":[3,5,8,1]}`.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Distance, VertexId};

/// Behaviour shared by every step family.
pub trait TraceStep: Clone + fmt::Display + Serialize {
    /// The camelCase kind tag, as serialized.
    fn kind(&self) -> &'static str;

    /// Whether this is the terminal `done` step.
    fn is_done(&self) -> bool {
        self.kind() == "done"
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Events emitted by the comparison sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SortEvent {
    /// `values` are the operands actually compared, `[left side, right side]`.
    /// Insertion and merge sort compare a held value, so the slot at `right`
    /// (insertion) or `left` (merge) can already hold something else.
    Compare {
        left: usize,
        right: usize,
        values: [i64; 2],
    },
    Swap { left: usize, right: usize },
    /// Insertion sort moved `array[from]` one slot right into `to`.
    Shift { from: usize, to: usize },
    /// Insertion sort dropped the held key into `index`.
    Insert { index: usize, value: i64 },
    /// Selection sort's current minimum candidate.
    Select { index: usize },
    MarkSorted { index: usize },
    Pivot { index: usize, value: i64 },
    Divide { left: usize, mid: usize, right: usize },
    MergeStart { left: usize, mid: usize, right: usize },
    MergeMove { index: usize, value: i64 },
    MergeComplete { left: usize, right: usize },
    BuildHeap,
    /// Root swapped with `index`, the new end of the heap.
    ExtractMax { index: usize },
    Done,
}

/// A sort event plus the working array after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    #[serde(flatten)]
    pub event: SortEvent,
    pub array: Vec<i64>,
}

impl TraceStep for SortStep {
    fn kind(&self) -> &'static str {
        match self.event {
            SortEvent::Compare { .. } => "compare",
            SortEvent::Swap { .. } => "swap",
            SortEvent::Shift { .. } => "shift",
            SortEvent::Insert { .. } => "insert",
            SortEvent::Select { .. } => "select",
            SortEvent::MarkSorted { .. } => "markSorted",
            SortEvent::Pivot { .. } => "pivot",
            SortEvent::Divide { .. } => "divide",
            SortEvent::MergeStart { .. } => "mergeStart",
            SortEvent::MergeMove { .. } => "mergeMove",
            SortEvent::MergeComplete { .. } => "mergeComplete",
            SortEvent::BuildHeap => "buildHeap",
            SortEvent::ExtractMax { .. } => "extractMax",
            SortEvent::Done => "done",
        }
    }
}

impl fmt::Display for SortStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event {
            SortEvent::Compare {
                left,
                right,
                values: [a, b],
            } => write!(f, "compare [{}]={} and [{}]={}", left, a, right, b)?,
            SortEvent::Swap { left, right } => write!(f, "swap [{}] and [{}]", left, right)?,
            SortEvent::Shift { from, to } => write!(f, "shift [{}] -> [{}]", from, to)?,
            SortEvent::Insert { index, value } => write!(f, "insert {} at [{}]", value, index)?,
            SortEvent::Select { index } => write!(f, "select [{}] as minimum", index)?,
            SortEvent::MarkSorted { index } => write!(f, "[{}] sorted", index)?,
            SortEvent::Pivot { index, value } => write!(f, "pivot {} at [{}]", value, index)?,
            SortEvent::Divide { left, mid, right } => {
                write!(f, "divide [{}..={}] | [{}..={}]", left, mid, mid + 1, right)?
            }
            SortEvent::MergeStart { left, right, .. } => {
                write!(f, "merge [{}..={}]", left, right)?
            }
            SortEvent::MergeMove { index, value } => write!(f, "write {} to [{}]", value, index)?,
            SortEvent::MergeComplete { left, right } => {
                write!(f, "merged [{}..={}]", left, right)?
            }
            SortEvent::BuildHeap => write!(f, "max-heap built")?,
            SortEvent::ExtractMax { index } => write!(f, "extract max to [{}]", index)?,
            SortEvent::Done => write!(f, "done")?,
        }
        write!(f, "  {:?}", self.array)
    }
}

// ---------------------------------------------------------------------------
// Searching
// ---------------------------------------------------------------------------

/// Events emitted by linear and binary search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SearchEvent {
    Check { index: usize, value: i64 },
    Found { index: usize },
    NotFound { index: usize },
    /// Binary search discarded the right half; window is now `low..=high`.
    MoveLeft { low: usize, high: isize },
    /// Binary search discarded the left half; window is now `low..=high`.
    MoveRight { low: usize, high: isize },
    Done { found: Option<usize> },
}

/// Inclusive binary-search window. `high < low` means the window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange {
    pub low: usize,
    /// Signed so an exhausted window (`high = low - 1` at `low = 0`) is representable.
    pub high: isize,
}

/// A search event plus the searched array and, for binary search, the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    #[serde(flatten)]
    pub event: SearchEvent,
    pub array: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SearchRange>,
}

impl TraceStep for SearchStep {
    fn kind(&self) -> &'static str {
        match self.event {
            SearchEvent::Check { .. } => "check",
            SearchEvent::Found { .. } => "found",
            SearchEvent::NotFound { .. } => "notFound",
            SearchEvent::MoveLeft { .. } => "moveLeft",
            SearchEvent::MoveRight { .. } => "moveRight",
            SearchEvent::Done { .. } => "done",
        }
    }
}

impl fmt::Display for SearchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event {
            SearchEvent::Check { index, value } => write!(f, "check [{}] = {}", index, value),
            SearchEvent::Found { index } => write!(f, "found at [{}]", index),
            SearchEvent::NotFound { index } => write!(f, "[{}] is not the target", index),
            SearchEvent::MoveLeft { low, high } => write!(f, "move left, window [{}..={}]", low, high),
            SearchEvent::MoveRight { low, high } => {
                write!(f, "move right, window [{}..={}]", low, high)
            }
            SearchEvent::Done { found: Some(i) } => write!(f, "done, found at [{}]", i),
            SearchEvent::Done { found: None } => write!(f, "done, target not present"),
        }
    }
}

// ---------------------------------------------------------------------------
// Graph traversal
// ---------------------------------------------------------------------------

/// Events emitted by BFS, DFS and Dijkstra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GraphEvent {
    Start { vertex: VertexId },
    Enqueue { vertex: VertexId },
    Dequeue { vertex: VertexId },
    Visit { vertex: VertexId },
    Explore { from: VertexId, to: VertexId },
    Backtrack { vertex: VertexId },
    Select { vertex: VertexId, distance: Distance },
    Relax {
        from: VertexId,
        to: VertexId,
        weight: f64,
        current: Distance,
        candidate: Distance,
    },
    Update { vertex: VertexId, distance: Distance },
    Done,
}

/// A graph event plus traversal state after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStep {
    #[serde(flatten)]
    pub event: GraphEvent,
    /// Vertices visited so far, in visit order.
    pub visited: Vec<VertexId>,
    /// BFS queue (front first) or DFS stack (bottom first); empty for Dijkstra.
    pub frontier: Vec<VertexId>,
    /// Dijkstra's distance map, in vertex order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<IndexMap<VertexId, Distance>>,
    /// Dijkstra's predecessor map for reached vertices other than the start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<IndexMap<VertexId, VertexId>>,
}

impl TraceStep for GraphStep {
    fn kind(&self) -> &'static str {
        match self.event {
            GraphEvent::Start { .. } => "start",
            GraphEvent::Enqueue { .. } => "enqueue",
            GraphEvent::Dequeue { .. } => "dequeue",
            GraphEvent::Visit { .. } => "visit",
            GraphEvent::Explore { .. } => "explore",
            GraphEvent::Backtrack { .. } => "backtrack",
            GraphEvent::Select { .. } => "select",
            GraphEvent::Relax { .. } => "relax",
            GraphEvent::Update { .. } => "update",
            GraphEvent::Done => "done",
        }
    }
}

impl fmt::Display for GraphStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event {
            GraphEvent::Start { vertex } => write!(f, "start at {}", vertex),
            GraphEvent::Enqueue { vertex } => write!(f, "enqueue {}", vertex),
            GraphEvent::Dequeue { vertex } => write!(f, "dequeue {}", vertex),
            GraphEvent::Visit { vertex } => write!(f, "visit {}", vertex),
            GraphEvent::Explore { from, to } => write!(f, "explore {} -> {}", from, to),
            GraphEvent::Backtrack { vertex } => write!(f, "backtrack from {}", vertex),
            GraphEvent::Select { vertex, distance } => {
                write!(f, "select {} (distance {})", vertex, distance)
            }
            GraphEvent::Relax {
                from,
                to,
                weight,
                current,
                candidate,
            } => write!(
                f,
                "relax {} -> {} (w {}): {} vs {}",
                from, to, weight, candidate, current
            ),
            GraphEvent::Update { vertex, distance } => {
                write!(f, "update {} to {}", vertex, distance)
            }
            GraphEvent::Done => write!(f, "done, visited {}", self.visited.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sort_step_serializes_flat() {
        let step = SortStep {
            event: SortEvent::Swap { left: 0, right: 1 },
            array: vec![3, 5],
        };
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({"kind": "swap", "left": 0, "right": 1, "array": [3, 5]})
        );
        assert_eq!(step.kind(), "swap");
    }

    #[test]
    fn camel_case_kinds() {
        let step = SortStep {
            event: SortEvent::MarkSorted { index: 2 },
            array: vec![],
        };
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["kind"], "markSorted");
        assert_eq!(value["kind"], step.kind());
    }

    #[test]
    fn search_step_omits_range_for_linear() {
        let step = SearchStep {
            event: SearchEvent::NotFound { index: 1 },
            array: vec![1, 2],
            range: None,
        };
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["kind"], "notFound");
        assert!(value.get("range").is_none());
    }

    #[test]
    fn graph_step_deserializes() {
        let step: GraphStep = serde_json::from_value(json!({
            "kind": "explore", "from": "A", "to": "B",
            "visited": ["A"], "frontier": []
        }))
        .unwrap();
        assert_eq!(step.kind(), "explore");
        assert!(step.distances.is_none());
        assert!(!step.is_done());
    }
}

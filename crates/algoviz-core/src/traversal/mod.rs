//! Graph traversal trace generators.
//!
//! All three take a [`Graph`](crate::graph::Graph) and a start vertex. A start
//! vertex that is not in the graph yields an empty trace. Neighbors are
//! explored in listed order, so the traces are fully determined by the
//! graph's insertion order. Cycles are safe: BFS checks a discovered set before
//! enqueueing, DFS and Dijkstra check a visited set before descending.

mod bfs;
mod dfs;
mod dijkstra;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;

use crate::graph::VertexId;
use crate::step::{GraphEvent, GraphStep};
use crate::trace::Recorder;

/// Visit list and frontier shared by BFS and DFS, plus the recorder.
struct Walk {
    visited: Vec<VertexId>,
    frontier: Vec<VertexId>,
    rec: Recorder<GraphStep>,
}

impl Walk {
    fn new() -> Self {
        Walk {
            visited: Vec::new(),
            frontier: Vec::new(),
            rec: Recorder::new(),
        }
    }

    fn emit(&mut self, event: GraphEvent) {
        self.rec.push(GraphStep {
            event,
            visited: self.visited.clone(),
            frontier: self.frontier.clone(),
            distances: None,
            previous: None,
        });
    }
}

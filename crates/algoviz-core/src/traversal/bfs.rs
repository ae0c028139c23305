use std::collections::{HashSet, VecDeque};

use crate::graph::{Graph, VertexId};
use crate::step::{GraphEvent, GraphStep};
use crate::trace::Trace;

use super::Walk;

/// Breadth-first search in FIFO order of first discovery.
///
/// Emits `start` and `enqueue` for the start vertex, then for each dequeued
/// vertex: `dequeue`, `visit`, and an `explore` per outgoing edge followed by
/// `enqueue` when the neighbor is newly discovered. The `frontier` snapshot is
/// the queue, front first.
pub fn bfs(graph: &Graph, start: &VertexId) -> Trace<GraphStep> {
    if !graph.contains(start) {
        return Trace::empty();
    }

    let mut walk = Walk::new();
    let mut queue = VecDeque::new();
    let mut discovered = HashSet::new();

    walk.emit(GraphEvent::Start {
        vertex: start.clone(),
    });
    discovered.insert(start.clone());
    queue.push_back(start.clone());
    walk.frontier = queue.iter().cloned().collect();
    walk.emit(GraphEvent::Enqueue {
        vertex: start.clone(),
    });

    while let Some(vertex) = queue.pop_front() {
        walk.frontier = queue.iter().cloned().collect();
        walk.emit(GraphEvent::Dequeue {
            vertex: vertex.clone(),
        });
        walk.visited.push(vertex.clone());
        walk.emit(GraphEvent::Visit {
            vertex: vertex.clone(),
        });

        for edge in graph.edges(&vertex) {
            walk.emit(GraphEvent::Explore {
                from: vertex.clone(),
                to: edge.to.clone(),
            });
            if discovered.insert(edge.to.clone()) {
                queue.push_back(edge.to.clone());
                walk.frontier = queue.iter().cloned().collect();
                walk.emit(GraphEvent::Enqueue {
                    vertex: edge.to.clone(),
                });
            }
        }
    }

    walk.emit(GraphEvent::Done);
    walk.rec.finish()
}

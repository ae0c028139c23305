use std::collections::HashSet;

use crate::graph::{Graph, VertexId};
use crate::step::{GraphEvent, GraphStep};
use crate::trace::Trace;

use super::Walk;

/// One activation of the pre-order walk: a vertex and its next edge to try.
struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

/// Depth-first search, pre-order, neighbors in listed order.
///
/// Equivalent to the recursive formulation (visit on entry, recurse into each
/// unvisited neighbor, `backtrack` on return) but driven by an explicit frame
/// stack, so deep graphs cannot exhaust the call stack. The `frontier`
/// snapshot is that stack, bottom first.
pub fn dfs(graph: &Graph, start: &VertexId) -> Trace<GraphStep> {
    if !graph.contains(start) {
        return Trace::empty();
    }

    let mut walk = Walk::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    walk.emit(GraphEvent::Start {
        vertex: start.clone(),
    });
    enter(&mut walk, &mut stack, &mut visited, start);

    while let Some(frame) = stack.last_mut() {
        let edges = graph.edges(&frame.vertex);
        if frame.next_edge < edges.len() {
            let from = frame.vertex.clone();
            let to = edges[frame.next_edge].to.clone();
            frame.next_edge += 1;
            walk.emit(GraphEvent::Explore {
                from,
                to: to.clone(),
            });
            if !visited.contains(&to) {
                enter(&mut walk, &mut stack, &mut visited, &to);
            }
        } else {
            let done = stack.pop().map(|f| f.vertex);
            walk.frontier.pop();
            if let Some(vertex) = done {
                walk.emit(GraphEvent::Backtrack { vertex });
            }
        }
    }

    walk.emit(GraphEvent::Done);
    walk.rec.finish()
}

fn enter(
    walk: &mut Walk,
    stack: &mut Vec<Frame>,
    visited: &mut HashSet<VertexId>,
    vertex: &VertexId,
) {
    visited.insert(vertex.clone());
    stack.push(Frame {
        vertex: vertex.clone(),
        next_edge: 0,
    });
    walk.frontier.push(vertex.clone());
    walk.visited.push(vertex.clone());
    walk.emit(GraphEvent::Visit {
        vertex: vertex.clone(),
    });
}

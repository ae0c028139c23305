use std::collections::HashSet;

use indexmap::IndexMap;

use crate::graph::{Distance, Graph, VertexId};
use crate::step::{GraphEvent, GraphStep};
use crate::trace::{Recorder, Trace};

/// Dijkstra's single-source shortest paths over non-negative weights.
///
/// Every vertex starts at [`Distance::INFINITY`] except the start at zero.
/// Each round selects the unvisited vertex with the smallest finite distance;
/// ties go to the vertex that comes first in graph insertion order. The
/// selected vertex is emitted as `select` then `visit`, and each edge into a
/// still-unvisited vertex is emitted as `relax`, followed by `update` when the
/// candidate distance is strictly smaller.
///
/// The loop ends as soon as no unvisited vertex has a finite distance, so
/// unreachable vertices keep `Infinity` in the final `done` step.
pub fn dijkstra(graph: &Graph, start: &VertexId) -> Trace<GraphStep> {
    if !graph.contains(start) {
        return Trace::empty();
    }

    let mut run = ShortestPaths::new(graph, start);
    run.emit(GraphEvent::Start {
        vertex: start.clone(),
    });

    while let Some((vertex, distance)) = run.closest_unvisited() {
        run.emit(GraphEvent::Select {
            vertex: vertex.clone(),
            distance,
        });
        run.settled.insert(vertex.clone());
        run.visited.push(vertex.clone());
        run.emit(GraphEvent::Visit {
            vertex: vertex.clone(),
        });

        for edge in graph.edges(&vertex) {
            if run.settled.contains(&edge.to) {
                continue;
            }
            let current = run.distances[&edge.to];
            let candidate = Distance(distance.0 + edge.weight);
            run.emit(GraphEvent::Relax {
                from: vertex.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
                current,
                candidate,
            });
            if candidate < current {
                run.distances.insert(edge.to.clone(), candidate);
                run.previous.insert(edge.to.clone(), vertex.clone());
                run.emit(GraphEvent::Update {
                    vertex: edge.to.clone(),
                    distance: candidate,
                });
            }
        }
    }

    run.emit(GraphEvent::Done);
    run.rec.finish()
}

struct ShortestPaths {
    distances: IndexMap<VertexId, Distance>,
    previous: IndexMap<VertexId, VertexId>,
    settled: HashSet<VertexId>,
    visited: Vec<VertexId>,
    rec: Recorder<GraphStep>,
}

impl ShortestPaths {
    fn new(graph: &Graph, start: &VertexId) -> Self {
        let distances = graph
            .vertices()
            .map(|v| {
                let d = if v == start {
                    Distance::ZERO
                } else {
                    Distance::INFINITY
                };
                (v.clone(), d)
            })
            .collect();
        ShortestPaths {
            distances,
            previous: IndexMap::new(),
            settled: HashSet::new(),
            visited: Vec::new(),
            rec: Recorder::new(),
        }
    }

    /// First-in-scan-order unvisited vertex with the smallest finite distance.
    fn closest_unvisited(&self) -> Option<(VertexId, Distance)> {
        let mut best: Option<(&VertexId, Distance)> = None;
        for (v, &d) in &self.distances {
            if self.settled.contains(v) || !d.is_finite() {
                continue;
            }
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((v, d));
            }
        }
        best.map(|(v, d)| (v.clone(), d))
    }

    fn emit(&mut self, event: GraphEvent) {
        self.rec.push(GraphStep {
            event,
            visited: self.visited.clone(),
            frontier: Vec::new(),
            distances: Some(self.distances.clone()),
            previous: Some(self.previous.clone()),
        });
    }
}

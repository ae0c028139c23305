//! Traces: the ordered, immutable step sequence a generator produces.
//!
//! A [`Trace`] is append-only while a generator builds it through a
//! [`Recorder`] and read-only afterwards. Because generation is deterministic,
//! [`Trace::fingerprint`] is a stable identity for "the same run", usable as a
//! replay or cache key.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;
use crate::step::{GraphStep, SearchEvent, SearchStep, TraceStep};

/// An ordered sequence of steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    /// The empty trace, returned when a generator has nothing to do.
    pub fn empty() -> Self {
        Trace { steps: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}

impl<S: TraceStep> Trace<S> {
    /// Number of steps whose kind tag equals `kind`.
    pub fn count(&self, kind: &str) -> usize {
        self.steps.iter().filter(|s| s.kind() == kind).count()
    }

    /// Lowercase hex BLAKE3 digest of the trace's JSON encoding.
    pub fn fingerprint(&self) -> String {
        // Step types contain only plain data, so encoding cannot fail.
        let bytes = serde_json::to_vec(&self.steps).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }
}

impl Trace<SearchStep> {
    /// Index reported by the `found` step, if the search succeeded.
    ///
    /// Scans for the `found` kind rather than trusting the last step.
    pub fn found_index(&self) -> Option<usize> {
        self.steps.iter().find_map(|s| match s.event {
            SearchEvent::Found { index } => Some(index),
            _ => None,
        })
    }
}

impl Trace<GraphStep> {
    /// Shortest path from the start vertex to `target`, reconstructed from the
    /// final step's predecessor map. Only meaningful for Dijkstra traces.
    ///
    /// Returns `None` if the trace has no distance data or `target` was not
    /// reached.
    pub fn shortest_path(&self, target: &VertexId) -> Option<Vec<VertexId>> {
        let last = self.steps.last()?;
        let distances = last.distances.as_ref()?;
        let previous = last.previous.as_ref()?;
        if !distances.get(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = previous.get(current) {
            // A predecessor chain longer than the vertex count would be a cycle.
            if path.len() > distances.len() {
                return None;
            }
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<S> From<Trace<S>> for Vec<S> {
    fn from(trace: Trace<S>) -> Self {
        trace.steps
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only builder used by the generators. Steps are owned; callers clone
/// their working state into each one.
#[derive(Debug)]
pub(crate) struct Recorder<S> {
    steps: Vec<S>,
}

impl<S> Recorder<S> {
    pub(crate) fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: S) {
        self.steps.push(step);
    }

    pub(crate) fn finish(self) -> Trace<S> {
        Trace { steps: self.steps }
    }
}

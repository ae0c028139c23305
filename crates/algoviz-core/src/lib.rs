//! Deterministic step traces for classic algorithms.
//!
//! Each generator takes an algorithm's input (an array of integers, or a
//! [`Graph`] plus a start vertex) and returns a [`Trace`]: a finite, ordered
//! list of steps recording every comparison, mutation, queue operation, visit
//! or relaxation, each carrying a full value snapshot of the visible state.
//! Generators are pure: same input, same trace, byte for byte.
//!
//! # Usage
//!
//! ```
//! use algoviz_core::sorting::bubble_sort;
//! use algoviz_core::TraceStep;
//!
//! let trace = bubble_sort(&[5, 3, 8, 1]);
//! assert_eq!(trace.count("compare"), 6);
//! assert!(trace.last().unwrap().is_done());
//! assert_eq!(trace.last().unwrap().array, vec![1, 3, 5, 8]);
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod input;
pub mod searching;
pub mod sorting;
pub mod step;
pub mod trace;
pub mod traversal;

// Re-export commonly used types
pub use algorithm::{generate, Algorithm, Family, GeneratedTrace, TraceRequest};
pub use error::CoreError;
pub use graph::{Distance, Edge, Graph, VertexId};
pub use step::{
    GraphEvent, GraphStep, SearchEvent, SearchRange, SearchStep, SortEvent, SortStep, TraceStep,
};
pub use trace::Trace;

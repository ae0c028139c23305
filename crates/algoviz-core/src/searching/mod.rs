//! Search trace generators.
//!
//! Both generators record a `check` for every element they inspect, followed
//! by its outcome. They stop at the first match with `found`, and always end
//! with `done { found }`. Consumers that need the outcome should use
//! [`Trace::found_index`](crate::trace::Trace::found_index), which scans for
//! the `found` step.

mod binary;
mod linear;

pub use binary::{binary_search, check_ascending};
pub use linear::linear_search;

//! HTTP/JSON API for generating and fetching algorithm traces.
//!
//! Clients pick an algorithm from the catalog, post its input, and receive the
//! full step trace plus a fingerprint. Traces are deterministic, so the
//! fingerprint doubles as a replay id: `GET /traces/{fingerprint}` returns the
//! same trace again without regenerating it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;

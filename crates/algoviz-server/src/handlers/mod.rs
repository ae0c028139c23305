//! Request handlers, one module per API area.

pub mod algorithms;
pub mod traces;

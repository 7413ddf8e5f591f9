//! Cogitate: interactive console entry point.
//!
//! Terminal adapters for the core capabilities, run configuration, and the
//! mapping from a run's result to what the process prints and returns.

pub mod config;
pub mod terminal;
pub mod termination;

//! Cogitate: staged scenario presentation engine.
//!
//! Responsible for sequencing the five narrative stages of each scenario,
//! sampling their content, and rendering them as paced console steps.

pub mod application;
pub mod domain;

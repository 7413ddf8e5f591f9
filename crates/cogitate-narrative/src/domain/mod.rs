//! Domain model for the reasoning presentation.

pub mod outcomes;
pub mod path;
pub mod report;
pub mod scenario;
pub mod stage;

//! Application layer: rendering, pacing and stage orchestration.

pub mod config;
pub mod controller;
pub mod engine;
pub mod narration;
pub mod pause;
pub mod renderer;

pub use config::PacingConfig;
pub use controller::DemoController;
pub use engine::{Capabilities, ScenarioEngine};

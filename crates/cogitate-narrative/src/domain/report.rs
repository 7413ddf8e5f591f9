//! Read-only records of what a run presented.

use serde::Serialize;

use super::outcomes::{FinalDecision, PathSelection, SeedOutcome, VerificationOutcome};
use super::path::{PATH_COUNT, ReasoningPath};
use super::scenario::ScenarioKind;

/// Everything one scenario run sampled and rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub scenario: String,
    /// Branch taken.
    pub kind: ScenarioKind,
    /// Stage 1.
    pub seed: SeedOutcome,
    /// Stage 2.
    pub paths: [ReasoningPath; PATH_COUNT],
    /// Stage 3.
    pub selection: PathSelection,
    /// Stage 4.
    pub verification: VerificationOutcome,
    /// Stage 5.
    pub decision: FinalDecision,
    /// Value of the step counter after the last stage.
    pub steps_rendered: u32,
}

/// Reports for every scenario of a completed demo, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DemoReport {
    /// Per-scenario reports.
    pub scenarios: Vec<ScenarioReport>,
}

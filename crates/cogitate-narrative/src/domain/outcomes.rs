//! Stage outcomes.
//!
//! Each stage first samples an outcome here, then the application layer
//! narrates it. Outcomes depend only on the scenario, the injected RNG, and
//! the path chosen by an earlier stage.

use cogitate_content::ContentPool;
use cogitate_core::rng::{DeterministicRng, choose, uniform_f64};
use serde::Serialize;

use super::path::{PATH_COUNT, ReasoningPath};
use super::scenario::ScenarioKind;

/// Range the seed-stage complexity is drawn from.
pub const COMPLEXITY_RANGE: (f64, f64) = (0.6, 0.9);

/// Range the seed-stage confidence is drawn from.
pub const CONFIDENCE_RANGE: (f64, f64) = (0.5, 0.8);

/// Range the final-decision thinking duration (seconds) is drawn from.
pub const THINKING_SECONDS_RANGE: (f64, f64) = (1.5, 2.5);

/// Paths verified per scenario.
pub const VERIFIED_TOTAL: u32 = 3;

/// Fewest feasible paths outside the impasse branch.
pub const MIN_FEASIBLE: u32 = 2;

/// Coarse classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
}

impl Tier {
    /// Complexity tiers: below 0.3 low, below 0.7 medium, else high.
    #[must_use]
    pub fn for_complexity(score: f64) -> Self {
        if score < 0.3 {
            Self::Low
        } else if score < 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Confidence tiers: below 0.4 low, below 0.7 medium, else high.
    #[must_use]
    pub fn for_confidence(score: f64) -> Self {
        if score < 0.4 {
            Self::Low
        } else if score < 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Label used when the tier describes complexity.
    #[must_use]
    pub fn complexity_label(self) -> &'static str {
        match self {
            Self::Low => "简单",
            Self::Medium => "中等",
            Self::High => "复杂",
        }
    }

    /// Label used when the tier describes confidence.
    #[must_use]
    pub fn confidence_label(self) -> &'static str {
        match self {
            Self::Low => "低",
            Self::Medium => "中",
            Self::High => "高",
        }
    }
}

/// Outcome of the thinking-seed stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedOutcome {
    /// Sampled complexity score.
    pub complexity: f64,
    /// Sampled confidence score.
    pub confidence: f64,
    /// Tier of `complexity`.
    pub complexity_tier: Tier,
    /// Tier of `confidence`.
    pub confidence_tier: Tier,
    /// Seed narrative chosen from the content pool.
    pub narrative: String,
}

impl SeedOutcome {
    /// Draws complexity, then confidence, then a seed narrative for `query`.
    pub fn sample(rng: &mut dyn DeterministicRng, content: &ContentPool, query: &str) -> Self {
        let complexity = uniform_f64(rng, COMPLEXITY_RANGE.0, COMPLEXITY_RANGE.1);
        let confidence = uniform_f64(rng, CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1);
        let narratives = content.seed_narratives(query);
        let narrative = choose(rng, &narratives).clone();
        Self {
            complexity,
            confidence,
            complexity_tier: Tier::for_complexity(complexity),
            confidence_tier: Tier::for_confidence(confidence),
            narrative,
        }
    }
}

/// Outcome of the path-selection stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathSelection {
    /// The path carried forward to the final decision.
    pub chosen: ReasoningPath,
    /// Decision-algorithm name cited by the narration.
    pub algorithm: &'static str,
    /// Set only for the golden-reuse scenario.
    pub golden_template_used: bool,
    /// Set only for the impasse scenario.
    pub aha_triggered: bool,
}

impl PathSelection {
    /// Draws the chosen path, then the algorithm name. The flags come from
    /// the scenario kind alone.
    pub fn select(
        rng: &mut dyn DeterministicRng,
        content: &ContentPool,
        paths: &[ReasoningPath; PATH_COUNT],
        kind: ScenarioKind,
    ) -> Self {
        let chosen = *choose(rng, paths);
        let algorithm = *choose(rng, content.decision_algorithms());
        let (golden_template_used, aha_triggered) = match kind {
            ScenarioKind::Standard => (false, false),
            ScenarioKind::Impasse => (false, true),
            ScenarioKind::GoldenReuse => (true, false),
        };
        Self {
            chosen,
            algorithm,
            golden_template_used,
            aha_triggered,
        }
    }
}

/// Outcome of the verification stage. Invariant: `feasible_count <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    /// Paths judged feasible.
    pub feasible_count: u32,
    /// Paths verified.
    pub total: u32,
}

impl VerificationOutcome {
    /// Impasse scenarios always verify 0 of 3; others draw from `[2, 3]`.
    pub fn for_scenario(rng: &mut dyn DeterministicRng, kind: ScenarioKind) -> Self {
        let feasible_count = match kind {
            ScenarioKind::Impasse => 0,
            ScenarioKind::Standard | ScenarioKind::GoldenReuse => rng
                .next_u32_range(MIN_FEASIBLE, VERIFIED_TOTAL)
                .clamp(MIN_FEASIBLE, VERIFIED_TOTAL),
        };
        Self {
            feasible_count,
            total: VERIFIED_TOTAL,
        }
    }

    /// Paths judged infeasible.
    #[must_use]
    pub fn infeasible_count(&self) -> u32 {
        self.total - self.feasible_count
    }

    /// Feasible share as a percentage.
    #[must_use]
    pub fn feasible_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.feasible_count) / f64::from(self.total) * 100.0
    }
}

/// Outcome of the final-decision stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalDecision {
    /// The path selected earlier.
    pub path: ReasoningPath,
    /// Sampled thinking duration in seconds.
    pub thinking_seconds: f64,
}

impl FinalDecision {
    /// Draws a thinking duration for the chosen path.
    pub fn conclude(rng: &mut dyn DeterministicRng, path: ReasoningPath) -> Self {
        Self {
            path,
            thinking_seconds: uniform_f64(rng, THINKING_SECONDS_RANGE.0, THINKING_SECONDS_RANGE.1),
        }
    }
}

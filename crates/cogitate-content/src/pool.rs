//! Sampling pools.

use crate::archetype::PathArchetype;

/// Names of the bandit-style decision algorithms the narration cites.
pub const DECISION_ALGORITHMS: [&str; 3] = ["thompson_sampling", "ucb_variant", "epsilon_greedy"];

/// Read-only accessors over the canned content.
///
/// Holds no state; every accessor returns a fixed, non-empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentPool;

impl ContentPool {
    /// Creates a content pool.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Thinking-seed narratives parametrized by the scenario query.
    #[must_use]
    pub fn seed_narratives(&self, query: &str) -> [String; 3] {
        [
            format!(
                "这是一个关于'{query}'的复杂技术问题。需要考虑系统架构、性能优化、可扩展性等多个方面。基于问题的特征，我需要从系统设计、技术选型、实施策略等角度进行深入分析..."
            ),
            format!(
                "面对'{query}'这个挑战，我需要突破传统思维框架。这不仅是技术问题，更是创新和实用性的平衡。我应该考虑前沿技术的应用可能性，同时确保方案的可实施性..."
            ),
            format!(
                "针对'{query}'，我需要采用系统性的分析方法。首先理解核心需求，然后评估技术选型，最后制定实施策略。这需要平衡性能、成本、复杂度等多个维度..."
            ),
        ]
    }

    /// The fixed archetype set reasoning paths are drawn from.
    #[must_use]
    pub fn archetypes(&self) -> &'static [PathArchetype; 4] {
        &PathArchetype::ALL
    }

    /// Decision-algorithm names.
    #[must_use]
    pub fn decision_algorithms(&self) -> &'static [&'static str; 3] {
        &DECISION_ALGORITHMS
    }
}

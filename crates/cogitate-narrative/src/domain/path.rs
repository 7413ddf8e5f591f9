//! Reasoning paths.

use cogitate_content::{ContentPool, PathArchetype};
use cogitate_core::rng::{DeterministicRng, sample_distinct};
use serde::Serialize;

/// Number of paths generated per scenario run.
pub const PATH_COUNT: usize = 3;

/// A candidate way of thinking, displayed but never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReasoningPath {
    /// The archetype this path follows.
    pub kind: PathArchetype,
    /// What following this path means.
    pub description: &'static str,
}

impl From<PathArchetype> for ReasoningPath {
    fn from(kind: PathArchetype) -> Self {
        Self {
            kind,
            description: kind.description(),
        }
    }
}

impl ReasoningPath {
    /// Display label of the archetype.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Samples `PATH_COUNT` distinct archetypes from the content pool.
pub fn generate_paths(
    rng: &mut dyn DeterministicRng,
    content: &ContentPool,
) -> [ReasoningPath; PATH_COUNT] {
    let archetypes: [PathArchetype; PATH_COUNT] = sample_distinct(rng, content.archetypes());
    archetypes.map(ReasoningPath::from)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cogitate_core::rng::SystemRng;
    use cogitate_test_support::MockRng;

    use super::*;

    #[test]
    fn test_generate_paths_with_minimum_draws_keeps_catalog_prefix() {
        let mut rng = MockRng;

        let paths = generate_paths(&mut rng, &ContentPool::new());

        let kinds: Vec<_> = paths.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PathArchetype::SystemicAnalysis,
                PathArchetype::Innovative,
                PathArchetype::Pragmatic
            ]
        );
    }

    #[test]
    fn test_generate_paths_yields_three_distinct_archetypes() {
        let content = ContentPool::new();
        for seed in 0..100 {
            let mut rng = SystemRng::seeded(seed);

            let paths = generate_paths(&mut rng, &content);

            let distinct: HashSet<_> = paths.iter().map(|p| p.kind).collect();
            assert_eq!(distinct.len(), PATH_COUNT, "seed {seed}");
            assert!(paths.iter().all(|p| p.description == p.kind.description()));
        }
    }
}

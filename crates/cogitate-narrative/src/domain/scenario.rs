//! Scenarios and their narrative branch.

use serde::Serialize;

/// Name of the standard metacognitive-decision scenario.
pub const STANDARD_SCENARIO: &str = "标准元认知决策";

/// Name of the scenario whose verification always reaches an impasse.
pub const IMPASSE_SCENARIO: &str = "Aha-Moment灵感迸发";

/// Name of the scenario that reuses a previously successful template.
pub const GOLDEN_REUSE_SCENARIO: &str = "经验成金智慧沉淀";

/// The canned behavioral branch a scenario takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Normal selection and majority-feasible verification.
    Standard,
    /// Every path fails verification and a scripted breakthrough follows.
    Impasse,
    /// Path selection reuses a golden template instead of the bandit framing.
    GoldenReuse,
}

impl ScenarioKind {
    /// Resolves the branch for a scenario name. Unknown names are standard.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name {
            IMPASSE_SCENARIO => Self::Impasse,
            GOLDEN_REUSE_SCENARIO => Self::GoldenReuse,
            _ => Self::Standard,
        }
    }
}

/// One named narrative run with its query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    query: String,
    kind: ScenarioKind,
}

impl Scenario {
    /// Creates a scenario; its branch is fixed from the name here, once.
    #[must_use]
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        let name = name.into();
        let kind = ScenarioKind::for_name(&name);
        Self {
            name,
            query: query.into(),
            kind,
        }
    }

    /// The fixed, ordered scenario list the demo presents.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::new(STANDARD_SCENARIO, "如何构建一个高性能的网络爬虫系统？"),
            Self::new(IMPASSE_SCENARIO, "设计一个能够自我进化的AI算法框架"),
            Self::new(GOLDEN_REUSE_SCENARIO, "优化分布式系统的性能瓶颈"),
        ]
    }

    /// Scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The question the scenario reasons about.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The behavioral branch.
    #[must_use]
    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ordered_and_tagged() {
        let catalog = Scenario::catalog();

        let kinds: Vec<_> = catalog.iter().map(Scenario::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScenarioKind::Standard,
                ScenarioKind::Impasse,
                ScenarioKind::GoldenReuse
            ]
        );
        assert_eq!(catalog[0].query(), "如何构建一个高性能的网络爬虫系统？");
        assert_eq!(catalog[1].query(), "设计一个能够自我进化的AI算法框架");
        assert_eq!(catalog[2].query(), "优化分布式系统的性能瓶颈");
    }

    #[test]
    fn test_kind_follows_exact_name() {
        assert_eq!(ScenarioKind::for_name("Aha-Moment灵感迸发"), ScenarioKind::Impasse);
        assert_eq!(ScenarioKind::for_name("经验成金智慧沉淀"), ScenarioKind::GoldenReuse);
        assert_eq!(ScenarioKind::for_name("aha-moment灵感迸发"), ScenarioKind::Standard);
        assert_eq!(ScenarioKind::for_name(""), ScenarioKind::Standard);
    }
}

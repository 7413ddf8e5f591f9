//! Reasoning-path archetypes.

use serde::Serialize;

/// One of the fixed "ways of thinking" a reasoning path can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathArchetype {
    /// Reasons from system architecture: components, data flow, interfaces.
    SystemicAnalysis,
    /// Looks past conventional approaches toward emerging techniques.
    Innovative,
    /// Prefers mature, proven, practical solutions.
    Pragmatic,
    /// Challenges the existing approach to surface risks.
    Critical,
}

impl PathArchetype {
    /// Every archetype, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::SystemicAnalysis,
        Self::Innovative,
        Self::Pragmatic,
        Self::Critical,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SystemicAnalysis => "系统分析型",
            Self::Innovative => "创新突破型",
            Self::Pragmatic => "实用务实型",
            Self::Critical => "批判质疑型",
        }
    }

    /// One-line description of how this archetype approaches a problem.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::SystemicAnalysis => {
                "从系统架构角度分析问题，考虑组件设计、数据流、接口规范等技术细节"
            }
            Self::Innovative => "跳出传统思路，探索新兴技术和创新方法来解决问题",
            Self::Pragmatic => "注重实际可行性，优先选择成熟稳定的技术方案",
            Self::Critical => "深度质疑现有方案，识别潜在问题和风险点",
        }
    }
}

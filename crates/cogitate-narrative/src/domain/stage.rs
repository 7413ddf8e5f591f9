//! The five narrative stages.

/// One fixed narrative phase, rendered in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Thinking seed.
    Seed,
    /// Branching into candidate paths.
    PathGeneration,
    /// Picking one path.
    PathSelection,
    /// Feasibility check.
    Verification,
    /// Closing decision.
    FinalDecision,
}

impl Stage {
    /// All stages in presentation order.
    pub const ORDER: [Self; 5] = [
        Self::Seed,
        Self::PathGeneration,
        Self::PathSelection,
        Self::Verification,
        Self::FinalDecision,
    ];

    /// Step label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Seed => "思维种子萌发",
            Self::PathGeneration => "多路径思维展开",
            Self::PathSelection => "最优路径选择",
            Self::Verification => "智能验证与学习",
            Self::FinalDecision => "智慧决策诞生",
        }
    }

    /// Step icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Seed => "🌱",
            Self::PathGeneration => "🛤️",
            Self::PathSelection => "🎯",
            Self::Verification => "🔬",
            Self::FinalDecision => "✨",
        }
    }
}

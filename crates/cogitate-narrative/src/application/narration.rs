//! Narration bodies for each stage.

use std::fmt::Write as _;

use crate::domain::outcomes::{FinalDecision, PathSelection, SeedOutcome, VerificationOutcome};
use crate::domain::path::ReasoningPath;
use crate::domain::scenario::ScenarioKind;

/// Characters of the seed narrative shown before the ellipsis.
pub const SEED_EXCERPT_CHARS: usize = 200;

/// Architecture tag cited in the final decision.
pub const ARCHITECTURE_TAG: &str = "5-stage-verification";

/// Returns the first `limit` characters of `text`.
fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Body of the thinking-seed stage.
#[must_use]
pub fn seed_body(seed: &SeedOutcome) -> String {
    format!(
        "
🧠 **内心独白**: \"让我仔细思考这个问题...\"
📊 **复杂度评估**: {:.2} ({})
🎯 **置信度评估**: {:.2} ({})

💭 **思维种子**:
{}...

🔍 **AI分析**: 基于问题的复杂度和我的经验，我需要生成多条思维路径来确保找到最优解决方案。
",
        seed.complexity,
        seed.complexity_tier.complexity_label(),
        seed.confidence,
        seed.confidence_tier.confidence_label(),
        excerpt(&seed.narrative, SEED_EXCERPT_CHARS),
    )
}

/// Body of the path-generation stage.
#[must_use]
pub fn paths_body(paths: &[ReasoningPath]) -> String {
    let mut body = format!(
        "
🧠 **内心独白**: \"现在我要从不同角度思考这个问题...\"

📋 **生成的思维路径** ({}条):
",
        paths.len()
    );
    for (i, path) in paths.iter().enumerate() {
        let _ = write!(
            body,
            "
  {}. 🛤️ **{}**
     思路: {}
",
            i + 1,
            path.label(),
            path.description
        );
    }
    let _ = write!(
        body,
        "
🔍 **AI分析**: 我生成了{}种不同的思考方式，涵盖系统分析、创新突破、实用导向等多个维度，确保不遗漏任何可能的解决方案。
",
        paths.len()
    );
    body
}

/// Body of the path-selection stage.
#[must_use]
pub fn selection_body(selection: &PathSelection) -> String {
    // Flag lines stay in place, blank, when the flag is off.
    let golden = if selection.golden_template_used {
        "🏆 **黄金模板匹配**: 发现了之前成功的模式！"
    } else {
        ""
    };
    let aha = if selection.aha_triggered {
        "💡 **Aha-Moment触发**: 常规路径遇阻，启动创新思考！"
    } else {
        ""
    };
    let analysis = if selection.golden_template_used {
        "基于历史成功经验，我直接选择了经过验证的黄金模板。"
    } else {
        "我使用多臂老虎机算法，平衡探索与利用，选择了当前最优的思考路径。"
    };
    format!(
        "
🧠 **内心独白**: \"让我选择最适合的思考方式...\"

🎰 **决策算法**: {}
{golden}
{aha}

🎯 **选中路径**: {}

🔍 **AI分析**: {analysis}
",
        selection.algorithm,
        selection.chosen.label()
    )
}

/// Body of the verification stage. The impasse scenario narrates the
/// crisis; the others narrate learning.
#[must_use]
pub fn verification_body(kind: ScenarioKind, outcome: &VerificationOutcome) -> String {
    let mut body = format!(
        "
🧠 **内心独白**: \"我需要验证这些想法的可行性...\"

🔬 **验证结果**:
  📊 验证路径: {} 条
  ✅ 可行路径: {} 条
  ❌ 不可行路径: {} 条
  📈 可行率: {:.1}%
",
        outcome.total,
        outcome.feasible_count,
        outcome.infeasible_count(),
        outcome.feasible_rate()
    );
    match kind {
        ScenarioKind::Impasse => body.push_str(
            "
💡 **危机出现**: 所有常规路径都不可行！
🌟 **Aha-Moment触发**: 启动创造性绕道思考...

🔍 **AI分析**: 当所有常规方法都失效时，这正是我展现创新能力的时刻！我将跳出传统框架，寻找突破性的解决方案。
",
        ),
        ScenarioKind::Standard | ScenarioKind::GoldenReuse => body.push_str(
            "
💡 **实时学习**: 每个验证结果都在更新我的知识库，让我变得更智能！

🔍 **AI分析**: 通过实时验证，我不仅选择了最优路径，还积累了宝贵的经验数据，这将帮助我在未来做出更好的决策。
",
        ),
    }
    body
}

/// Body of the final-decision stage.
#[must_use]
pub fn decision_body(decision: &FinalDecision) -> String {
    format!(
        "
🧠 **内心独白**: \"经过深思熟虑，我已经找到了最佳方案！\"

🎯 **最终决策**: {}
📝 **解决方案**: {}
🏗️ **架构版本**: {ARCHITECTURE_TAG}
⏱️ **思考耗时**: {:.2}秒

🎓 **经验积累**: 这次决策的结果将被记录下来，如果成功，可能会成为未来的\"黄金模板\"。

✨ **AI反思**: \"通过多阶段验证和实时学习，我不仅解决了当前问题，还提升了自己的智能水平。这就是元认知的力量！\"
",
        decision.path.label(),
        decision.path.description,
        decision.thinking_seconds
    )
}

#[cfg(test)]
mod tests {
    use cogitate_content::PathArchetype;

    use super::*;
    use crate::domain::outcomes::Tier;

    fn path(kind: PathArchetype) -> ReasoningPath {
        ReasoningPath::from(kind)
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("思维种子", 2), "思维");
        assert_eq!(excerpt("ab", 10), "ab");
    }

    #[test]
    fn test_seed_body_shows_scores_tiers_and_truncated_seed() {
        let long = "思".repeat(250);
        let seed = SeedOutcome {
            complexity: 0.654,
            confidence: 0.712,
            complexity_tier: Tier::Medium,
            confidence_tier: Tier::High,
            narrative: long,
        };

        let body = seed_body(&seed);

        assert!(body.contains("📊 **复杂度评估**: 0.65 (中等)"));
        assert!(body.contains("🎯 **置信度评估**: 0.71 (高)"));
        assert!(body.contains(&format!("{}...", "思".repeat(200))));
        assert!(!body.contains(&"思".repeat(201)));
    }

    #[test]
    fn test_paths_body_numbers_every_path() {
        let paths = [
            path(PathArchetype::Critical),
            path(PathArchetype::Pragmatic),
            path(PathArchetype::Innovative),
        ];

        let body = paths_body(&paths);

        assert!(body.contains("(3条)"));
        assert!(body.contains("  1. 🛤️ **批判质疑型**"));
        assert!(body.contains("  2. 🛤️ **实用务实型**"));
        assert!(body.contains("  3. 🛤️ **创新突破型**"));
        assert!(body.contains("我生成了3种不同的思考方式"));
    }

    #[test]
    fn test_selection_body_golden_reuse_replaces_bandit_framing() {
        let selection = PathSelection {
            chosen: path(PathArchetype::Pragmatic),
            algorithm: "epsilon_greedy",
            golden_template_used: true,
            aha_triggered: false,
        };

        let body = selection_body(&selection);

        assert!(body.contains("🏆 **黄金模板匹配**"));
        assert!(body.contains("黄金模板。"));
        assert!(!body.contains("多臂老虎机"));
        assert!(!body.contains("Aha-Moment触发"));
        assert!(body.contains("🎯 **选中路径**: 实用务实型"));
    }

    #[test]
    fn test_selection_body_standard_uses_bandit_framing() {
        let selection = PathSelection {
            chosen: path(PathArchetype::SystemicAnalysis),
            algorithm: "thompson_sampling",
            golden_template_used: false,
            aha_triggered: false,
        };

        let body = selection_body(&selection);

        assert!(body.contains("🎰 **决策算法**: thompson_sampling"));
        assert!(body.contains("多臂老虎机算法"));
        assert!(!body.contains("黄金模板匹配"));
    }

    #[test]
    fn test_verification_body_impasse_narrates_crisis() {
        let body = verification_body(ScenarioKind::Impasse, &VerificationOutcome {
            feasible_count: 0,
            total: 3,
        });

        assert!(body.contains("✅ 可行路径: 0 条"));
        assert!(body.contains("❌ 不可行路径: 3 条"));
        assert!(body.contains("📈 可行率: 0.0%"));
        assert!(body.contains("危机出现"));
        assert!(!body.contains("实时学习"));
    }

    #[test]
    fn test_verification_body_normal_reports_rate() {
        let body = verification_body(ScenarioKind::Standard, &VerificationOutcome {
            feasible_count: 2,
            total: 3,
        });

        assert!(body.contains("❌ 不可行路径: 1 条"));
        assert!(body.contains("📈 可行率: 66.7%"));
        assert!(body.contains("实时学习"));
    }

    #[test]
    fn test_verification_body_follows_scenario_kind() {
        let outcome = VerificationOutcome {
            feasible_count: 2,
            total: 3,
        };

        let impasse = verification_body(ScenarioKind::Impasse, &outcome);
        let golden = verification_body(ScenarioKind::GoldenReuse, &outcome);

        assert!(impasse.contains("危机出现"));
        assert!(!impasse.contains("实时学习"));
        assert!(golden.contains("实时学习"));
        assert!(!golden.contains("危机出现"));
    }

    #[test]
    fn test_selection_body_keeps_blank_flag_lines() {
        let selection = PathSelection {
            chosen: path(PathArchetype::Critical),
            algorithm: "ucb_variant",
            golden_template_used: false,
            aha_triggered: false,
        };

        let body = selection_body(&selection);

        assert!(body.contains("🎰 **决策算法**: ucb_variant\n\n\n\n🎯 **选中路径**: 批判质疑型"));
    }

    #[test]
    fn test_selection_body_aha_line_sits_in_second_flag_slot() {
        let selection = PathSelection {
            chosen: path(PathArchetype::Innovative),
            algorithm: "epsilon_greedy",
            golden_template_used: false,
            aha_triggered: true,
        };

        let body = selection_body(&selection);

        assert!(body.contains(
            "🎰 **决策算法**: epsilon_greedy\n\n💡 **Aha-Moment触发**: 常规路径遇阻，启动创新思考！\n\n🎯"
        ));
    }

    #[test]
    fn test_decision_body_cites_path_and_duration() {
        let body = decision_body(&FinalDecision {
            path: path(PathArchetype::Innovative),
            thinking_seconds: 1.987,
        });

        assert!(body.contains("🎯 **最终决策**: 创新突破型"));
        assert!(body.contains(PathArchetype::Innovative.description()));
        assert!(body.contains("5-stage-verification"));
        assert!(body.contains("⏱️ **思考耗时**: 1.99秒"));
    }
}

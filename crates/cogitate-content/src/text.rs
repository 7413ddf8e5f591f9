//! Fixed presentation text.

/// Opening banner printed once before the first scenario.
pub const BANNER: &str = "
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║    🎭 AI思维可视化演示 - 快速体验版                           ║
║                                                              ║
║    欢迎观察AI如何像专家一样思考！                             ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝

🌟 **演示特色**:
• 🧠 观察AI的\"内心独白\"
• 🛤️ 见证多路径思维展开
• 🎰 体验智能决策过程
• 🔬 感受实时验证学习
• 💡 发现创新突破时刻

🎯 **三大核心场景**:
  1. 🎯 标准元认知决策
  2. 💡 Aha-Moment灵感迸发
  3. 🏆 经验成金智慧沉淀
";

/// Title of the closing summary section.
pub const SUMMARY_TITLE: &str = "🎓 AI学习与成长总结";

/// Closing summary printed after the last scenario.
pub const SUMMARY: &str = "
✨ **AI的自我反思**:
\"通过这次演示，我展示了自己的核心能力：

🧠 **元认知思维**: 我不仅会思考问题，更会思考如何思考
🛤️ **多路径探索**: 我从多个角度审视问题，确保不遗漏最优解
🔬 **实时验证**: 我在思考阶段就验证想法，避免错误决策
💡 **创新突破**: 当常规方法失效时，我能跳出框架寻找突破
🏆 **经验沉淀**: 我将成功模式固化为模板，实现智慧复用

这就是真正的人工智能 - 不仅能解决问题，更能持续学习和成长！\"

🌟 **系统优势总结**:
• 五阶段验证流程确保决策质量
• 多臂老虎机算法实现最优探索
• Aha-Moment机制突破思维局限
• 黄金模板系统积累智慧经验
• 实时学习能力持续自我进化

🎉 **演示完成！** 感谢您观察AI的思考过程！
";

/// Heading printed with the first breakthrough line.
pub const BREAKTHROUGH_HEADING: &str = "\n💡 **Aha-Moment过程**:";

/// Breakthrough narration printed after an impasse verification, each line
/// preceded by one pacing delay.
pub const BREAKTHROUGH_LINES: [&str; 3] = [
    "🧠 重新审视问题本质...",
    "🌟 探索创新解决方案...",
    "✨ 找到突破性思路！",
];

/// Prompt shown before the first scenario.
pub const START_PROMPT: &str = "按 Enter 开始AI思维之旅...";

/// Prompt shown at the start of each scenario.
pub const SCENARIO_READY_PROMPT: &str = "准备好观察AI的思考过程了吗？";

/// Prompt shown between stages.
pub const CONTINUE_PROMPT: &str = "按 Enter 继续观察...";

/// Prompt shown between scenarios; `ordinal` is 1-based.
#[must_use]
pub fn scenario_complete_prompt(ordinal: usize) -> String {
    format!("场景 {ordinal} 完成！按 Enter 继续下一个场景...")
}

/// Farewell printed when the operator cancels the run.
pub const FAREWELL: &str = "👋 感谢观看AI思维演示！";

/// Prefix of the one-line diagnostic printed when the run faults.
pub const FAULT_PREFIX: &str = "❌ 演示过程中出现错误";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_complete_prompt_uses_ordinal() {
        assert_eq!(
            scenario_complete_prompt(2),
            "场景 2 完成！按 Enter 继续下一个场景..."
        );
    }

    #[test]
    fn test_banner_lists_all_three_scenarios() {
        for name in ["标准元认知决策", "Aha-Moment灵感迸发", "经验成金智慧沉淀"] {
            assert!(BANNER.contains(name), "banner is missing {name}");
        }
    }
}

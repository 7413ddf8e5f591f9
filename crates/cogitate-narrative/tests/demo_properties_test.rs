//! Integration tests for full presentation runs.

use cogitate_content::ContentPool;
use cogitate_content::text::BREAKTHROUGH_LINES;
use cogitate_core::rng::{DeterministicRng, SystemRng};
use cogitate_narrative::application::{Capabilities, DemoController, PacingConfig};
use cogitate_narrative::domain::report::DemoReport;
use cogitate_narrative::domain::scenario::ScenarioKind;
use cogitate_test_support::{FixedClock, InstantPacer, MockRng, ScriptedInput, SharedBuffer};

/// Runs the full catalog with every pause acknowledged and returns the report
/// and captured output.
async fn run_full_demo(rng: &mut dyn DeterministicRng) -> (DemoReport, String) {
    let clock = FixedClock::default();
    let pacer = InstantPacer::new();
    let input = ScriptedInput::always();
    let content = ContentPool::new();
    let capabilities = Capabilities {
        clock: &clock,
        pacer: &pacer,
        input: &input,
    };
    let controller =
        DemoController::with_catalog(&content, capabilities, PacingConfig::default());
    let mut out = SharedBuffer::new();

    let report = controller.run(rng, &mut out).await.unwrap();
    (report, out.contents())
}

/// Step numbers in the order their headers were printed.
fn printed_step_numbers(text: &str) -> Vec<u32> {
    text.split("步骤 ")
        .skip(1)
        .filter_map(|rest| rest.split(':').next()?.parse().ok())
        .collect()
}

#[tokio::test]
async fn test_step_counter_resets_for_each_scenario() {
    // Act
    let (_, text) = run_full_demo(&mut MockRng).await;

    // Assert
    assert_eq!(
        printed_step_numbers(&text),
        vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5, 1, 2, 3, 4, 5]
    );
}

#[tokio::test]
async fn test_verification_invariants_hold_across_seeds() {
    for seed in 0..30 {
        let mut rng = SystemRng::seeded(seed);

        let (report, _) = run_full_demo(&mut rng).await;

        for scenario in &report.scenarios {
            let verification = scenario.verification;
            assert_eq!(verification.total, 3);
            match scenario.kind {
                ScenarioKind::Impasse => assert_eq!(verification.feasible_count, 0),
                ScenarioKind::Standard | ScenarioKind::GoldenReuse => {
                    assert!((2..=3).contains(&verification.feasible_count), "seed {seed}");
                }
            }
        }
    }
}

#[tokio::test]
async fn test_displayed_rate_matches_feasible_count() {
    for seed in 0..10 {
        let mut rng = SystemRng::seeded(seed);

        let (report, text) = run_full_demo(&mut rng).await;

        for scenario in &report.scenarios {
            let rate = format!("📈 可行率: {:.1}%", scenario.verification.feasible_rate());
            assert!(text.contains(&rate), "seed {seed}: missing {rate}");
        }
    }
}

#[tokio::test]
async fn test_flags_are_exclusive_and_keyed_to_scenario() {
    let mut rng = SystemRng::seeded(3);

    let (report, _) = run_full_demo(&mut rng).await;

    for scenario in &report.scenarios {
        let selection = scenario.selection;
        assert!(!(selection.golden_template_used && selection.aha_triggered));
        assert_eq!(selection.golden_template_used, scenario.scenario == "经验成金智慧沉淀");
        assert_eq!(selection.aha_triggered, scenario.scenario == "Aha-Moment灵感迸发");
    }
}

#[tokio::test]
async fn test_breakthrough_narrated_only_for_impasse() {
    let (_, text) = run_full_demo(&mut MockRng).await;

    for line in BREAKTHROUGH_LINES {
        assert_eq!(text.matches(line).count(), 1);
    }
    let impasse_start = text.find("场景演示: Aha-Moment灵感迸发").unwrap();
    let golden_start = text.find("场景演示: 经验成金智慧沉淀").unwrap();
    let breakthrough = text.find(BREAKTHROUGH_LINES[0]).unwrap();
    assert!(impasse_start < breakthrough && breakthrough < golden_start);
}

#[tokio::test]
async fn test_report_serializes_with_snake_case_kinds() {
    let (report, _) = run_full_demo(&mut MockRng).await;

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["scenarios"][1]["kind"], "impasse");
    assert_eq!(json["scenarios"][2]["kind"], "golden_reuse");
    assert_eq!(json["scenarios"][0]["paths"].as_array().unwrap().len(), 3);
}

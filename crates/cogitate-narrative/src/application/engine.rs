//! Scenario engine: the five-stage narrative of one scenario.

use std::io::Write;

use cogitate_content::ContentPool;
use cogitate_content::text::{
    BREAKTHROUGH_HEADING, BREAKTHROUGH_LINES, CONTINUE_PROMPT, SCENARIO_READY_PROMPT,
};
use cogitate_core::clock::Clock;
use cogitate_core::error::DemoError;
use cogitate_core::input::OperatorInput;
use cogitate_core::pacing::Pacer;
use cogitate_core::rng::DeterministicRng;

use super::config::PacingConfig;
use super::narration;
use super::pause::PauseGate;
use super::renderer::{StageRenderer, write_header};
use crate::domain::outcomes::{FinalDecision, PathSelection, SeedOutcome, VerificationOutcome};
use crate::domain::path::{PATH_COUNT, ReasoningPath, generate_paths};
use crate::domain::report::ScenarioReport;
use crate::domain::scenario::{Scenario, ScenarioKind};
use crate::domain::stage::Stage;

/// The capabilities a presentation depends on.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    /// Wall-clock source for step timestamps.
    pub clock: &'a dyn Clock,
    /// Fixed-duration pauses.
    pub pacer: &'a dyn Pacer,
    /// Operator acknowledgements.
    pub input: &'a dyn OperatorInput,
}

/// Presents one scenario: seed, path generation, path selection,
/// verification and final decision, in that order.
pub struct ScenarioEngine<'a> {
    content: &'a ContentPool,
    capabilities: Capabilities<'a>,
    gate: PauseGate<'a>,
    pacing: PacingConfig,
}

impl<'a> ScenarioEngine<'a> {
    /// Creates an engine over the given content and capabilities.
    #[must_use]
    pub fn new(
        content: &'a ContentPool,
        capabilities: Capabilities<'a>,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            content,
            capabilities,
            gate: PauseGate::new(capabilities.input),
            pacing,
        }
    }

    /// Creates a renderer with its step counter at zero.
    #[must_use]
    pub fn fresh_renderer(&self) -> StageRenderer<'a> {
        StageRenderer::new(
            self.capabilities.clock,
            self.capabilities.pacer,
            self.pacing.step_delay,
        )
    }

    /// Runs every stage of `scenario`, numbering steps with `renderer`.
    ///
    /// The operator is asked to acknowledge before the first stage and
    /// between stages.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Cancelled` if the operator cancels a pause, or a
    /// fault variant if the terminal fails.
    pub async fn run(
        &self,
        scenario: &Scenario,
        renderer: &mut StageRenderer<'_>,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<ScenarioReport, DemoError> {
        tracing::info!(scenario = scenario.name(), kind = ?scenario.kind(), "Scenario started");
        self.introduce(scenario, out).await?;

        let seed = self.seed_stage(scenario, renderer, rng, out).await?;
        self.gate.wait(out, CONTINUE_PROMPT).await?;

        let paths = self.path_generation_stage(renderer, rng, out).await?;
        self.gate.wait(out, CONTINUE_PROMPT).await?;

        let selection = self
            .path_selection_stage(scenario.kind(), &paths, renderer, rng, out)
            .await?;
        self.gate.wait(out, CONTINUE_PROMPT).await?;

        let verification = self
            .verification_stage(scenario.kind(), renderer, rng, out)
            .await?;
        self.gate.wait(out, CONTINUE_PROMPT).await?;

        let decision = self
            .final_decision_stage(selection.chosen, renderer, rng, out)
            .await?;

        tracing::info!(
            scenario = scenario.name(),
            steps = renderer.step(),
            feasible_count = verification.feasible_count,
            "Scenario completed"
        );

        Ok(ScenarioReport {
            scenario: scenario.name().to_owned(),
            kind: scenario.kind(),
            seed,
            paths,
            selection,
            verification,
            decision,
            steps_rendered: renderer.step(),
        })
    }

    async fn introduce(
        &self,
        scenario: &Scenario,
        out: &mut (dyn Write + Send),
    ) -> Result<(), DemoError> {
        write_header(out, &format!("场景演示: {}", scenario.name()), "🎭")?;
        writeln!(out, "📋 **场景**: {}", scenario.name())?;
        writeln!(out, "🎯 **问题**: {}", scenario.query())?;
        writeln!(out, "\n🔍 **观察要点**: 请注意AI如何分阶段思考...")?;
        self.gate.wait(out, SCENARIO_READY_PROMPT).await
    }

    async fn seed_stage(
        &self,
        scenario: &Scenario,
        renderer: &mut StageRenderer<'_>,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<SeedOutcome, DemoError> {
        let seed = SeedOutcome::sample(rng, self.content, scenario.query());
        tracing::debug!(
            complexity = seed.complexity,
            confidence = seed.confidence,
            "Thinking seed sampled"
        );
        render_stage(renderer, out, Stage::Seed, &narration::seed_body(&seed)).await?;
        Ok(seed)
    }

    async fn path_generation_stage(
        &self,
        renderer: &mut StageRenderer<'_>,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<[ReasoningPath; PATH_COUNT], DemoError> {
        let paths = generate_paths(rng, self.content);
        tracing::debug!(paths = ?paths.map(|p| p.kind), "Reasoning paths generated");
        render_stage(
            renderer,
            out,
            Stage::PathGeneration,
            &narration::paths_body(&paths),
        )
        .await?;
        Ok(paths)
    }

    async fn path_selection_stage(
        &self,
        kind: ScenarioKind,
        paths: &[ReasoningPath; PATH_COUNT],
        renderer: &mut StageRenderer<'_>,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<PathSelection, DemoError> {
        let selection = PathSelection::select(rng, self.content, paths, kind);
        tracing::debug!(
            chosen = ?selection.chosen.kind,
            algorithm = selection.algorithm,
            golden_template_used = selection.golden_template_used,
            aha_triggered = selection.aha_triggered,
            "Path selected"
        );
        render_stage(
            renderer,
            out,
            Stage::PathSelection,
            &narration::selection_body(&selection),
        )
        .await?;
        Ok(selection)
    }

    async fn verification_stage(
        &self,
        kind: ScenarioKind,
        renderer: &mut StageRenderer<'_>,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<VerificationOutcome, DemoError> {
        let outcome = VerificationOutcome::for_scenario(rng, kind);
        render_stage(
            renderer,
            out,
            Stage::Verification,
            &narration::verification_body(kind, &outcome),
        )
        .await?;

        match kind {
            ScenarioKind::Impasse => self.narrate_breakthrough(out).await?,
            ScenarioKind::Standard | ScenarioKind::GoldenReuse => {}
        }
        Ok(outcome)
    }

    /// Prints the breakthrough lines outside the step sequence, one pacing
    /// delay before each.
    async fn narrate_breakthrough(&self, out: &mut (dyn Write + Send)) -> Result<(), DemoError> {
        tracing::debug!("Breakthrough triggered");
        for (i, line) in BREAKTHROUGH_LINES.iter().enumerate() {
            self.capabilities
                .pacer
                .pause_for(self.pacing.breakthrough_delay)
                .await;
            if i == 0 {
                writeln!(out, "{BREAKTHROUGH_HEADING}")?;
            }
            writeln!(out, "{line}")?;
            out.flush()?;
        }
        Ok(())
    }

    async fn final_decision_stage(
        &self,
        chosen: ReasoningPath,
        renderer: &mut StageRenderer<'_>,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<FinalDecision, DemoError> {
        let decision = FinalDecision::conclude(rng, chosen);
        render_stage(
            renderer,
            out,
            Stage::FinalDecision,
            &narration::decision_body(&decision),
        )
        .await?;
        Ok(decision)
    }
}

async fn render_stage(
    renderer: &mut StageRenderer<'_>,
    out: &mut (dyn Write + Send),
    stage: Stage,
    body: &str,
) -> Result<(), DemoError> {
    let step = renderer.render(out, stage.label(), body, stage.icon()).await?;
    tracing::debug!(step, stage = ?stage, "Stage rendered");
    Ok(())
}

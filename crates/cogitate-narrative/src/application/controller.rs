//! Demo controller: banner, scenarios in order, closing summary.

use std::io::Write;

use cogitate_content::ContentPool;
use cogitate_content::text::{
    BANNER, START_PROMPT, SUMMARY, SUMMARY_TITLE, scenario_complete_prompt,
};
use cogitate_core::error::DemoError;
use cogitate_core::rng::DeterministicRng;

use super::config::PacingConfig;
use super::engine::{Capabilities, ScenarioEngine};
use super::pause::PauseGate;
use super::renderer::write_header;
use crate::domain::report::DemoReport;
use crate::domain::scenario::Scenario;

/// Separator printed between scenarios.
const SCENARIO_SEPARATOR_WIDTH: usize = 20;

/// Drives the fixed scenario list through the engine.
pub struct DemoController<'a> {
    scenarios: Vec<Scenario>,
    engine: ScenarioEngine<'a>,
    gate: PauseGate<'a>,
}

impl<'a> DemoController<'a> {
    /// Creates a controller presenting `scenarios` in the given order.
    #[must_use]
    pub fn new(
        scenarios: Vec<Scenario>,
        content: &'a ContentPool,
        capabilities: Capabilities<'a>,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            scenarios,
            engine: ScenarioEngine::new(content, capabilities, pacing),
            gate: PauseGate::new(capabilities.input),
        }
    }

    /// Creates a controller over `Scenario::catalog()`.
    #[must_use]
    pub fn with_catalog(
        content: &'a ContentPool,
        capabilities: Capabilities<'a>,
        pacing: PacingConfig,
    ) -> Self {
        Self::new(Scenario::catalog(), content, capabilities, pacing)
    }

    /// The scenarios this controller presents, in order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Runs the whole presentation.
    ///
    /// Each scenario gets a renderer whose step counter starts at zero. The
    /// operator acknowledges once after the banner and once between
    /// consecutive scenarios, in addition to the engine's own pauses.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Cancelled` as soon as the operator cancels any
    /// pause; no further output is produced. Terminal failures are returned
    /// as fault variants.
    pub async fn run(
        &self,
        rng: &mut dyn DeterministicRng,
        out: &mut (dyn Write + Send),
    ) -> Result<DemoReport, DemoError> {
        writeln!(out, "{BANNER}")?;
        out.flush()?;
        self.gate.wait(out, START_PROMPT).await?;

        let mut report = DemoReport {
            scenarios: Vec::with_capacity(self.scenarios.len()),
        };
        for (index, scenario) in self.scenarios.iter().enumerate() {
            let mut renderer = self.engine.fresh_renderer();
            let scenario_report = self.engine.run(scenario, &mut renderer, rng, out).await?;
            report.scenarios.push(scenario_report);

            if index + 1 < self.scenarios.len() {
                writeln!(out, "\n{}", "🎬".repeat(SCENARIO_SEPARATOR_WIDTH))?;
                self.gate
                    .wait(out, &scenario_complete_prompt(index + 1))
                    .await?;
            }
        }

        write_header(out, SUMMARY_TITLE, "📚")?;
        writeln!(out, "{SUMMARY}")?;
        out.flush()?;

        tracing::info!(scenarios = report.scenarios.len(), "Demo completed");
        Ok(report)
    }
}

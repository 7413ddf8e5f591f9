//! Step rendering.

use std::io::Write;
use std::time::Duration;

use cogitate_core::clock::Clock;
use cogitate_core::error::DemoError;
use cogitate_core::pacing::Pacer;

/// Width of the `=` rule around section headers.
const HEADER_RULE_WIDTH: usize = 60;

/// Width of the `─` rule under a step header.
const STEP_RULE_WIDTH: usize = 50;

/// Renders numbered, timestamped steps for one scenario run.
///
/// The step counter starts at zero and lives only as long as the renderer;
/// callers create a fresh renderer per scenario.
pub struct StageRenderer<'a> {
    step: u32,
    clock: &'a dyn Clock,
    pacer: &'a dyn Pacer,
    delay: Duration,
}

impl<'a> StageRenderer<'a> {
    /// Creates a renderer whose counter starts at zero.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, pacer: &'a dyn Pacer, delay: Duration) -> Self {
        Self {
            step: 0,
            clock,
            pacer,
            delay,
        }
    }

    /// Number of steps rendered so far.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Writes one step and then waits the pacing delay.
    ///
    /// Returns the step number just rendered.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Io` if writing to `out` fails.
    pub async fn render(
        &mut self,
        out: &mut (dyn Write + Send),
        label: &str,
        body: &str,
        icon: &str,
    ) -> Result<u32, DemoError> {
        self.step += 1;
        let timestamp = self.clock.wall_time();
        writeln!(out, "\n{icon} 步骤 {}: {label} [{timestamp}]", self.step)?;
        writeln!(out, "{}", "─".repeat(STEP_RULE_WIDTH))?;
        writeln!(out, "{body}")?;
        out.flush()?;

        self.pacer.pause_for(self.delay).await;
        Ok(self.step)
    }
}

/// Writes a section header framed by `=` rules.
///
/// # Errors
///
/// Returns `DemoError::Io` if writing to `out` fails.
pub fn write_header(
    out: &mut (dyn Write + Send),
    title: &str,
    icon: &str,
) -> Result<(), DemoError> {
    let rule = "=".repeat(HEADER_RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "{icon} {title}")?;
    writeln!(out, "{rule}")?;
    out.flush()?;
    Ok(())
}

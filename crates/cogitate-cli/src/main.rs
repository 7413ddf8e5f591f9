//! Cogitate reasoning presentation entry point.

use std::io;
use std::process::ExitCode;

use cogitate_cli::config::DemoConfig;
use cogitate_cli::terminal::{StdinInput, TokioPacer};
use cogitate_cli::termination::conclude;
use cogitate_content::ContentPool;
use cogitate_core::clock::SystemClock;
use cogitate_core::error::DemoError;
use cogitate_narrative::application::{Capabilities, DemoController};
use cogitate_narrative::domain::report::DemoReport;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber. Narration owns stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .json()
        .with_writer(io::stderr)
        .init();

    let run_id = Uuid::new_v4();
    tracing::info!(%run_id, "Starting reasoning presentation");

    let result = tokio::select! {
        result = run(DemoConfig::default()) => result,
        _ = tokio::signal::ctrl_c() => Err(DemoError::Cancelled),
    };

    match &result {
        Ok(report) => match serde_json::to_string(report) {
            Ok(json) => tracing::debug!(%run_id, report = %json, "Presentation report"),
            Err(e) => tracing::warn!(%run_id, error = %e, "Could not serialize report"),
        },
        Err(e) if e.is_cancellation() => tracing::info!(%run_id, "Presentation cancelled"),
        Err(e) => tracing::error!(%run_id, error = %e, "Presentation failed"),
    }

    conclude(&result, &mut io::stdout()).exit_code()
}

async fn run(config: DemoConfig) -> Result<DemoReport, DemoError> {
    let input = StdinInput::spawn()?;
    let clock = SystemClock;
    let pacer = TokioPacer;
    let content = ContentPool::new();
    let capabilities = Capabilities {
        clock: &clock,
        pacer: &pacer,
        input: &input,
    };
    let controller = DemoController::with_catalog(&content, capabilities, config.pacing);
    let mut rng = config.rng();

    controller.run(&mut rng, &mut io::stdout()).await
}

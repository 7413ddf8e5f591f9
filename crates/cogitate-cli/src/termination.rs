//! Mapping a finished run to console text and process exit status.

use std::io::Write;
use std::process::ExitCode;

use cogitate_content::text::{FAREWELL, FAULT_PREFIX};
use cogitate_core::error::DemoError;

/// How a presentation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every scenario and the summary were presented.
    Completed,
    /// The operator interrupted the run.
    Cancelled,
    /// An unexpected fault ended the run.
    Faulted,
}

impl Termination {
    /// Classifies a run result.
    #[must_use]
    pub fn of<T>(result: &Result<T, DemoError>) -> Self {
        match result {
            Ok(_) => Self::Completed,
            Err(e) if e.is_cancellation() => Self::Cancelled,
            Err(_) => Self::Faulted,
        }
    }

    /// Process exit status: success unless the run faulted.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Completed | Self::Cancelled => ExitCode::SUCCESS,
            Self::Faulted => ExitCode::FAILURE,
        }
    }
}

/// Prints the farewell or the fault diagnostic for `result` and returns how
/// the run ended.
///
/// Write failures here are ignored; there is nowhere left to report them.
pub fn conclude<T>(result: &Result<T, DemoError>, out: &mut dyn Write) -> Termination {
    let termination = Termination::of(result);
    let _ = match result {
        Ok(_) => Ok(()),
        Err(DemoError::Cancelled) => writeln!(out, "\n\n{FAREWELL}"),
        Err(e) => writeln!(out, "\n{FAULT_PREFIX}: {e}"),
    };
    let _ = out.flush();
    termination
}

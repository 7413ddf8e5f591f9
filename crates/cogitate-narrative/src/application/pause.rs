//! Operator pauses.

use std::io::Write;

use cogitate_core::error::DemoError;
use cogitate_core::input::OperatorInput;

/// Prints a prompt and blocks until the operator acknowledges.
#[derive(Clone, Copy)]
pub struct PauseGate<'a> {
    input: &'a dyn OperatorInput,
}

impl<'a> PauseGate<'a> {
    /// Creates a gate reading acknowledgements from `input`.
    #[must_use]
    pub fn new(input: &'a dyn OperatorInput) -> Self {
        Self { input }
    }

    /// Prints `prompt`, then waits for one line of input. Its content is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Propagates `DemoError::Cancelled` from the input, and returns
    /// `DemoError::Io` or `DemoError::InputClosed` on terminal failure.
    pub async fn wait(&self, out: &mut (dyn Write + Send), prompt: &str) -> Result<(), DemoError> {
        writeln!(out, "\n🔍 {prompt}")?;
        out.flush()?;
        self.input.acknowledge().await
    }
}

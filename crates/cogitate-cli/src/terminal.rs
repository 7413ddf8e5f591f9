//! Terminal implementations of the pacing and operator-input capabilities.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use cogitate_core::error::DemoError;
use cogitate_core::input::OperatorInput;
use cogitate_core::pacing::Pacer;
use tokio::sync::{Mutex, mpsc};

/// Pacer backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause_for(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Operator input read line by line from standard input.
///
/// Lines are read on a dedicated thread and forwarded over a channel, so a
/// pending read never holds up the runtime when the run is abandoned.
#[derive(Debug)]
pub struct StdinInput {
    lines: Mutex<mpsc::UnboundedReceiver<io::Result<()>>>,
}

impl StdinInput {
    /// Starts the reader thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("cogitate-stdin".to_owned())
            .spawn(move || forward_lines(io::stdin().lock(), &tx))?;
        Ok(Self::from_receiver(rx))
    }

    /// Builds an input fed by an existing channel.
    #[must_use]
    pub fn from_receiver(lines: mpsc::UnboundedReceiver<io::Result<()>>) -> Self {
        Self {
            lines: Mutex::new(lines),
        }
    }
}

/// Sends one `Ok(())` per line read from `reader` until end of input, the
/// first read error (which is forwarded), or the receiver is gone. Line bytes
/// are never decoded, so any content counts as an acknowledgement.
fn forward_lines(mut reader: impl BufRead, tx: &mpsc::UnboundedSender<io::Result<()>>) {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        };
        let failed = read.is_err();
        if tx.send(read).is_err() || failed {
            break;
        }
    }
}

#[async_trait]
impl OperatorInput for StdinInput {
    async fn acknowledge(&self) -> Result<(), DemoError> {
        match self.lines.lock().await.recv().await {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(DemoError::Io(e)),
            None => Err(DemoError::InputClosed),
        }
    }
}

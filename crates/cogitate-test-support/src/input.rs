//! Test operator input: scripted acknowledgements and cancellation.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cogitate_core::error::DemoError;
use cogitate_core::input::OperatorInput;

/// Operator input that acknowledges a fixed number of pauses and then
/// behaves as if the operator pressed Ctrl-C.
#[derive(Debug)]
pub struct ScriptedInput {
    limit: Option<usize>,
    acknowledged: AtomicUsize,
}

impl ScriptedInput {
    /// Acknowledges every pause.
    #[must_use]
    pub fn always() -> Self {
        Self {
            limit: None,
            acknowledged: AtomicUsize::new(0),
        }
    }

    /// Acknowledges `count` pauses, then cancels every later one.
    #[must_use]
    pub fn acknowledging(count: usize) -> Self {
        Self {
            limit: Some(count),
            acknowledged: AtomicUsize::new(0),
        }
    }

    /// Number of pauses acknowledged so far.
    pub fn acknowledgements(&self) -> usize {
        self.acknowledged.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OperatorInput for ScriptedInput {
    async fn acknowledge(&self) -> Result<(), DemoError> {
        let done = self.acknowledged.load(Ordering::SeqCst);
        if self.limit.is_some_and(|limit| done >= limit) {
            return Err(DemoError::Cancelled);
        }
        self.acknowledged.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

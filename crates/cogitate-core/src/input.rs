//! Operator input abstraction.

use async_trait::async_trait;

use crate::error::DemoError;

/// Capability to block until the operator acknowledges.
#[async_trait]
pub trait OperatorInput: Send + Sync {
    /// Waits for one line of operator input and discards its content.
    ///
    /// # Errors
    ///
    /// Returns `DemoError::Cancelled` if the operator interrupts the wait,
    /// `DemoError::InputClosed` if input reached end-of-file, or
    /// `DemoError::Io` if reading failed.
    async fn acknowledge(&self) -> Result<(), DemoError>;
}

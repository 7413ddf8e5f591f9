//! Presentation error types.

use thiserror::Error;

/// Top-level error type for a presentation run.
///
/// `Cancelled` is the operator-cancellation class; every other variant is an
/// unexpected fault that ends the run with a non-zero status.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The operator interrupted a blocking wait.
    #[error("demo cancelled by operator")]
    Cancelled,

    /// Standard input closed while a pause was waiting for acknowledgement.
    #[error("operator input closed before acknowledgement")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    /// Returns `true` if this error represents an operator cancellation
    /// rather than a fault.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_cancelled_is_cancellation() {
        assert!(DemoError::Cancelled.is_cancellation());
        assert!(!DemoError::InputClosed.is_cancellation());
        assert!(!DemoError::Io(std::io::Error::other("broken pipe")).is_cancellation());
    }

    #[test]
    fn test_io_error_message_includes_cause() {
        let err = DemoError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "terminal I/O error: broken pipe");
    }
}

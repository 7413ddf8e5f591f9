//! Pacing abstraction.
//!
//! Narration is paced with fixed delays. Production code sleeps; tests inject
//! an implementation that returns immediately.

use std::time::Duration;

use async_trait::async_trait;

/// Capability to suspend the presentation for a bounded duration.
///
/// A pause always completes; it has no error outcome.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Suspends for `duration`.
    async fn pause_for(&self, duration: Duration);
}

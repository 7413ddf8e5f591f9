//! Shared test doubles and utilities for the Cogitate presentation.

mod clock;
mod input;
mod output;
mod pacing;
mod rng;

pub use clock::FixedClock;
pub use input::ScriptedInput;
pub use output::SharedBuffer;
pub use pacing::InstantPacer;
pub use rng::{MockRng, SequenceRng};

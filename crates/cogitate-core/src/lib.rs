//! Cogitate Core: shared capabilities for the reasoning presentation.
//!
//! This crate defines the narrow capabilities the presentation engine
//! depends on (time, randomness, pacing, operator input) and the error
//! type every layer propagates. It contains no terminal code.

pub mod clock;
pub mod error;
pub mod input;
pub mod pacing;
pub mod rng;

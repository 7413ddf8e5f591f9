//! Cogitate: canned narrative content.
//!
//! Read-only pools the presentation samples from: thinking-seed narratives,
//! reasoning-path archetypes, decision-algorithm names, and the fixed
//! banner, summary and breakthrough text. Every pool is non-empty by
//! construction and every accessor is infallible.

pub mod archetype;
pub mod pool;
pub mod text;

pub use archetype::PathArchetype;
pub use pool::ContentPool;

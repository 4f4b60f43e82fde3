//! Game rules: pure, roll-in outcome-out resolvers.
//!
//! Randomness is injected by the caller as a `1..=100` percentile roll,
//! keeping these functions deterministic under test.

pub mod battle;
pub mod enhance;

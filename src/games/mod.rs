//! Game rules for the trainer.
//!
//! The CFR machinery in [`crate::cfr`] is specialized to two-player Kuhn
//! poker; this module holds the rules of that game (actions, terminal
//! detection, payoffs, and information-set keys) separately from the
//! regret-minimization code so the two can be tested in isolation.

pub mod kuhn;

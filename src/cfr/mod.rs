//! CFR (Counterfactual Regret Minimization) training module.
//!
//! This module implements chance-sampled vanilla CFR for two-player Kuhn
//! poker.
//!
//! # Overview
//!
//! CFR is an iterative self-play algorithm that converges to Nash
//! equilibrium by:
//! 1. Computing counterfactual regret for each action at each information set
//! 2. Updating strategies to minimize regret over time (regret matching)
//! 3. Averaging strategies across iterations; the average converges to
//!    equilibrium, not the per-iteration strategy
//!
//! # Usage
//!
//! ```
//! use kuhn_cfr::cfr::{Trainer, TrainerConfig};
//!
//! let config = TrainerConfig::default().with_seed(42);
//! let mut trainer = Trainer::new(config);
//!
//! let report = trainer.train(100_000).unwrap();
//!
//! // Mean utility per hand for player 0 and the equilibrium estimate for
//! // the strongest card first to act.
//! println!("EV: {:.4}", report.mean_utility[0]);
//! println!("3 at root: {:?}", report.strategy("3"));
//! ```
//!
//! # Theory
//!
//! **Regret**: the difference between the value an action would have yielded
//! and the value of the current strategy, weighted by the probability the
//! opponent's play allows the decision point to be reached at all.
//!
//! **Regret matching**: play each action proportionally to its accumulated
//! positive regret; with no positive regret, play uniformly.
//!
//! **Convergence**: average regret decreases as O(1/sqrt(T)) and the
//! realization-weighted average strategy converges to Nash equilibrium.
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete
//!   Information" (2007)
//! - Neller, T., Lanctot, M. "An Introduction to Counterfactual Regret
//!   Minimization" (2013)

pub mod config;
pub mod node;
pub mod report;
pub mod trainer;

// Re-export main types for convenient access
pub use config::{ConfigError, TrainerConfig, TrainingStats};
pub use node::{NodeStore, StrategyNode};
pub use report::{StrategySnapshot, TrainingReport};
pub use trainer::Trainer;

//! # Kuhn CFR
//!
//! A chance-sampled Counterfactual Regret Minimization (CFR) trainer that
//! computes approximate Nash equilibrium strategies for two-player Kuhn
//! poker.
//!
//! ## Features
//!
//! - **Self-play training**: vanilla CFR with per-player reach weighting
//! - **Lazy information-set store**: nodes created on first visit
//! - **Strategy trajectories**: periodic average-strategy snapshots for
//!   external charting tools
//! - **Deterministic runs**: seedable dealer for reproducible results
//!
//! ## Quick Start
//!
//! ```
//! use kuhn_cfr::cfr::{Trainer, TrainerConfig};
//!
//! let mut trainer = Trainer::new(TrainerConfig::default().with_seed(42));
//! let report = trainer.train(10_000).unwrap();
//!
//! println!("EV of player 1: {:.4}", report.mean_utility[0]);
//! for (info_set, strategy) in &report.average_strategies {
//!     println!("{:>4}: {:?}", info_set, strategy);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Trainer ──per iteration──▶ shuffle deal ──▶ recursive CFR traversal
//!    │                                              │
//!    │ snapshot cadence                             │ lazy lookup + regret
//!    ▼                                              ▼
//! TrainingReport ◀──────────────────────────── NodeStore (info set → node)
//! ```
//!
//! The report (mean utilities, final average strategies, snapshot series)
//! is the only interface exposed to external consumers such as plotting
//! tools.

#![warn(missing_docs)]

/// CFR training module: trainer, strategy nodes, configuration, reports.
pub mod cfr;

/// Game rules module: Kuhn poker actions, payoffs, and info-set keys.
pub mod games;

// Re-export commonly used types at crate root for convenience
pub use cfr::{Trainer, TrainerConfig, TrainingReport, TrainingStats};

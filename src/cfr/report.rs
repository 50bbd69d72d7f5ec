//! Training results and the snapshot time series.
//!
//! Rather than leaving strategy trajectories in ambient mutable state for a
//! charting layer to pick over, the trainer returns an explicit
//! [`TrainingReport`]. Visualization is an external consumer: it reads the
//! snapshot series from the report (or its JSON export) and is responsible
//! for all labeling and plotting.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cfr::config::TrainingStats;
use crate::games::kuhn::NUM_ACTIONS;

/// Average strategies of every discovered information set at one point
/// during training.
///
/// Strategy vectors are `[pass probability, bet probability]`. Keys are
/// sorted so serialized snapshots are byte-stable for a given run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySnapshot {
    /// Iteration count at the moment the snapshot was taken.
    pub iteration: u64,
    /// Average strategy per information-set key.
    pub strategies: BTreeMap<String, [f64; NUM_ACTIONS]>,
}

/// Result of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Number of iterations performed by this run.
    pub iterations: u64,

    /// Mean utility per iteration for each player. The game is zero-sum,
    /// so the second entry is the negation of the first.
    pub mean_utility: [f64; 2],

    /// Final average strategy per information set, sorted by key.
    pub average_strategies: BTreeMap<String, [f64; NUM_ACTIONS]>,

    /// Average-strategy snapshots taken at the configured cadence.
    pub snapshots: Vec<StrategySnapshot>,

    /// Timing statistics for the run.
    pub stats: TrainingStats,
}

impl TrainingReport {
    /// Final average strategy for one information set.
    pub fn strategy(&self, key: &str) -> Option<[f64; NUM_ACTIONS]> {
        self.average_strategies.get(key).copied()
    }

    /// Save the report to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

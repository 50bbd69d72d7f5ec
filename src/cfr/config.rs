//! Configuration and statistics for the trainer.

use serde::{Deserialize, Serialize};

/// Configuration for a training run.
///
/// # Example
/// ```
/// use kuhn_cfr::cfr::TrainerConfig;
///
/// let config = TrainerConfig::default().with_seed(42).with_snapshots(20);
/// assert_eq!(config.snapshot_count, 20);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Random seed for reproducibility.
    ///
    /// If set, the dealer shuffles deterministically and two runs with the
    /// same seed and iteration count produce identical regrets and average
    /// strategies. If `None`, a random seed is used.
    pub seed: Option<u64>,

    /// Number of average-strategy snapshots to record over a training run.
    ///
    /// Snapshots are taken every `iterations / snapshot_count` iterations
    /// and form the time series consumed by external charting tools.
    pub snapshot_count: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            snapshot_count: 20,
        }
    }
}

impl TrainerConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the snapshot count.
    pub fn with_snapshots(mut self, count: u64) -> Self {
        self.snapshot_count = count;
        self
    }

    /// Validate the configuration against a requested iteration count.
    pub fn validate(&self, iterations: u64) -> Result<(), ConfigError> {
        if iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.snapshot_count == 0 {
            return Err(ConfigError::ZeroSnapshots);
        }
        Ok(())
    }
}

/// Errors produced when validating a training request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A training run must perform at least one iteration.
    ZeroIterations,
    /// At least one snapshot must be recorded per run.
    ZeroSnapshots,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroIterations => {
                write!(f, "iteration count must be positive")
            }
            ConfigError::ZeroSnapshots => {
                write!(f, "snapshot count must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Statistics tracked during training.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Total number of iterations completed.
    pub iterations: u64,

    /// Number of unique information sets discovered.
    pub info_sets: usize,

    /// Total time spent training (in seconds).
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,
}

impl TrainingStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update iterations per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TrainerConfig::default().validate(1).is_ok());
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = TrainerConfig::default().validate(0).unwrap_err();
        assert_eq!(err, ConfigError::ZeroIterations);
    }

    #[test]
    fn zero_snapshots_rejected() {
        let config = TrainerConfig::default().with_snapshots(0);
        let err = config.validate(100).unwrap_err();
        assert_eq!(err, ConfigError::ZeroSnapshots);
    }
}

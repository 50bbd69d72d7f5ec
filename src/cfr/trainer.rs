//! Chance-sampled vanilla CFR self-play trainer.
//!
//! Each iteration deals one random hand and runs a full recursive traversal
//! of the betting tree for that deal, updating regrets at every decision
//! information set along the way. Regrets drive the next iteration's
//! strategies via regret matching, and the realization-weighted strategy
//! average converges to a Nash equilibrium.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfr::config::{ConfigError, TrainerConfig, TrainingStats};
use crate::cfr::node::NodeStore;
use crate::cfr::report::{StrategySnapshot, TrainingReport};
use crate::games::kuhn::{self, KuhnAction, DECK, NUM_ACTIONS};

/// The self-play trainer.
///
/// Owns the dealer state, the random source, and the information-set store.
/// Training is single-threaded and, given a seeded configuration, fully
/// deterministic.
///
/// # Example
/// ```
/// use kuhn_cfr::cfr::{Trainer, TrainerConfig};
///
/// let mut trainer = Trainer::new(TrainerConfig::default().with_seed(42));
/// let report = trainer.train(10_000).unwrap();
/// assert_eq!(report.snapshots.len(), 20);
/// ```
pub struct Trainer {
    /// Configuration for the run.
    config: TrainerConfig,

    /// Lazily populated information-set store.
    store: NodeStore,

    /// The deck, shuffled in place at the start of every episode.
    /// `deal[0]` and `deal[1]` are the players' cards, `deal[2]` is burned.
    deal: [u8; 3],

    /// Random source for the dealer.
    rng: StdRng,

    /// Episodes played so far, across all `train` calls.
    iteration: u64,
}

impl Trainer {
    /// Create a trainer with the given configuration.
    pub fn new(config: TrainerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            store: NodeStore::new(),
            deal: DECK,
            rng,
            iteration: 0,
        }
    }

    /// Run a fixed number of self-play iterations and return the results.
    ///
    /// Snapshots of every node's average strategy are taken every
    /// `iterations / snapshot_count` iterations; the first snapshot is
    /// taken before any episode of this run and reflects the store as it
    /// stood at the start (empty, for a fresh trainer).
    pub fn train(&mut self, iterations: u64) -> Result<TrainingReport, ConfigError> {
        self.train_with_callback(iterations, iterations, |_| {})
    }

    /// Like [`Trainer::train`], invoking `callback` with running statistics
    /// every `callback_interval` iterations for progress reporting.
    pub fn train_with_callback<F>(
        &mut self,
        iterations: u64,
        callback_interval: u64,
        mut callback: F,
    ) -> Result<TrainingReport, ConfigError>
    where
        F: FnMut(&TrainingStats),
    {
        self.config.validate(iterations)?;

        let start_time = Instant::now();
        let snapshot_interval = (iterations / self.config.snapshot_count).max(1);
        let mut snapshots = Vec::with_capacity(self.config.snapshot_count as usize);
        let mut stats = TrainingStats::new();
        let mut total_utility = 0.0;

        for i in 0..iterations {
            if i % snapshot_interval == 0 && (snapshots.len() as u64) < self.config.snapshot_count {
                snapshots.push(self.snapshot());
            }

            total_utility += self.run_episode();

            if callback_interval > 0 && (i + 1) % callback_interval == 0 {
                stats.iterations = i + 1;
                stats.info_sets = self.store.len();
                stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
                stats.update_rate();
                callback(&stats);
            }
        }

        stats.iterations = iterations;
        stats.info_sets = self.store.len();
        stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        stats.update_rate();

        let mean = total_utility / iterations as f64;

        Ok(TrainingReport {
            iterations,
            mean_utility: [mean, -mean],
            average_strategies: self.store.average_strategies(),
            snapshots,
            stats,
        })
    }

    /// Play one self-play episode: reshuffle the deal and traverse the
    /// betting tree from the root. Returns the episode's expected utility
    /// for player 0.
    pub fn run_episode(&mut self) -> f64 {
        // Fisher-Yates shuffle of the three ranks.
        for i in (1..self.deal.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            self.deal.swap(i, j);
        }

        self.iteration += 1;
        let deal = self.deal;
        self.cfr(&deal, "", 1.0, 1.0)
    }

    /// Recursive CFR traversal for one deal.
    ///
    /// `reach0` and `reach1` are the probabilities, under each player's own
    /// strategy alone, that play reaches `history`. The return value is the
    /// node's expected utility from the perspective of the player to act,
    /// which each caller negates (zero-sum, perspective flips every ply).
    fn cfr(&mut self, deal: &[u8; 3], history: &str, reach0: f64, reach1: f64) -> f64 {
        let player = kuhn::acting_player(history);
        let opponent = 1 - player;

        if let Some(payoff) = kuhn::terminal_utility(history, deal[player], deal[opponent]) {
            return payoff;
        }
        debug_assert!(history.len() <= 2, "unterminated history {:?}", history);

        // Derive the acting player's strategy, weighted by their own reach
        // probability so the strategy average tracks realized play.
        let key = kuhn::info_key(deal[player], history);
        let own_reach = if player == 0 { reach0 } else { reach1 };
        let strategy = self.store.node_mut(&key).current_strategy(own_reach);

        let mut action_utility = [0.0; NUM_ACTIONS];
        let mut node_utility = 0.0;

        for action in KuhnAction::ALL {
            let a = action.index();
            let mut next_history = String::with_capacity(history.len() + 1);
            next_history.push_str(history);
            next_history.push(action.token());

            action_utility[a] = if player == 0 {
                -self.cfr(deal, &next_history, reach0 * strategy[a], reach1)
            } else {
                -self.cfr(deal, &next_history, reach0, reach1 * strategy[a])
            };
            node_utility += strategy[a] * action_utility[a];
        }

        // Counterfactual regret: weighted by the opponent's reach, the
        // probability that anything other than this player's own choices
        // allows the node to be reached at all.
        let opponent_reach = if player == 0 { reach1 } else { reach0 };
        let node = self.store.node_mut(&key);
        for a in 0..NUM_ACTIONS {
            node.add_regret(a, opponent_reach * (action_utility[a] - node_utility));
        }

        node_utility
    }

    /// Average strategies of every discovered information set, tagged with
    /// the current iteration count.
    pub fn snapshot(&self) -> StrategySnapshot {
        StrategySnapshot {
            iteration: self.iteration,
            strategies: self.store.average_strategies(),
        }
    }

    /// Final average strategy for one information set, if discovered.
    pub fn average_strategy(&self, key: &str) -> Option<[f64; NUM_ACTIONS]> {
        self.store.get(key).map(|node| node.average_strategy())
    }

    /// Number of information sets discovered so far.
    pub fn num_info_sets(&self) -> usize {
        self.store.len()
    }

    /// Episodes played so far, across all `train` calls.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Read access to the information-set store.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All 12 decision information sets of the game.
    const ALL_KEYS: [&str; 12] = [
        "1", "1b", "1p", "1pb", "2", "2b", "2p", "2pb", "3", "3b", "3p", "3pb",
    ];

    fn trained(seed: u64, iterations: u64) -> (Trainer, TrainingReport) {
        let mut trainer = Trainer::new(TrainerConfig::default().with_seed(seed));
        let report = trainer.train(iterations).unwrap();
        (trainer, report)
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut trainer = Trainer::new(TrainerConfig::default());
        assert_eq!(trainer.train(0).unwrap_err(), ConfigError::ZeroIterations);
    }

    #[test]
    fn discovers_all_information_sets() {
        let (trainer, report) = trained(7, 1_000);
        assert_eq!(trainer.num_info_sets(), 12);
        let keys: Vec<&str> = report
            .average_strategies
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, ALL_KEYS);
    }

    #[test]
    fn average_strategies_are_distributions() {
        let (_, report) = trained(3, 2_000);
        for (key, strategy) in &report.average_strategies {
            let sum: f64 = strategy.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{} sums to {}", key, sum);
            assert!(strategy.iter().all(|&p| p >= 0.0), "{} has negative probability", key);
        }
    }

    #[test]
    fn report_is_zero_sum() {
        let (_, report) = trained(11, 5_000);
        assert_eq!(report.mean_utility[0], -report.mean_utility[1]);
    }

    #[test]
    fn snapshot_cadence_and_monotonic_growth() {
        let config = TrainerConfig::default().with_seed(5).with_snapshots(10);
        let mut trainer = Trainer::new(config);
        let report = trainer.train(1_000).unwrap();

        assert_eq!(report.snapshots.len(), 10);
        // First snapshot precedes any episode of a fresh trainer.
        assert_eq!(report.snapshots[0].iteration, 0);
        assert!(report.snapshots[0].strategies.is_empty());

        // The key set never shrinks from one snapshot to the next.
        for pair in report.snapshots.windows(2) {
            assert!(pair[0].iteration < pair[1].iteration);
            assert!(pair[0].strategies.len() <= pair[1].strategies.len());
            for key in pair[0].strategies.keys() {
                assert!(pair[1].strategies.contains_key(key), "{} disappeared", key);
            }
        }

        // Nor across further training on the same store.
        let before = trainer.num_info_sets();
        trainer.train(1_000).unwrap();
        assert!(trainer.num_info_sets() >= before);
    }

    #[test]
    fn seeded_runs_are_identical() {
        let (trainer_a, report_a) = trained(42, 3_000);
        let (trainer_b, report_b) = trained(42, 3_000);

        assert_eq!(report_a.mean_utility, report_b.mean_utility);
        assert_eq!(report_a.average_strategies, report_b.average_strategies);
        for (key, node) in trainer_a.store().iter() {
            let other = trainer_b.store().get(key).expect("missing node");
            assert_eq!(node.regret_sum(), other.regret_sum(), "regrets differ at {}", key);
        }
    }

    #[test]
    fn converges_toward_kuhn_equilibrium() {
        let (_, report) = trained(42, 100_000);

        let bet = |key: &str| report.strategy(key).expect("undiscovered info set")[1];

        // Weakest card at the root bluffs some of the time but strictly
        // less often than the strongest card bets.
        let bluff = bet("1");
        assert!(bluff < bet("3"), "card 1 should bet less than card 3");
        assert!(bluff < 0.5, "card 1 root bet frequency {} too high", bluff);

        // Middle card first to act almost never bets.
        assert!(bet("2") < 0.1, "card 2 root bet frequency {} too high", bet("2"));

        // Facing a bet: worst card folds, best card calls.
        assert!(bet("1b") < 0.05, "card 1 should fold to a bet");
        assert!(bet("3b") > 0.95, "card 3 should call a bet");

        // Second player's call with the middle card is near 1/3.
        let call = bet("2b");
        assert!(call > 0.2 && call < 0.5, "card 2 call frequency {} not near 1/3", call);

        // First player's equilibrium EV is -1/18 per hand.
        let ev = report.mean_utility[0];
        assert!(
            (ev - (-1.0 / 18.0)).abs() < 0.05,
            "player 0 mean utility {} not near -1/18",
            ev
        );
    }
}

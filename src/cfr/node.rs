//! Per-information-set strategy accumulators and their store.
//!
//! A [`StrategyNode`] holds the three arrays CFR needs for one information
//! set: cumulative regrets, the current regret-matched strategy, and the
//! realization-weighted strategy sum whose normalization converges to the
//! equilibrium strategy. The [`NodeStore`] maps information-set keys to
//! nodes, creating them lazily on first visit.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::games::kuhn::NUM_ACTIONS;

/// Regret and strategy accumulators for a single information set.
///
/// Nodes are created zeroed on the first visit to their information set and
/// live for the rest of the training run. `regret_sum` is never reset and
/// may go negative; `strategy_sum` only ever grows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyNode {
    /// Cumulative counterfactual regret per action.
    regret_sum: [f64; NUM_ACTIONS],
    /// Current-iteration mixed strategy, recomputed on every visit.
    strategy: [f64; NUM_ACTIONS],
    /// Realization-weighted strategy mass per action.
    strategy_sum: [f64; NUM_ACTIONS],
}

impl StrategyNode {
    /// Derive the current strategy by regret matching and accumulate it
    /// into the strategy sum.
    ///
    /// Each action's weight is its positive regret, normalized; when no
    /// action has positive regret the strategy falls back to uniform, so
    /// the result is always a valid distribution. As a side effect the
    /// strategy is added to `strategy_sum` scaled by `realization_weight`,
    /// the probability that the acting player's own strategy reaches this
    /// node. That weighting is what makes the long-run average track
    /// realized play rather than per-iteration noise.
    pub fn current_strategy(&mut self, realization_weight: f64) -> [f64; NUM_ACTIONS] {
        let mut normalizing = 0.0;
        for a in 0..NUM_ACTIONS {
            self.strategy[a] = self.regret_sum[a].max(0.0);
            normalizing += self.strategy[a];
        }

        for a in 0..NUM_ACTIONS {
            if normalizing > 0.0 {
                self.strategy[a] /= normalizing;
            } else {
                self.strategy[a] = 1.0 / NUM_ACTIONS as f64;
            }
            self.strategy_sum[a] += realization_weight * self.strategy[a];
        }

        self.strategy
    }

    /// The long-run average strategy, the quantity that converges to
    /// equilibrium.
    ///
    /// Normalizes `strategy_sum`; a node that has accumulated no mass
    /// reports a uniform distribution.
    pub fn average_strategy(&self) -> [f64; NUM_ACTIONS] {
        let normalizing: f64 = self.strategy_sum.iter().sum();
        let mut average = [0.0; NUM_ACTIONS];

        for a in 0..NUM_ACTIONS {
            average[a] = if normalizing > 0.0 {
                self.strategy_sum[a] / normalizing
            } else {
                1.0 / NUM_ACTIONS as f64
            };
        }

        average
    }

    /// Accumulate counterfactual regret for one action.
    pub fn add_regret(&mut self, action: usize, regret: f64) {
        self.regret_sum[action] += regret;
    }

    /// Cumulative regrets, exposed for determinism checks and analysis.
    pub fn regret_sum(&self) -> [f64; NUM_ACTIONS] {
        self.regret_sum
    }
}

/// Lazily populated map from information-set key to [`StrategyNode`].
///
/// Internally unordered; reporting paths sort by key. The key set only
/// grows during training and the reachable key space for this game is
/// small (12 decision information sets).
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: FxHashMap<String, StrategyNode>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the node for an information set, creating it zeroed on first
    /// visit.
    pub fn node_mut(&mut self, key: &str) -> &mut StrategyNode {
        self.nodes.entry(key.to_owned()).or_default()
    }

    /// Look up a node without creating it.
    pub fn get(&self, key: &str) -> Option<&StrategyNode> {
        self.nodes.get(key)
    }

    /// Number of information sets discovered so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether any information set has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StrategyNode)> {
        self.nodes.iter()
    }

    /// Every node's average strategy, sorted by information-set key.
    pub fn average_strategies(&self) -> BTreeMap<String, [f64; NUM_ACTIONS]> {
        self.nodes
            .iter()
            .map(|(key, node)| (key.clone(), node.average_strategy()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distribution(strategy: &[f64; NUM_ACTIONS]) {
        let sum: f64 = strategy.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sums to {}", sum);
        assert!(strategy.iter().all(|&p| p >= 0.0), "negative probability");
    }

    #[test]
    fn fresh_node_plays_uniform() {
        let mut node = StrategyNode::default();
        let strategy = node.current_strategy(1.0);
        assert_eq!(strategy, [0.5, 0.5]);
    }

    #[test]
    fn regret_matching_ignores_negative_regret() {
        let mut node = StrategyNode::default();
        node.add_regret(0, -5.0);
        node.add_regret(1, 1.0);
        let strategy = node.current_strategy(1.0);
        assert_eq!(strategy, [0.0, 1.0]);
        assert_distribution(&strategy);
    }

    #[test]
    fn regret_matching_is_proportional_to_positive_regret() {
        let mut node = StrategyNode::default();
        node.add_regret(0, 3.0);
        node.add_regret(1, 1.0);
        let strategy = node.current_strategy(1.0);
        assert!((strategy[0] - 0.75).abs() < 1e-9);
        assert!((strategy[1] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn current_strategy_always_a_distribution() {
        let regrets = [
            [0.0, 0.0],
            [-1.0, -2.0],
            [10.0, 0.0],
            [1e-12, 1e-12],
            [1e6, 3.0],
        ];
        for [r0, r1] in regrets {
            let mut node = StrategyNode::default();
            node.add_regret(0, r0);
            node.add_regret(1, r1);
            assert_distribution(&node.current_strategy(0.5));
        }
    }

    #[test]
    fn average_strategy_of_untouched_node_is_uniform() {
        let node = StrategyNode::default();
        let average = node.average_strategy();
        assert_eq!(average, [0.5, 0.5]);
    }

    #[test]
    fn strategy_sum_is_weighted_by_realization() {
        let mut node = StrategyNode::default();
        // Two uniform visits with different reach weights: mass 0.75 total,
        // split evenly, so the average stays uniform.
        node.current_strategy(1.0);
        node.current_strategy(0.5);
        let average = node.average_strategy();
        assert_distribution(&average);
        assert_eq!(average, [0.5, 0.5]);

        // A zero-weight visit must not move the average.
        node.add_regret(1, 4.0);
        node.current_strategy(0.0);
        assert_eq!(node.average_strategy(), [0.5, 0.5]);
    }

    #[test]
    fn store_creates_nodes_exactly_once() {
        let mut store = NodeStore::new();
        assert!(store.is_empty());

        store.node_mut("3b").add_regret(1, 2.0);
        assert_eq!(store.len(), 1);

        // Second lookup must hit the same node, not a fresh one.
        assert_eq!(store.node_mut("3b").regret_sum(), [0.0, 2.0]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn average_strategies_are_sorted_by_key() {
        let mut store = NodeStore::new();
        for key in ["3pb", "1", "2b"] {
            store.node_mut(key);
        }
        let averages = store.average_strategies();
        let keys: Vec<&str> = averages.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["1", "2b", "3pb"]);
    }
}

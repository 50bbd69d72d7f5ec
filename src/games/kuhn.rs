//! Rules of two-player Kuhn poker.
//!
//! Kuhn poker is a simplified poker game that is small enough to solve
//! exactly, which makes it the standard benchmark for CFR implementations.
//!
//! ## Game Rules
//!
//! - 3 cards ranked 1, 2, 3
//! - 2 players, each antes 1 chip
//! - Each player receives 1 card; the third card is burned
//! - Player 1 acts first: Pass or Bet (1 chip)
//! - Player 2 responds; after "pass, bet" player 1 acts once more
//! - Higher card wins at showdown; a pass facing a bet folds the hand
//!
//! ## Game Tree
//!
//! ```text
//! P1 (first to act)
//! ├── Pass
//! │   └── P2
//! │       ├── Pass → Showdown for 1 chip     ("pp")
//! │       └── Bet
//! │           └── P1
//! │               ├── Pass → P2 wins 1 chip  ("pbp")
//! │               └── Bet → Showdown for 2   ("pbb")
//! └── Bet
//!     └── P2
//!         ├── Pass → P1 wins 1 chip          ("bp")
//!         └── Bet → Showdown for 2           ("bb")
//! ```
//!
//! ## Known Nash Equilibrium
//!
//! - **Player 1 with 1**: bet (bluff) with probability α ∈ [0, 1/3]
//! - **Player 1 with 2**: always pass
//! - **Player 1 with 3**: bet with probability 3α
//! - **Player 2 facing a bet with 1**: always fold
//! - **Player 2 facing a bet with 2**: call with probability 1/3
//! - **Player 2 facing a bet with 3**: always call
//!
//! **Expected value**: player 1 loses 1/18 ≈ 0.0556 chips per hand.

use std::fmt;

/// Number of actions available at every decision point.
pub const NUM_ACTIONS: usize = 2;

/// The three card ranks, in unshuffled order.
pub const DECK: [u8; 3] = [1, 2, 3];

/// An action in Kuhn poker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KuhnAction {
    /// Pass (check when unraised, fold when facing a bet).
    Pass,
    /// Bet (or call when facing a bet).
    Bet,
}

impl KuhnAction {
    /// Both actions, in regret-array order.
    pub const ALL: [KuhnAction; NUM_ACTIONS] = [KuhnAction::Pass, KuhnAction::Bet];

    /// Index of this action into per-node accumulator arrays.
    pub fn index(self) -> usize {
        match self {
            KuhnAction::Pass => 0,
            KuhnAction::Bet => 1,
        }
    }

    /// Single-character token appended to the betting history.
    pub fn token(self) -> char {
        match self {
            KuhnAction::Pass => 'p',
            KuhnAction::Bet => 'b',
        }
    }
}

impl fmt::Display for KuhnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KuhnAction::Pass => write!(f, "Pass"),
            KuhnAction::Bet => write!(f, "Bet"),
        }
    }
}

/// Index of the player to act given the betting history.
///
/// Players strictly alternate, so this is just history parity.
pub fn acting_player(history: &str) -> usize {
    history.len() % 2
}

/// Key identifying an information set: the acting player's private card
/// followed by the public betting history (e.g. `"3pb"`).
///
/// Two deals that reach the same history with the same acting-player card
/// are indistinguishable to that player and map to the same key.
pub fn info_key(card: u8, history: &str) -> String {
    format!("{}{}", card, history)
}

/// Terminal payoff from the perspective of the player to act, or `None`
/// if the hand continues.
///
/// `player_card` and `opponent_card` belong to the player to act and their
/// opponent respectively. The three terminal shapes are:
///
/// - `"pp"`: showdown for the ante, ±1 by card comparison
/// - a pass following a bet (`"bp"`, `"pbp"`): the passer folds and the
///   player to act collects 1 chip without any card comparison
/// - a closing `"bb"` (`"bb"`, `"pbb"`): showdown for the raised stake, ±2
pub fn terminal_utility(history: &str, player_card: u8, opponent_card: u8) -> Option<f64> {
    if history.len() < 2 {
        return None;
    }

    let player_card_higher = player_card > opponent_card;

    if history.ends_with('p') {
        if history == "pp" {
            Some(if player_card_higher { 1.0 } else { -1.0 })
        } else {
            // Opponent folded to a bet; cards are never compared.
            Some(1.0)
        }
    } else if history.ends_with("bb") {
        Some(if player_card_higher { 2.0 } else { -2.0 })
    } else {
        None
    }
}

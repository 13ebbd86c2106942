//! Perspective-filtered snapshots for presentation layers.

use crate::core::{PerPlayer, Player};
use crate::dice::Face;
use crate::engine::bid::Bid;
use serde::{Deserialize, Serialize};

/// What one die looks like from a given perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleDie {
    /// The face is visible.
    Shown(Face),
    /// The die is concealed; only its existence is known.
    Hidden,
}

impl std::fmt::Display for VisibleDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisibleDie::Shown(face) => write!(f, "{}", face),
            VisibleDie::Hidden => write!(f, "?"),
        }
    }
}

/// An immutable snapshot of the game from one player's perspective.
///
/// Everything a presentation layer needs and nothing it must not see:
/// concealed dice appear only as `Hidden` markers of matching count, so
/// no snapshot leaks the opponent's faces. Snapshots are plain values;
/// two taken without an intervening action compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    /// Whose turn it is.
    pub current_player: Player,
    /// The standing bid, if any.
    pub current_bid: Option<Bid>,
    /// How many dice each player has.
    pub dice_counts: PerPlayer<usize>,
    /// Each pool as seen from this perspective, in display order.
    pub visible_dice: PerPlayer<Vec<VisibleDie>>,
    /// Whether a round is in progress.
    pub round_active: bool,
    /// Whether the game has ended.
    pub game_over: bool,
    /// The winner, once the game has ended.
    pub winner: Option<Player>,
    /// Whether a challenge has revealed every die.
    pub all_dice_revealed: bool,
    /// Presentation hint: turn prompt, elimination, or win announcement.
    pub message: String,
    /// Presentation hint: the most recent challenge outcome, empty when none.
    pub challenge_result: String,
}

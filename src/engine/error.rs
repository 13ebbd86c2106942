//! Rejections returned by the engine's mutating operations.
//!
//! Illegal attempts are routine in normal play (stale clicks, double
//! submits), so they come back as ordinary `Err` values. A rejected
//! operation leaves the engine completely unchanged.

use crate::engine::bid::Bid;
use serde::{Deserialize, Serialize};

/// Why a mutating operation was rejected.
///
/// Variants fall into two categories: illegal actions (a well-formed
/// request the current phase, turn, or standing bid does not permit) and
/// invalid parameters (a malformed request no state would accept).
/// `is_illegal_action` and `is_invalid_parameter` expose the split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionError {
    /// The acting player is not the current player.
    NotYourTurn,
    /// A bid or challenge arrived while no round was active.
    RoundNotActive,
    /// A round start arrived while a round was already active.
    RoundInProgress,
    /// A challenge arrived before any bid was made.
    NothingToChallenge,
    /// The bid does not strictly raise the standing bid.
    BidTooLow {
        /// The bid that must be raised.
        standing: Bid,
    },
    /// The bid quantity was zero.
    ZeroQuantity,
}

impl ActionError {
    /// Whether this rejection is an illegal action.
    #[must_use]
    pub const fn is_illegal_action(self) -> bool {
        !self.is_invalid_parameter()
    }

    /// Whether this rejection is an invalid parameter.
    #[must_use]
    pub const fn is_invalid_parameter(self) -> bool {
        matches!(self, ActionError::ZeroQuantity)
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::NotYourTurn => write!(f, "not this player's turn"),
            ActionError::RoundNotActive => write!(f, "no round is active"),
            ActionError::RoundInProgress => write!(f, "a round is already in progress"),
            ActionError::NothingToChallenge => write!(f, "no standing bid to challenge"),
            ActionError::BidTooLow { standing } => {
                write!(f, "bid must raise the standing bid of {}", standing)
            }
            ActionError::ZeroQuantity => write!(f, "bid quantity must be at least 1"),
        }
    }
}

impl std::error::Error for ActionError {}

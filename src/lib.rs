//! # liars-dice
//!
//! A two-player Liar's Dice rules engine with seeded, replayable rounds.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: No I/O, no rendering, no input handling.
//!    A presentation layer drives the engine and draws its snapshots.
//!
//! 2. **Hidden information stays hidden**: Presentation reads the game
//!    through `view`, which conceals the opponent's dice until a
//!    challenge legitimately reveals them.
//!
//! 3. **Rejection over panic**: Illegal actions are routine in play
//!    (stale clicks, double submits) and come back as `Err(ActionError)`
//!    with no state change. Nothing in normal play panics.
//!
//! 4. **Deterministic**: All randomness flows through one seeded RNG,
//!    so any session can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: Players, per-player storage, deterministic RNG
//! - `dice`: Faces, dice, per-player pools
//! - `engine`: Bids, rejections, the round state machine, view snapshots
//!
//! ## Quick Start
//!
//! ```
//! use liars_dice::{Face, RoundEngine};
//!
//! let mut game = RoundEngine::new(42);
//! game.start_round().unwrap();
//!
//! let bidder = game.current_player();
//! game.place_bid(bidder, 2, Face::Five).unwrap();
//! game.challenge(bidder.opponent()).unwrap();
//!
//! assert!(game.view(bidder).all_dice_revealed);
//! ```

pub mod core;
pub mod dice;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameRng, PerPlayer, Player};

pub use crate::dice::{Die, DicePool, Face, InvalidFace};

pub use crate::engine::{
    ActionError, Bid, Phase, RoundEngine, STARTING_DICE, ViewSnapshot, VisibleDie, WILD_FACE,
};

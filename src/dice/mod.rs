//! Dice primitives: faces, single dice, and per-player pools.
//!
//! Everything here is rules-agnostic. Wildcard counting and elimination
//! are bidding rules and live in `engine`.

pub mod die;
pub mod pool;

pub use die::{Die, Face, InvalidFace};
pub use pool::DicePool;

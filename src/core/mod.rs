//! Core types: players, per-player storage, deterministic RNG.
//!
//! This module contains the building blocks that know nothing about dice
//! or bidding. The game rules live in `engine`.

pub mod player;
pub mod rng;

pub use player::{PerPlayer, Player};
pub use rng::GameRng;

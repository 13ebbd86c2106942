//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats at the table. `opponent()` flips between them, which is
//! the only seat arithmetic a two-player game needs.
//!
//! ## PerPlayer
//!
//! Per-player data storage backed by a fixed two-slot array.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
///
/// Seats are displayed 1-based: `Player::One` prints as `"Player 1"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both seats in display order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the other seat.
    ///
    /// ```
    /// use liars_dice::core::Player;
    ///
    /// assert_eq!(Player::One.opponent(), Player::Two);
    /// assert_eq!(Player::Two.opponent(), Player::One);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per seat.
/// Use `PerPlayer::new()` with explicit values,
/// or `PerPlayer::from_fn()` to build each entry from its seat.
///
/// ## Example
///
/// ```
/// use liars_dice::core::{PerPlayer, Player};
///
/// // Create with explicit values
/// let mut dice_left: PerPlayer<usize> = PerPlayer::new(5, 5);
///
/// // Access by player
/// assert_eq!(dice_left[Player::One], 5);
///
/// // Modify
/// dice_left[Player::Two] = 4;
/// assert_eq!(dice_left[Player::Two], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create a new PerPlayer with explicit values for each seat.
    #[must_use]
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PerPlayer with values from a factory function.
    ///
    /// The factory receives each `Player` in seat order.
    pub fn from_fn(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

//! A single die: face values and the reroll rule.
//!
//! ## Face
//!
//! The six faces as an ordered enum. The derived `Ord` gives
//! `One < Two < ... < Six`, which is exactly the face ordering bids are
//! compared under. Conversions from raw numbers go through `TryFrom<u8>`,
//! so anything outside 1-6 is rejected before it can reach the rules.
//!
//! ## Die
//!
//! A face paired with a `held` flag. Held dice keep their face through
//! every reroll. No standard rule sets the flag; it is an extension hook
//! for variants with kept dice.

use crate::core::GameRng;
use serde::{Deserialize, Serialize};

/// A die face, `One` through `Six`.
///
/// The derived order is the face ordering used when comparing bids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Face {
    /// All six faces in ascending order.
    pub const ALL: [Face; 6] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Get the numeric value, 1 through 6.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Face::One => 1,
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five => 5,
            Face::Six => 6,
        }
    }

    /// Draw a uniformly random face.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        Face::ALL[rng.gen_range_usize(0..Face::ALL.len())]
    }
}

impl TryFrom<u8> for Face {
    type Error = InvalidFace;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Face::One),
            2 => Ok(Face::Two),
            3 => Ok(Face::Three),
            4 => Ok(Face::Four),
            5 => Ok(Face::Five),
            6 => Ok(Face::Six),
            other => Err(InvalidFace(other)),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Error returned when converting a number outside 1-6 to a `Face`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidFace(pub u8);

impl std::fmt::Display for InvalidFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid die face {}, expected 1 through 6", self.0)
    }
}

impl std::error::Error for InvalidFace {}

/// A single die with a face value and a reroll-exemption flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Die {
    face: Face,
    held: bool,
}

impl Die {
    /// Create a die showing the given face, not held.
    #[must_use]
    pub const fn new(face: Face) -> Self {
        Self { face, held: false }
    }

    /// Create a die with a uniformly random face, not held.
    #[must_use]
    pub fn rolled(rng: &mut GameRng) -> Self {
        Self::new(Face::random(rng))
    }

    /// Get the face currently showing.
    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    /// Whether this die is exempt from rerolls.
    #[must_use]
    pub const fn is_held(self) -> bool {
        self.held
    }

    /// Mark or unmark this die as exempt from rerolls.
    ///
    /// No standard rule sets this; every reroll path honors it.
    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    /// Assign a fresh uniformly random face, unless the die is held.
    pub fn reroll(&mut self, rng: &mut GameRng) {
        if !self.held {
            self.face = Face::random(rng);
        }
    }
}

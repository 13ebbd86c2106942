//! Bids: the claims players raise against each other.

use crate::dice::Face;
use serde::{Deserialize, Serialize};

/// A claim that at least `quantity` dice across both pools show `face`,
/// wild ones included unless the bid is on ones.
///
/// Field order matters: the derived lexicographic `Ord` compares quantity
/// first, then face, which is exactly the raising rule.
///
/// ## Example
///
/// ```
/// use liars_dice::dice::Face;
/// use liars_dice::engine::Bid;
///
/// let opening = Bid::new(2, Face::Three);
///
/// assert!(Bid::new(3, Face::Two).raises(opening));
/// assert!(Bid::new(2, Face::Five).raises(opening));
/// assert!(!Bid::new(2, Face::Three).raises(opening));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub quantity: u32,
    pub face: Face,
}

impl Bid {
    /// Create a bid.
    #[must_use]
    pub const fn new(quantity: u32, face: Face) -> Self {
        Self { quantity, face }
    }

    /// Whether this bid strictly raises `standing`.
    ///
    /// A raise increases the quantity, or keeps it and increases the face.
    /// Equal bids never raise.
    #[must_use]
    pub fn raises(self, standing: Bid) -> bool {
        self > standing
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}s", self.quantity, self.face)
    }
}

//! An ordered pool of dice belonging to one player.

use crate::core::GameRng;
use crate::dice::die::{Die, Face};
use smallvec::SmallVec;

/// One player's dice.
///
/// Order is stable and display numbering relies on it. A pool shrinks by
/// one die per lost challenge and is never refilled within a game; a pool
/// reaching zero eliminates its owner.
///
/// ## Example
///
/// ```
/// use liars_dice::dice::{DicePool, Face};
///
/// let pool = DicePool::from_faces(&[Face::Three, Face::One, Face::Three]);
///
/// assert_eq!(pool.len(), 3);
/// assert_eq!(pool.count_face(Face::Three), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DicePool {
    /// SmallVec keeps the full starting pool inline without heap allocation.
    dice: SmallVec<[Die; 5]>,
}

impl DicePool {
    /// Create a pool of `count` freshly rolled dice.
    #[must_use]
    pub fn rolled(count: usize, rng: &mut GameRng) -> Self {
        Self {
            dice: (0..count).map(|_| Die::rolled(rng)).collect(),
        }
    }

    /// Create a pool showing exactly the given faces, in order, none held.
    ///
    /// For scripted scenarios and tests.
    #[must_use]
    pub fn from_faces(faces: &[Face]) -> Self {
        Self {
            dice: faces.iter().map(|&face| Die::new(face)).collect(),
        }
    }

    /// Reroll every die in the pool. Held dice keep their face.
    ///
    /// The pool size never changes here.
    pub fn reroll_all(&mut self, rng: &mut GameRng) {
        for die in &mut self.dice {
            die.reroll(rng);
        }
    }

    /// Count dice showing exactly `face`.
    ///
    /// No wildcard logic here; treating ones as wild is a bidding rule,
    /// not a property of the dice.
    #[must_use]
    pub fn count_face(&self, face: Face) -> usize {
        self.dice.iter().filter(|die| die.face() == face).count()
    }

    /// Remove and return the last die, or `None` if the pool is empty.
    ///
    /// Taking from the end keeps the surviving dice's display positions.
    pub fn remove_one(&mut self) -> Option<Die> {
        self.dice.pop()
    }

    /// Get the number of dice in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Whether the pool has no dice left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Get the dice in display order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Get mutable access to the dice, e.g. to mark one held.
    pub fn dice_mut(&mut self) -> &mut [Die] {
        &mut self.dice
    }

    /// Iterate over the faces in display order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.dice.iter().map(|die| die.face())
    }
}

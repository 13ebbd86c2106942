//! The round engine: bidding, challenges, elimination, termination.
//!
//! ## Lifecycle
//!
//! A `RoundEngine` is constructed once per game session and driven by an
//! external caller:
//!
//! 1. `start_round` rolls the pools and picks who bids first;
//! 2. the current player repeatedly raises with `place_bid`, or calls
//!    `challenge`;
//! 3. the challenge reveals all dice, costs the loser one die, and ends
//!    the round, or the game when the loser is out of dice;
//! 4. back to 1.
//!
//! ## Failure semantics
//!
//! Every mutating operation either fully applies or returns an
//! `ActionError` and changes nothing. Presentation layers read the engine
//! through `view`, which conceals the opponent's faces until a challenge
//! reveals them.

use crate::core::{GameRng, PerPlayer, Player};
use crate::dice::{DicePool, Face};
use crate::engine::bid::Bid;
use crate::engine::error::ActionError;
use crate::engine::view::{ViewSnapshot, VisibleDie};
use tracing::{debug, trace};

/// Dice each player starts with.
pub const STARTING_DICE: usize = 5;

/// The wild face: ones count toward any bid on another face.
pub const WILD_FACE: Face = Face::One;

/// Where the session stands in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Bidding is in progress.
    RoundActive,
    /// Between rounds; nothing is in progress.
    RoundEnded,
    /// Terminal. Carrying the winner in the variant means a finished game
    /// always has one.
    GameOver {
        /// The player whose opponent ran out of dice.
        winner: Player,
    },
}

/// The authoritative rules engine for one game session.
///
/// Owns both dice pools, the standing bid, the turn marker, and the RNG.
/// All randomness flows through the seed given at construction, so a
/// session can be replayed exactly.
///
/// ## Example
///
/// ```
/// use liars_dice::core::Player;
/// use liars_dice::dice::Face;
/// use liars_dice::engine::RoundEngine;
///
/// let mut game = RoundEngine::new(42);
/// game.start_round().unwrap();
///
/// let bidder = game.current_player();
/// game.place_bid(bidder, 2, Face::Three).unwrap();
/// game.challenge(bidder.opponent()).unwrap();
///
/// // The challenge cost its loser one die.
/// let total: usize = Player::ALL.iter().map(|&p| game.dice_count(p)).sum();
/// assert_eq!(total, 9);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    pools: PerPlayer<DicePool>,
    current_player: Player,
    current_bid: Option<Bid>,
    phase: Phase,
    all_revealed: bool,
    message: String,
    challenge_result: String,
    rng: GameRng,
}

impl RoundEngine {
    /// Create an engine with the given seed.
    ///
    /// Both pools start at five freshly rolled dice. Construction is
    /// inert: no round is active until `start_round`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create an engine seeded from system entropy.
    ///
    /// The chosen seed is readable through `seed()` for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    fn from_rng(mut rng: GameRng) -> Self {
        let pools = PerPlayer::from_fn(|_| DicePool::rolled(STARTING_DICE, &mut rng));
        Self {
            pools,
            current_player: Player::One,
            current_bid: None,
            phase: Phase::RoundEnded,
            all_revealed: false,
            message: String::new(),
            challenge_result: String::new(),
            rng,
        }
    }

    /// Assemble an engine mid-game with scripted pools, entering an
    /// active round with `first_bidder` to act.
    ///
    /// For scenario tests and replay tooling; `new` is the normal entry.
    #[must_use]
    pub fn from_pools(
        pool_one: DicePool,
        pool_two: DicePool,
        first_bidder: Player,
        seed: u64,
    ) -> Self {
        assert!(
            !pool_one.is_empty() && !pool_two.is_empty(),
            "Both players need dice for an active round"
        );

        Self {
            pools: PerPlayer::new(pool_one, pool_two),
            current_player: first_bidder,
            current_bid: None,
            phase: Phase::RoundActive,
            all_revealed: false,
            message: format!("{}'s turn", first_bidder),
            challenge_result: String::new(),
            rng: GameRng::new(seed),
        }
    }

    // === Actions ===

    /// Start the next round.
    ///
    /// From `RoundEnded`, rerolls both pools at their current sizes; from
    /// `GameOver`, re-creates both pools at the full starting size. Both
    /// paths pick a fresh uniformly random starting player and clear the
    /// bid, the reveal flag, and the challenge result. Rejected with
    /// `RoundInProgress` while a round is being played.
    pub fn start_round(&mut self) -> Result<(), ActionError> {
        match self.phase {
            Phase::RoundActive => {
                trace!("round start rejected: round in progress");
                return Err(ActionError::RoundInProgress);
            }
            Phase::GameOver { .. } => {
                self.pools =
                    PerPlayer::from_fn(|_| DicePool::rolled(STARTING_DICE, &mut self.rng));
            }
            Phase::RoundEnded => {
                for (_, pool) in self.pools.iter_mut() {
                    pool.reroll_all(&mut self.rng);
                }
            }
        }

        self.current_player = Player::ALL[self.rng.gen_range_usize(0..Player::ALL.len())];
        self.current_bid = None;
        self.all_revealed = false;
        self.phase = Phase::RoundActive;
        self.message = format!("{}'s turn", self.current_player);
        self.challenge_result.clear();

        debug!(
            "round started: {} bids first with dice {}-{}",
            self.current_player,
            self.pools[Player::One].len(),
            self.pools[Player::Two].len()
        );
        Ok(())
    }

    /// Place a bid claiming at least `quantity` dice show `face`.
    ///
    /// The bid must strictly raise the standing bid: a higher quantity,
    /// or the same quantity of a higher face. An accepted bid passes the
    /// turn to the opponent. No dice move on a bid.
    pub fn place_bid(
        &mut self,
        player: Player,
        quantity: u32,
        face: Face,
    ) -> Result<(), ActionError> {
        if self.phase != Phase::RoundActive {
            trace!("bid rejected: no active round");
            return Err(ActionError::RoundNotActive);
        }
        if player != self.current_player {
            trace!("bid rejected: {} acted out of turn", player);
            return Err(ActionError::NotYourTurn);
        }
        if quantity == 0 {
            trace!("bid rejected: zero quantity");
            return Err(ActionError::ZeroQuantity);
        }

        let bid = Bid::new(quantity, face);
        if let Some(standing) = self.current_bid {
            if !bid.raises(standing) {
                trace!("bid rejected: {} does not raise {}", bid, standing);
                return Err(ActionError::BidTooLow { standing });
            }
        }

        self.current_bid = Some(bid);
        self.current_player = player.opponent();
        self.message = format!("{}'s turn", self.current_player);
        self.challenge_result.clear();

        debug!("{} bid {}", player, bid);
        Ok(())
    }

    /// Challenge the standing bid.
    ///
    /// Reveals every die and counts the bid's face across both pools,
    /// wild ones included unless the bid was on ones. If the count reaches
    /// the bid's quantity the bid stands and the challenger loses a die;
    /// otherwise the bidder loses one. Losing the last die loses the game.
    /// The turn marker does not move on a challenge.
    pub fn challenge(&mut self, player: Player) -> Result<(), ActionError> {
        if self.phase != Phase::RoundActive {
            trace!("challenge rejected: no active round");
            return Err(ActionError::RoundNotActive);
        }
        if player != self.current_player {
            trace!("challenge rejected: {} acted out of turn", player);
            return Err(ActionError::NotYourTurn);
        }
        let bid = match self.current_bid {
            Some(bid) => bid,
            None => {
                trace!("challenge rejected: nothing to challenge");
                return Err(ActionError::NothingToChallenge);
            }
        };

        self.all_revealed = true;

        let total = self.total_matching(bid.face);
        let bid_stood = total >= bid.quantity as usize;

        // The challenger pays for a standing bid, the bidder for a busted one.
        let loser = if bid_stood { player } else { player.opponent() };
        self.challenge_result = if bid_stood {
            format!("Challenge failed! Total {} {}s", total, bid.face)
        } else {
            format!("Challenge succeeded! Only {} {}s", total, bid.face)
        };
        self.message = format!("{} loses a die", loser);

        let removed = self.pools[loser].remove_one();
        debug_assert!(removed.is_some(), "loser holds dice while a round is active");

        self.current_bid = None;

        if self.pools[loser].is_empty() {
            let winner = loser.opponent();
            self.phase = Phase::GameOver { winner };
            self.message = format!("{} wins!", winner);
            self.challenge_result.clear();
            debug!(
                "{} challenged {}: total {}, {} is out, {} wins",
                player, bid, total, loser, winner
            );
        } else {
            self.phase = Phase::RoundEnded;
            debug!("{} challenged {}: total {}, {} loses a die", player, bid, total, loser);
        }

        Ok(())
    }

    // === Queries ===

    /// Project the game from one player's perspective.
    ///
    /// The perspective's own dice are always visible; the opponent's show
    /// as `Hidden` markers of matching count until a challenge reveals
    /// them or the game ends. Reading a view never changes state.
    #[must_use]
    pub fn view(&self, perspective: Player) -> ViewSnapshot {
        let reveal_all = self.all_revealed || self.is_game_over();

        let visible_dice = PerPlayer::from_fn(|owner| {
            let pool = &self.pools[owner];
            if reveal_all || owner == perspective {
                pool.faces().map(VisibleDie::Shown).collect()
            } else {
                vec![VisibleDie::Hidden; pool.len()]
            }
        });

        ViewSnapshot {
            current_player: self.current_player,
            current_bid: self.current_bid,
            dice_counts: PerPlayer::from_fn(|player| self.pools[player].len()),
            visible_dice,
            round_active: self.phase == Phase::RoundActive,
            game_over: self.is_game_over(),
            winner: self.winner(),
            all_dice_revealed: self.all_revealed,
            message: self.message.clone(),
            challenge_result: self.challenge_result.clone(),
        }
    }

    /// The phase of play.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The standing bid, if any.
    #[must_use]
    pub fn current_bid(&self) -> Option<Bid> {
        self.current_bid
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// How many dice a player has left.
    #[must_use]
    pub fn dice_count(&self, player: Player) -> usize {
        self.pools[player].len()
    }

    /// The seed this session was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Dice matching `face` across both pools, counting wild ones unless
    /// the face is the wild face itself.
    fn total_matching(&self, face: Face) -> usize {
        self.pools
            .iter()
            .map(|(_, pool)| {
                let mut count = pool.count_face(face);
                if face != WILD_FACE {
                    count += pool.count_face(WILD_FACE);
                }
                count
            })
            .sum()
    }
}

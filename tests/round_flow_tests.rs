//! Full-session flows driven through the public API.
//!
//! These tests play complete rounds and games the way a presentation
//! layer would: start rounds, submit bids and challenges for whichever
//! player the engine says is current, and read results only through
//! snapshots and accessors.

use liars_dice::core::Player;
use liars_dice::dice::{DicePool, Face};
use liars_dice::engine::{ActionError, Bid, Phase, RoundEngine, STARTING_DICE, VisibleDie};

/// Play one round to its challenge with a minimal opening bid, so that
/// exactly one die is lost whichever way the challenge resolves.
fn play_quick_round(game: &mut RoundEngine) {
    let bidder = game.current_player();
    game.place_bid(bidder, 1, Face::Two).unwrap();
    game.challenge(bidder.opponent()).unwrap();
}

/// A fresh session starts clean: full pools, a current player, no bid.
#[test]
fn test_fresh_session_starts_clean() {
    let mut game = RoundEngine::new(42);
    game.start_round().unwrap();

    let current = game.current_player();
    let view = game.view(current);

    assert!(view.round_active);
    assert!(!view.game_over);
    assert_eq!(view.winner, None);
    assert_eq!(view.current_bid, None);
    assert_eq!(view.dice_counts[Player::One], STARTING_DICE);
    assert_eq!(view.dice_counts[Player::Two], STARTING_DICE);
    assert!(!view.all_dice_revealed);
    assert_eq!(view.message, format!("{}'s turn", current));

    // Own dice visible, opponent's concealed.
    assert!(view.visible_dice[current]
        .iter()
        .all(|d| matches!(d, VisibleDie::Shown(_))));
    assert!(view.visible_dice[current.opponent()]
        .iter()
        .all(|d| matches!(d, VisibleDie::Hidden)));
}

/// Bids must climb: quantity first, face as the tiebreaker, no equals.
#[test]
fn test_bid_ladder_enforces_strict_raises() {
    let mut game = RoundEngine::new(42);
    game.start_round().unwrap();

    let first = game.current_player();
    let second = first.opponent();

    game.place_bid(first, 1, Face::Two).unwrap();
    game.place_bid(second, 1, Face::Five).unwrap();
    game.place_bid(first, 2, Face::One).unwrap();

    // Equal and lower bids bounce back with the standing bid attached.
    let standing = Bid::new(2, Face::One);
    let error = game.place_bid(second, 2, Face::One).unwrap_err();
    assert_eq!(error, ActionError::BidTooLow { standing });
    assert!(error.is_illegal_action());
    assert_eq!(
        game.place_bid(second, 1, Face::Six),
        Err(ActionError::BidTooLow { standing })
    );

    // The ladder continues upward.
    game.place_bid(second, 2, Face::Three).unwrap();
    assert_eq!(game.current_bid(), Some(Bid::new(2, Face::Three)));
    assert_eq!(game.current_player(), first);
}

/// A challenge that finds enough dice costs the challenger a die; ones
/// count toward the bid face.
#[test]
fn test_standing_bid_costs_the_challenger() {
    let pool_one = DicePool::from_faces(&[Face::Four, Face::Four, Face::One]);
    let pool_two = DicePool::from_faces(&[Face::Two, Face::Six, Face::Six]);
    let mut game = RoundEngine::from_pools(pool_one, pool_two, Player::One, 3);

    // Two fours plus a wild one make three fours good.
    game.place_bid(Player::One, 3, Face::Four).unwrap();
    game.challenge(Player::Two).unwrap();

    let view = game.view(Player::Two);
    assert_eq!(view.challenge_result, "Challenge failed! Total 3 4s");
    assert_eq!(view.message, "Player 2 loses a die");
    assert_eq!(view.dice_counts[Player::One], 3);
    assert_eq!(view.dice_counts[Player::Two], 2);
    assert!(!view.round_active);
    assert!(view.all_dice_revealed);
}

/// A challenge that finds too few dice costs the bidder a die.
#[test]
fn test_busted_bid_costs_the_bidder() {
    let pool_one = DicePool::from_faces(&[Face::Four, Face::Four, Face::One]);
    let pool_two = DicePool::from_faces(&[Face::Two, Face::Six, Face::Six]);
    let mut game = RoundEngine::from_pools(pool_one, pool_two, Player::One, 3);

    game.place_bid(Player::One, 4, Face::Four).unwrap();
    game.challenge(Player::Two).unwrap();

    let view = game.view(Player::One);
    assert_eq!(view.challenge_result, "Challenge succeeded! Only 3 4s");
    assert_eq!(view.message, "Player 1 loses a die");
    assert_eq!(view.dice_counts[Player::One], 2);
    assert_eq!(view.dice_counts[Player::Two], 3);
}

/// Losing the last die ends the game, and the next round start resets it.
#[test]
fn test_elimination_and_full_reset() {
    let pool_one = DicePool::from_faces(&[Face::Three]);
    let pool_two = DicePool::from_faces(&[Face::Three, Face::Two]);
    let mut game = RoundEngine::from_pools(pool_one, pool_two, Player::One, 3);

    // No sixes anywhere, so the bluff costs Player 1 their last die.
    game.place_bid(Player::One, 6, Face::Six).unwrap();
    game.challenge(Player::Two).unwrap();

    assert_eq!(game.phase(), Phase::GameOver { winner: Player::Two });
    let over = game.view(Player::One);
    assert!(over.game_over);
    assert!(!over.round_active);
    assert_eq!(over.winner, Some(Player::Two));
    assert_eq!(over.message, "Player 2 wins!");
    assert_eq!(over.challenge_result, "");
    assert_eq!(over.dice_counts[Player::One], 0);

    // Starting again rebuilds a full game.
    game.start_round().unwrap();
    let fresh = game.view(game.current_player());
    assert!(fresh.round_active);
    assert_eq!(fresh.winner, None);
    assert_eq!(fresh.dice_counts[Player::One], STARTING_DICE);
    assert_eq!(fresh.dice_counts[Player::Two], STARTING_DICE);
    assert_eq!(fresh.challenge_result, "");
}

/// A session runs to completion: one die is lost per round until a pool
/// empties, and the engine names the surviving player the winner.
#[test]
fn test_game_runs_to_completion() {
    let mut game = RoundEngine::new(1234);
    let mut rounds = 0;
    const MAX_ROUNDS: usize = 100;

    while !game.is_game_over() && rounds < MAX_ROUNDS {
        game.start_round().unwrap();
        let before: usize = Player::ALL.iter().map(|&p| game.dice_count(p)).sum();

        play_quick_round(&mut game);

        let after: usize = Player::ALL.iter().map(|&p| game.dice_count(p)).sum();
        assert_eq!(after, before - 1);
        rounds += 1;
    }

    assert!(game.is_game_over(), "game should end within {} rounds", MAX_ROUNDS);

    let winner = game.winner().unwrap();
    assert_eq!(game.dice_count(winner.opponent()), 0);
    assert!(game.dice_count(winner) >= 1);
    assert_eq!(game.view(winner).message, format!("{} wins!", winner));
}

/// Two sessions with the same seed stay identical through a whole game.
#[test]
fn test_deterministic_replay() {
    let seed = 98765u64;
    let mut first = RoundEngine::new(seed);
    let mut second = RoundEngine::new(seed);

    let mut rounds = 0;
    while !first.is_game_over() && rounds < 100 {
        first.start_round().unwrap();
        second.start_round().unwrap();
        assert_eq!(first.current_player(), second.current_player());

        play_quick_round(&mut first);
        play_quick_round(&mut second);

        assert_eq!(first.view(Player::One), second.view(Player::One));
        assert_eq!(first.view(Player::Two), second.view(Player::Two));
        rounds += 1;
    }

    assert_eq!(first.winner(), second.winner());
    assert!(first.winner().is_some());
}

/// An entropy-seeded session can be replayed from its reported seed.
#[test]
fn test_entropy_session_replayable_from_seed() {
    let mut original = RoundEngine::from_entropy();
    let mut replay = RoundEngine::new(original.seed());

    original.start_round().unwrap();
    replay.start_round().unwrap();

    let bidder = original.current_player();
    original.place_bid(bidder, 2, Face::Five).unwrap();
    replay.place_bid(bidder, 2, Face::Five).unwrap();
    original.challenge(bidder.opponent()).unwrap();
    replay.challenge(bidder.opponent()).unwrap();

    assert_eq!(original.view(Player::One), replay.view(Player::One));
    assert_eq!(original.view(Player::Two), replay.view(Player::Two));
}

/// Both perspectives agree on public facts and differ only in which
/// dice are concealed.
#[test]
fn test_perspectives_agree_on_public_state() {
    let mut game = RoundEngine::new(5);
    game.start_round().unwrap();

    let one = game.view(Player::One);
    let two = game.view(Player::Two);

    assert_eq!(one.current_player, two.current_player);
    assert_eq!(one.current_bid, two.current_bid);
    assert_eq!(one.dice_counts, two.dice_counts);
    assert_eq!(one.message, two.message);

    // Each side sees its own dice and a wall of markers opposite.
    for player in Player::ALL {
        let view = game.view(player);
        assert!(view.visible_dice[player]
            .iter()
            .all(|d| matches!(d, VisibleDie::Shown(_))));

        let concealed = &view.visible_dice[player.opponent()];
        assert_eq!(concealed.len(), game.dice_count(player.opponent()));
        assert!(concealed.iter().all(|d| matches!(d, VisibleDie::Hidden)));
    }
}

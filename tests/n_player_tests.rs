//! N-player verification tests.
//!
//! These tests verify that the round has no hidden two-player assumptions:
//! seat rotation, dealing and observations work from solo play up to
//! large tables.

use the_game::core::{GameConfig, PlayerId};
use the_game::game::{TheGame, TheGameBuilder};
use the_game::nn::{ObservationEncoder, StateEncoder};
use the_game::round::RoundAction;

/// Play first-legal actions until the round ends or `max_steps` pass.
fn play_greedy(game: &mut TheGame, max_steps: usize) -> usize {
    let mut steps = 0;
    while !game.is_over() && steps < max_steps {
        let actions = game.legal_actions().unwrap();
        // Prefer finishing the turn as soon as it is allowed.
        let action = actions
            .iter()
            .copied()
            .find(RoundAction::is_draw)
            .unwrap_or(actions[0]);
        game.step(action).unwrap();
        steps += 1;
    }
    steps
}

/// Opening hands follow the standard table for every player count.
#[test]
fn test_opening_deal_by_player_count() {
    for (player_count, hand_size) in [(1, 8), (2, 7), (3, 6), (4, 6), (5, 6)] {
        let game = TheGameBuilder::new()
            .player_count(player_count)
            .build(42)
            .unwrap();

        assert_eq!(game.players().len(), player_count);
        for (seat, player) in game.players().iter().enumerate() {
            assert_eq!(player.id, PlayerId::new(seat as u8));
            assert_eq!(player.hand.len(), hand_size);
        }
        assert_eq!(game.dealer().remaining(), 98 - player_count * hand_size);
        assert_eq!(game.cards_remaining(), 98);
    }
}

/// Drawing passes the turn to the next seat and wraps after the last one.
#[test]
fn test_seat_rotation() {
    for player_count in 1..=6 {
        let mut game = TheGameBuilder::new()
            .player_count(player_count)
            .build(7)
            .unwrap();

        for turn in 0..(player_count * 2) {
            if game.is_over() {
                break;
            }
            assert_eq!(game.current_player().index(), turn % player_count);

            // Play until the turn may end, then draw.
            loop {
                let actions = game.legal_actions().unwrap();
                if actions.contains(&RoundAction::Draw) {
                    game.step(RoundAction::Draw).unwrap();
                    break;
                }
                game.step(actions[0]).unwrap();
                if game.is_over() {
                    break;
                }
            }
        }
    }
}

/// Small decks deal what they can and still run to completion.
#[test]
fn test_small_deck_underflow() {
    let config = GameConfig::default().with_player_count(5).with_deck_size(20);
    let mut game = TheGameBuilder::from_config(config).build(3).unwrap();

    let dealt: usize = game.players().iter().map(|p| p.hand.len()).sum();
    assert_eq!(dealt, 20);
    assert!(game.dealer().is_empty());
    assert!(game.players()[4].hand.is_empty());

    play_greedy(&mut game, 10_000);
    assert!(game.is_over());
}

/// Every seat gets an observation that hides only its own hand.
#[test]
fn test_observation_per_seat() {
    let mut game = TheGameBuilder::new().player_count(4).build(99).unwrap();
    let encoder = ObservationEncoder::new(98);

    for seat in PlayerId::all(4) {
        let obs = game.state(seat).unwrap();
        assert_eq!(obs.hand.len(), 6);
        assert_eq!(obs.playable_cards.len(), 3 * 6 + game.dealer().remaining());
        for card in &obs.hand {
            assert!(!obs.playable_cards.contains(card));
        }

        let encoded = encoder.encode(&obs);
        assert_eq!(encoded.shape, vec![4, 100]);
        let hand_plane: f32 = encoded.tensor[..100].iter().sum();
        assert_eq!(hand_plane, 6.0);
    }
}

/// Large tables run end to end.
#[test]
fn test_large_table_runs() {
    let mut game = TheGameBuilder::new().player_count(8).build(123).unwrap();
    assert_eq!(game.players().len(), 8);

    let steps = play_greedy(&mut game, 10_000);
    assert!(steps > 0);
    assert!(game.is_over());
    assert_eq!(game.payoffs().len(), 8);
}

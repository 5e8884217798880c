//! Invariants that hold for every reachable position.

use proptest::prelude::*;
use rust_mancala::{Game, GameError, MoveOutcome, Seat, PITS_PER_SIDE, TOTAL_SEEDS};

fn new_game() -> Game {
    let mut game = Game::new();
    game.create_player("Lily").unwrap();
    game.create_player("Lucy").unwrap();
    game
}

fn moves() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((1u8..=2, 1u8..=6), 0..120)
}

proptest! {
    #[test]
    fn seeds_are_conserved(sequence in moves()) {
        let mut game = new_game();
        for (player, pit) in sequence {
            match game.make_move(player, pit) {
                Ok(report) => prop_assert_eq!(report.board.total(), TOTAL_SEEDS),
                Err(err) => prop_assert_eq!(err, GameError::GameAlreadyEnded),
            }
            prop_assert_eq!(game.snapshot().unwrap().total(), TOTAL_SEEDS);
        }
    }

    #[test]
    fn stores_never_shrink(sequence in moves()) {
        let mut game = new_game();
        let mut stores = [0u32; 2];
        for (player, pit) in sequence {
            let Ok(report) = game.make_move(player, pit) else { break };
            for seat in Seat::ALL {
                prop_assert!(report.board.store(seat) >= stores[seat.index()]);
                stores[seat.index()] = report.board.store(seat);
            }
        }
    }

    #[test]
    fn game_over_leaves_only_stores(sequence in moves()) {
        let mut game = new_game();
        for (player, pit) in sequence {
            let Ok(report) = game.make_move(player, pit) else { break };
            if report.outcome == MoveOutcome::GameOver {
                prop_assert!(game.has_ended());
                prop_assert_eq!(report.board.pits(Seat::One), &[0; PITS_PER_SIDE][..]);
                prop_assert_eq!(report.board.pits(Seat::Two), &[0; PITS_PER_SIDE][..]);
                prop_assert_eq!(
                    report.board.store(Seat::One) + report.board.store(Seat::Two),
                    TOTAL_SEEDS
                );
            } else {
                prop_assert!(!game.has_ended());
                let mover = game.player(report.mv.seat).unwrap();
                prop_assert!(mover.is_playing());
            }
        }
    }

    #[test]
    fn rejection_after_end_is_idempotent(sequence in moves(), player in 1u8..=2, pit in 1u8..=6) {
        let mut game = new_game();
        for (p, q) in sequence {
            let _ = game.make_move(p, q);
        }
        if game.has_ended() {
            let before = game.snapshot().unwrap();
            let history = game.history().len();
            prop_assert_eq!(game.make_move(player, pit), Err(GameError::GameAlreadyEnded));
            prop_assert_eq!(game.snapshot().unwrap(), before);
            prop_assert_eq!(game.history().len(), history);
        }
    }

    #[test]
    fn bonus_turn_lands_in_store(sequence in moves()) {
        let mut game = new_game();
        for (player, pit) in sequence {
            let before = match game.snapshot() {
                Ok(board) => board,
                Err(_) => break,
            };
            let Ok(report) = game.make_move(player, pit) else { break };
            if report.outcome == MoveOutcome::BonusTurn {
                let seat = report.mv.seat;
                prop_assert_eq!(report.next_seat(), Some(seat));
                prop_assert!(report.board.store(seat) > before.store(seat));
                prop_assert!(report.capture.is_none());
            }
        }
    }
}

//! Integration tests for whole games played through the public API.
//!
//! A referee board shadows every game and checks that each move a player
//! returns is legal and that the player's own board stays in sync.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use flipside::board::{Board, Move, Side};
use flipside::config::EngineConfig;
use flipside::protocol::notation::format_move;
use flipside::Player;

/// Upper bound on turns in one game: 60 placements plus passes.
const MAX_TURNS: usize = 130;

fn player(side: Side, depth: u32) -> Player {
    Player::with_config(side, EngineConfig { depth }).expect("valid depth")
}

/// Plays two engines against each other and returns the final board and
/// the sequence of moves (None for passes).
fn play_game(black: &mut Player, white: &mut Player) -> (Board, Vec<Option<Move>>) {
    let mut referee = Board::new();
    let mut history = Vec::new();
    let mut last: Option<Move> = None;
    let mut to_move = Side::Black;

    for _ in 0..MAX_TURNS {
        if referee.is_game_over() {
            return (referee, history);
        }

        let current = match to_move {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };
        let mv = current.do_move(last).expect("opponent move accepted");

        assert!(
            referee.is_legal_move(mv, to_move),
            "{:?} played illegal {}\n{}",
            to_move,
            format_move(mv),
            referee
        );
        referee.apply_move(mv, to_move);
        assert_eq!(*current.board(), referee, "player board out of sync");

        history.push(mv);
        last = mv;
        to_move = to_move.other();
    }

    panic!("game did not finish within {} turns", MAX_TURNS);
}

#[test]
fn engines_play_a_full_game() {
    let mut black = player(Side::Black, 3);
    let mut white = player(Side::White, 1);
    let (board, history) = play_game(&mut black, &mut white);

    assert!(board.is_game_over());
    assert!(!board.has_legal_moves(Side::Black));
    assert!(!board.has_legal_moves(Side::White));

    let placements = history.iter().filter(|m| m.is_some()).count() as u32;
    assert_eq!(board.occupied_count(), 4 + placements);
    assert_eq!(board.count(Side::Black) + board.count(Side::White), board.occupied_count());
}

#[test]
fn games_are_deterministic() {
    let (first_board, first_moves) = play_game(&mut player(Side::Black, 2), &mut player(Side::White, 2));
    let (second_board, second_moves) =
        play_game(&mut player(Side::Black, 2), &mut player(Side::White, 2));
    assert_eq!(first_moves, second_moves);
    assert_eq!(first_board, second_board);
}

#[test]
fn engine_survives_random_opponent() {
    for seed in 0..4u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let engine_side = if seed % 2 == 0 { Side::Black } else { Side::White };
        let mut engine = player(engine_side, 2);

        let mut referee = Board::new();
        let mut last: Option<Move> = None;
        let mut to_move = Side::Black;
        let mut turns = 0;

        while !referee.is_game_over() {
            turns += 1;
            assert!(turns <= MAX_TURNS, "seed {} did not finish", seed);

            let mv = if to_move == engine_side {
                let mv = engine.do_move(last).expect("random move accepted");
                assert!(referee.is_legal_move(mv, to_move), "seed {}: illegal {:?}", seed, mv);
                mv
            } else {
                let moves: Vec<Move> = referee.legal_moves(to_move).collect();
                if moves.is_empty() {
                    None
                } else {
                    Some(moves[rng.gen_range(0..moves.len())])
                }
            };

            referee.apply_move(mv, to_move);
            last = mv;
            to_move = to_move.other();
        }

        // The engine only sees the random side's final move on its next turn.
        if to_move == engine_side {
            engine.receive_opponent_move(last).expect("final move accepted");
        }
        assert_eq!(*engine.board(), referee, "seed {}", seed);
    }
}

#[test]
fn engine_passes_when_stuck_and_resumes() {
    // White has no placement; Black can take the last white stone.
    let mut white = player(Side::White, 2);
    white
        .set_board(
            "bw------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        )
        .unwrap();
    assert_eq!(white.choose_move(), None);

    let mut black = player(Side::Black, 2);
    black.set_board(&flipside::protocol::encode_layout(white.board())).unwrap();
    let mv = black.do_move(None).unwrap();
    assert_eq!(mv, Some(Move::new(2, 0)));
    assert!(black.board().is_game_over());
    assert_eq!(black.board().winner(), Some(Side::Black));
}

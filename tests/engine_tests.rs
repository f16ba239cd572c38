//! Engine integration tests: setup invariants, full games, determinism.

use rust_dominoes::{
    DominoEngine, GameError, GameRng, GameStatus, Move, Piece, Seat, Snake, DEAL_SIZE,
};

fn pieces(values: &[(u8, u8)]) -> Vec<Piece> {
    values.iter().map(|&(a, b)| Piece::new(a, b)).collect()
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_setup_partitions_the_full_set() {
    for seed in 0..20 {
        let engine = DominoEngine::new(seed);

        let mut all: Vec<Piece> = engine.stock().to_vec();
        all.extend(engine.hand(Seat::Human).iter());
        all.extend(engine.hand(Seat::Computer).iter());
        all.extend(engine.snake().iter());

        assert_eq!(all.len(), 28, "seed {seed}");
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.matches(*b), "seed {seed}: piece {a} appears twice");
            }
        }
    }
}

#[test]
fn test_setup_sizes() {
    for seed in 0..20 {
        let engine = DominoEngine::new(seed);

        let human = engine.hand(Seat::Human).len();
        let computer = engine.hand(Seat::Computer).len();

        assert_eq!(human + computer, 2 * DEAL_SIZE - 1, "seed {seed}");
        assert_eq!(engine.stock_size(), 14, "seed {seed}");
        assert_eq!(engine.snake().len(), 1, "seed {seed}");
    }
}

#[test]
fn test_setup_opens_with_a_double_absent_from_hands() {
    for seed in 0..20 {
        let engine = DominoEngine::new(seed);

        let opening = engine.snake().iter().next().unwrap();
        assert!(opening.is_double(), "seed {seed}");

        for seat in Seat::both() {
            assert!(
                !engine.hand(seat).iter().any(|p| p.matches(opening)),
                "seed {seed}: opening double still held by {seat}"
            );
        }
    }
}

#[test]
fn test_setup_opening_double_is_the_highest_held() {
    for seed in 0..20 {
        let engine = DominoEngine::new(seed);
        let opening = engine.snake().iter().next().unwrap();

        for seat in Seat::both() {
            for piece in engine.hand(seat).iter() {
                if piece.is_double() {
                    assert!(
                        piece.first() < opening.first(),
                        "seed {seed}: {piece} outranks opening {opening}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_setup_first_move_goes_against_the_double_owner() {
    for seed in 0..50 {
        let engine = DominoEngine::new(seed);

        let human = engine.hand(Seat::Human).len();
        let computer = engine.hand(Seat::Computer).len();
        let expected = if computer > human {
            GameStatus::ComputerMove
        } else {
            GameStatus::PlayerMove
        };

        assert_eq!(engine.status(), expected, "seed {seed}");
    }
}

// =============================================================================
// Moves
// =============================================================================

#[test]
fn test_tail_play_grows_snake_with_matching_orientation() {
    let mut engine = DominoEngine::from_parts(
        [],
        pieces(&[(6, 4), (0, 1)]),
        pieces(&[(2, 2)]),
        Snake::new(Piece::new(4, 4)),
        GameStatus::PlayerMove,
        GameRng::new(0),
    );

    engine.apply_move(Seat::Human, Move::Tail(0)).unwrap();

    assert_eq!(engine.snake().len(), 2);
    assert_eq!(engine.snake().tail_value(), 6);
    assert_eq!(engine.hand(Seat::Human).len(), 1);
}

#[test]
fn test_head_play_grows_snake_with_matching_orientation() {
    let mut engine = DominoEngine::from_parts(
        [],
        pieces(&[(4, 6), (0, 1)]),
        pieces(&[(2, 2)]),
        Snake::new(Piece::new(4, 4)),
        GameStatus::PlayerMove,
        GameRng::new(0),
    );

    engine.apply_move(Seat::Human, Move::Head(0)).unwrap();

    assert_eq!(engine.snake().len(), 2);
    assert_eq!(engine.snake().head_value(), 6);
    assert_eq!(engine.snake().iter().next(), Some(Piece::new(6, 4)));
}

#[test]
fn test_rejected_moves_leave_no_trace() {
    let mut engine = DominoEngine::from_parts(
        pieces(&[(0, 1)]),
        pieces(&[(1, 1), (2, 3)]),
        pieces(&[(2, 2)]),
        Snake::new(Piece::new(4, 4)),
        GameStatus::PlayerMove,
        GameRng::new(0),
    );

    let before_hand: Vec<Piece> = engine.hand(Seat::Human).iter().collect();
    let before_snake: Vec<Piece> = engine.snake().iter().collect();
    let before_stock = engine.stock_size();

    for mv in [Move::Tail(0), Move::Tail(1), Move::Head(0), Move::Head(1)] {
        assert_eq!(
            engine.apply_move(Seat::Human, mv),
            Err(GameError::IllegalMove)
        );
    }

    let after_hand: Vec<Piece> = engine.hand(Seat::Human).iter().collect();
    let after_snake: Vec<Piece> = engine.snake().iter().collect();

    assert_eq!(before_hand, after_hand);
    assert_eq!(before_snake, after_snake);
    assert_eq!(before_stock, engine.stock_size());
}

#[test]
fn test_draw_sequence_exhausts_stock_then_passes() {
    let mut engine = DominoEngine::from_parts(
        pieces(&[(0, 1), (0, 2)]),
        pieces(&[(1, 1)]),
        pieces(&[(2, 2)]),
        Snake::new(Piece::new(4, 4)),
        GameStatus::PlayerMove,
        GameRng::new(0),
    );

    engine.apply_move(Seat::Human, Move::Draw).unwrap();
    engine.apply_move(Seat::Human, Move::Draw).unwrap();
    assert_eq!(engine.stock_size(), 0);
    assert_eq!(engine.hand(Seat::Human).len(), 3);

    // Empty stock: drawing degrades to a pass.
    engine.apply_move(Seat::Human, Move::Draw).unwrap();
    assert_eq!(engine.hand(Seat::Human).len(), 3);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_opening_scenario_illegal_first_command() {
    // Computer owned the [4, 4] double; with equal hands the human moves
    // first, and [1, 1] against tail 4 is rejected without mutation.
    let mut engine = DominoEngine::from_parts(
        [],
        pieces(&[(1, 1), (2, 3)]),
        pieces(&[(4, 4), (2, 2)]),
        Snake::new(Piece::new(4, 4)),
        GameStatus::PlayerMove,
        GameRng::new(0),
    );

    assert_eq!(engine.status().turn_seat(), Some(Seat::Human));

    let err = engine
        .apply_move(Seat::Human, Move::from_command(1))
        .unwrap_err();
    assert_eq!(err, GameError::IllegalMove);
    assert_eq!(engine.hand(Seat::Human).len(), 2);
    assert_eq!(engine.snake().len(), 1);
}

#[test]
fn test_heuristic_scenario_tie_keeps_hand_order() {
    // Hand [1, 2], [3, 3] over snake [2, 2]: both score 4, so the tie
    // keeps hand order and [1, 2] is played (flipped onto tail 2).
    let mut engine = DominoEngine::from_parts(
        [],
        pieces(&[(0, 0)]),
        pieces(&[(1, 2), (3, 3)]),
        Snake::new(Piece::new(2, 2)),
        GameStatus::ComputerMove,
        GameRng::new(0),
    );

    let mv = engine.computer_turn();

    assert_eq!(mv, Move::Tail(0));
    assert_eq!(
        engine.snake().iter().collect::<Vec<_>>(),
        pieces(&[(2, 2), (2, 1)])
    );
    assert_eq!(
        engine.hand(Seat::Computer).iter().collect::<Vec<_>>(),
        pieces(&[(3, 3)])
    );
}

// =============================================================================
// Full games
// =============================================================================

/// Play the first legal move for a seat, scanning tail then head per
/// piece, falling back to a draw.
fn first_legal_move(engine: &mut DominoEngine, seat: Seat) {
    for index in 0..engine.hand(seat).len() {
        if engine.apply_move(seat, Move::Tail(index)).is_ok() {
            return;
        }
        if engine.apply_move(seat, Move::Head(index)).is_ok() {
            return;
        }
    }
    engine
        .apply_move(seat, Move::Draw)
        .expect("draw cannot fail");
}

fn has_legal_play(engine: &DominoEngine, seat: Seat) -> bool {
    let head = engine.snake().head_value();
    let tail = engine.snake().tail_value();
    engine
        .hand(seat)
        .iter()
        .any(|p| p.has(head) || p.has(tail))
}

#[test]
fn test_games_run_to_terminal_or_blocked() {
    for seed in 0..30 {
        let mut engine = DominoEngine::new(seed);
        let mut rounds = 0;

        while !engine.status().is_terminal() && rounds < 500 {
            match engine.status().turn_seat() {
                Some(Seat::Computer) => {
                    engine.computer_turn();
                }
                Some(Seat::Human) => first_legal_move(&mut engine, Seat::Human),
                None => unreachable!(),
            }
            engine.advance_turn();
            engine.check_winner();
            rounds += 1;
        }

        match engine.status() {
            GameStatus::PlayerWin => {
                assert!(engine.hand(Seat::Human).is_empty(), "seed {seed}")
            }
            GameStatus::ComputerWin => {
                assert!(engine.hand(Seat::Computer).is_empty(), "seed {seed}")
            }
            GameStatus::Draw => {
                let head = engine.snake().head_value();
                assert_eq!(head, engine.snake().tail_value(), "seed {seed}");
                assert_eq!(engine.snake().pip_count(head), 8, "seed {seed}");
            }
            // Round cap: only acceptable when the position is permanently
            // blocked (no playable piece anywhere and nothing to draw).
            _ => {
                assert_eq!(engine.stock_size(), 0, "seed {seed}");
                assert!(!has_legal_play(&engine, Seat::Human), "seed {seed}");
                assert!(!has_legal_play(&engine, Seat::Computer), "seed {seed}");
            }
        }
    }
}

#[test]
fn test_snake_chain_invariant_holds_throughout() {
    let mut engine = DominoEngine::new(11);
    let mut rounds = 0;

    while !engine.status().is_terminal() && rounds < 200 {
        match engine.status().turn_seat() {
            Some(Seat::Computer) => {
                engine.computer_turn();
            }
            Some(Seat::Human) => first_legal_move(&mut engine, Seat::Human),
            None => unreachable!(),
        }
        engine.advance_turn();
        engine.check_winner();
        rounds += 1;

        let chain: Vec<Piece> = engine.snake().iter().collect();
        for pair in chain.windows(2) {
            assert_eq!(
                pair[0].second(),
                pair[1].first(),
                "broken chain after round {rounds}"
            );
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = DominoEngine::new(2024);
    let mut b = DominoEngine::new(2024);

    for _ in 0..100 {
        if a.status().is_terminal() {
            break;
        }
        match a.status().turn_seat() {
            Some(Seat::Computer) => {
                let mv_a = a.computer_turn();
                let mv_b = b.computer_turn();
                assert_eq!(mv_a, mv_b);
            }
            Some(Seat::Human) => {
                first_legal_move(&mut a, Seat::Human);
                first_legal_move(&mut b, Seat::Human);
            }
            None => unreachable!(),
        }
        for engine in [&mut a, &mut b] {
            engine.advance_turn();
            engine.check_winner();
        }
    }

    assert_eq!(a.status(), b.status());
    assert_eq!(
        a.hand(Seat::Human).iter().collect::<Vec<_>>(),
        b.hand(Seat::Human).iter().collect::<Vec<_>>()
    );
    assert_eq!(
        a.snake().iter().collect::<Vec<_>>(),
        b.snake().iter().collect::<Vec<_>>()
    );
}

use super::*;

// ==================== POWER MOVE TESTS ====================

#[test]
fn test_super_pawn_king_steps() {
    let mut pos = empty_board();
    place(&mut pos, 4, 4, Piece::pawn(Color::White)); // e4
    place(&mut pos, 3, 5, Piece::pawn(Color::Black)); // f5, capturable
    place(&mut pos, 5, 3, Piece::queen(Color::Black)); // d3, blocks
    place(&mut pos, 5, 4, Piece::pawn(Color::White)); // e3, own pawn blocks

    let ctx = PowerContext {
        selected: sq("e4"),
        toggles: PowerToggles {
            super_pawn: true,
            knight_pawn: false,
        },
        flags: PowerFlags::new(Color::White),
    };
    let moves = pos.moves_from(sq("e4"), Color::White, Some(&ctx));
    let super_moves: Vec<Move> = moves.iter().copied().filter(|m| m.uses_super_pawn()).collect();

    assert_eq!(super_moves.len(), 6, "8 steps minus own pawn and enemy queen");
    assert!(super_moves.iter().any(|m| m.to == sq("f5") && m.is_capture()));
    assert!(!super_moves.iter().any(|m| m.to == sq("d3")));
    assert!(!super_moves.iter().any(|m| m.to == sq("e3")));
    assert!(!moves.iter().any(|m| m.uses_knight_pawn()));
}

#[test]
fn test_knight_pawn_jumps_from_corner() {
    let mut pos = empty_board();
    place(&mut pos, 7, 0, Piece::pawn(Color::White)); // a1

    let ctx = armed(sq("a1"), PowerFlags::new(Color::White));
    let moves = pos.moves_from(sq("a1"), Color::White, Some(&ctx));
    let knight: Vec<Square> = moves
        .iter()
        .filter(|m| m.uses_knight_pawn())
        .map(|m| m.to)
        .collect();

    assert_eq!(knight, vec![sq("b3"), sq("c2")]);
}

#[test]
fn test_powers_only_for_selected_pawn() {
    let pos = Position::default();
    let ctx = armed(sq("e2"), PowerFlags::new(Color::White));

    let moves = pos.legal_moves(Color::White, Some(&ctx));
    for m in moves.iter().filter(|m| m.power.is_some()) {
        assert_eq!(m.from, sq("e2"));
    }
    assert!(moves.iter().any(|m| m.uses_knight_pawn()));
}

#[test]
fn test_powers_need_armed_toggle() {
    let pos = Position::default();
    let ctx = PowerContext {
        selected: sq("e2"),
        toggles: PowerToggles::default(),
        flags: PowerFlags::new(Color::White),
    };

    let moves = pos.legal_moves(Color::White, Some(&ctx));
    assert!(moves.iter().all(|m| m.power.is_none()));
    assert_eq!(moves.len(), 16);
}

#[test]
fn test_powers_never_offered_to_automated_side() {
    let pos = Position::default();
    let ctx = armed(sq("e7"), PowerFlags::new(Color::White));

    let moves = pos.legal_moves(Color::Black, Some(&ctx));
    assert!(moves.iter().all(|m| m.power.is_none()));
}

#[test]
fn test_power_is_consumed_once() {
    let mut state = GameState::default();
    let ctx = armed(sq("e2"), state.powers);

    let jump = state
        .legal_moves(Some(&ctx))
        .into_iter()
        .find(|m| m.uses_knight_pawn())
        .unwrap();
    let report = state.apply_move(jump).unwrap();

    assert_eq!(report.power_consumed, Some(Power::KnightPawn));
    assert!(state.powers.knight_pawn_used);
    assert!(!state.powers.super_pawn_used);

    // black replies, then white asks again with the toggles still armed
    let reply = state.legal_moves(None)[0];
    state.apply_move(reply);

    let white_pawn = Square::all()
        .find(|&s| state.position.piece_at(s).is_pawn_of(Color::White))
        .unwrap();
    let ctx = armed(white_pawn, state.powers);
    let moves = state.legal_moves(Some(&ctx));

    assert!(!moves.iter().any(|m| m.uses_knight_pawn()), "knight pawn is spent");
    assert!(moves.iter().any(|m| m.uses_super_pawn()), "super pawn is still available");
}

#[test]
fn test_consume_reports_first_use_only() {
    let mut flags = PowerFlags::default();
    assert!(flags.consume(Power::SuperPawn));
    assert!(!flags.consume(Power::SuperPawn));
    assert!(flags.is_used(Power::SuperPawn));
    assert!(!flags.is_available(Color::White, Power::SuperPawn));
    assert!(flags.is_available(Color::White, Power::KnightPawn));
    assert!(!flags.is_available(Color::Black, Power::KnightPawn));
}

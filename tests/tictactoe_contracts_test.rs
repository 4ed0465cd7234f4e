//! Tests for move contracts and game invariants.

use rewind_tictactoe::{
    AlternatingTurnInvariant, Contract, FrozenAfterWinInvariant, GameState, Invariant,
    LegalMove, Move, MoveContract, MoveError, NoWinnerYet, Player, PlayersTurn, Position,
    SingleCellStepInvariant, SquareIsEmpty, ViewedStepInBoundsInvariant,
};

fn play(indices: &[usize]) -> GameState {
    indices
        .iter()
        .fold(GameState::new(), |game, &i| game.apply_index(i).unwrap())
}

#[test]
fn test_legal_move_passes_all_preconditions() {
    let game = GameState::new();
    let mov = Move::new(Player::X, Position::Center);

    assert!(NoWinnerYet::check(&game).is_ok());
    assert!(SquareIsEmpty::check(&mov, &game).is_ok());
    assert!(PlayersTurn::check(&mov, &game).is_ok());
    assert!(LegalMove::check(&mov, &game).is_ok());
    assert!(MoveContract::pre(&game, &mov).is_ok());
}

#[test]
fn test_wrong_player_rejected() {
    let game = play(&[4]);
    let mov = Move::new(Player::X, Position::TopLeft);
    assert_eq!(
        MoveContract::pre(&game, &mov),
        Err(MoveError::WrongPlayer(Player::X))
    );
}

#[test]
fn test_occupied_square_rejected() {
    let game = play(&[4]);
    let mov = Move::new(Player::O, Position::Center);
    assert_eq!(
        SquareIsEmpty::check(&mov, &game),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_won_game_rejects_even_empty_square() {
    let game = play(&[0, 4, 1, 8, 2]);
    let mov = Move::new(Player::O, Position::BottomLeft);
    assert_eq!(LegalMove::check(&mov, &game), Err(MoveError::GameOver(Player::X)));
}

#[test]
fn test_postcondition_after_move() {
    let before = play(&[0, 4]);
    let after = before.apply_index(8).unwrap();
    assert!(MoveContract::post(&before, &after).is_ok());

    let rewound = before.jump_to(0).unwrap();
    let after = rewound.apply_index(8).unwrap();
    assert!(MoveContract::post(&rewound, &after).is_ok());
}

#[test]
fn test_postcondition_rejects_non_move_transition() {
    let before = play(&[0, 4]);
    let jumped = before.jump_to(1).unwrap();
    assert!(matches!(
        MoveContract::post(&before, &jumped),
        Err(MoveError::InvariantViolation(_))
    ));
}

#[test]
fn test_invariants_hold_on_real_games() {
    for game in [
        GameState::new(),
        play(&[0, 4, 1, 8, 2]),
        play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]),
        play(&[0, 4, 1]).jump_to(1).unwrap(),
    ] {
        assert!(SingleCellStepInvariant::holds(&game));
        assert!(AlternatingTurnInvariant::holds(&game));
        assert!(FrozenAfterWinInvariant::holds(&game));
        assert!(ViewedStepInBoundsInvariant::holds(&game));
    }
}

#[test]
fn test_invariant_descriptions() {
    assert!(!SingleCellStepInvariant::description().is_empty());
    assert!(!FrozenAfterWinInvariant::description().is_empty());
}

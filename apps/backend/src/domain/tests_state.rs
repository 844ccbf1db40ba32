use time::OffsetDateTime;

use crate::domain::player::Player;
use crate::domain::state::{Game, GameMode, GameStatus};
use crate::errors::domain::{DomainError, ValidationKind};

fn player(id: i64, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        created_at: OffsetDateTime::now_utc(),
    }
}

fn started_game(mode: GameMode, player_count: i64) -> Game {
    let now = OffsetDateTime::now_utc();
    let mut game = Game::new(mode, now);
    for id in 1..=player_count {
        game.add_player(player(id, &format!("Player {id}"))).unwrap();
    }
    game.start(now).unwrap();
    game
}

#[test]
fn start_requires_a_lineup() {
    let now = OffsetDateTime::now_utc();
    let mut game = Game::new(GameMode::Standard301, now);
    let err = game.start(now).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayerCount, _)
    ));
}

#[test]
fn start_moves_to_in_progress_once() {
    let now = OffsetDateTime::now_utc();
    let mut game = Game::new(GameMode::Standard301, now);
    game.add_player(player(1, "Alice")).unwrap();

    game.start(now).unwrap();
    assert_eq!(game.status, GameStatus::InProgress);
    assert!(game.started_at.is_some());

    assert!(game.start(now).is_err());
}

#[test]
fn lineup_is_fixed_after_start() {
    let mut game = started_game(GameMode::Standard301, 2);
    let err = game.add_player(player(9, "Late")).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
    assert_eq!(game.players.len(), 2);
}

#[test]
fn ninth_player_is_rejected() {
    let now = OffsetDateTime::now_utc();
    let mut game = Game::new(GameMode::Training, now);
    for id in 1..=8 {
        game.add_player(player(id, &format!("P{id}"))).unwrap();
    }
    let err = game.add_player(player(9, "P9")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayerCount, _)
    ));
}

#[test]
fn rotation_wraps_and_bumps_the_round_counter() {
    let mut game = started_game(GameMode::Training, 3);
    assert_eq!(game.current_round, 1);

    game.advance_player();
    assert_eq!((game.current_player_index, game.current_round), (1, 1));
    game.advance_player();
    assert_eq!((game.current_player_index, game.current_round), (2, 1));
    game.advance_player();
    assert_eq!((game.current_player_index, game.current_round), (0, 2));
    game.advance_player();
    assert_eq!((game.current_player_index, game.current_round), (1, 2));
}

#[test]
fn single_player_wraps_every_rotation() {
    let mut game = started_game(GameMode::Standard301, 1);
    game.advance_player();
    assert_eq!((game.current_player_index, game.current_round), (0, 2));
    game.advance_player();
    assert_eq!((game.current_player_index, game.current_round), (0, 3));
}

#[test]
fn ensure_open_turn_is_idempotent() {
    let mut game = started_game(GameMode::Standard301, 2);

    let first = game.ensure_open_turn().unwrap();
    let second = game.ensure_open_turn().unwrap();
    assert_eq!(first, second);
    assert_eq!(game.turns.len(), 1);

    let turn = &game.turns[first];
    assert_eq!(turn.player_id, 1);
    assert_eq!(turn.round_number, 1);
    // 301 turns are seeded with the derived score-to-go.
    assert_eq!(turn.remaining_score, Some(301));
}

#[test]
fn training_turns_carry_no_remaining_score() {
    let mut game = started_game(GameMode::Training, 1);
    let idx = game.ensure_open_turn().unwrap();
    assert_eq!(game.turns[idx].remaining_score, None);
}

#[test]
fn remaining_score_is_derived_newest_first() {
    let mut game = started_game(GameMode::Standard301, 1);
    assert_eq!(game.remaining_for(1), 301);

    let idx = game.ensure_open_turn().unwrap();
    game.turns[idx].add_throw(20, 3).unwrap();
    game.turns[idx].remaining_score = Some(241);
    assert_eq!(game.remaining_for(1), 241);
    assert_eq!(game.score_for(1), 241);
}

#[test]
fn training_score_is_the_sum_of_turn_totals() {
    let mut game = started_game(GameMode::Training, 1);

    let idx = game.ensure_open_turn().unwrap();
    for _ in 0..3 {
        game.turns[idx].add_throw(20, 3).unwrap();
    }
    game.advance_player();
    let idx = game.ensure_open_turn().unwrap();
    game.turns[idx].add_throw(5, 2).unwrap();

    assert_eq!(game.score_for(1), 190);
}

#[test]
fn complete_records_winner_and_time() {
    let mut game = started_game(GameMode::Standard301, 2);
    game.complete(1, OffsetDateTime::now_utc());

    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.winner, Some(1));
    assert!(game.completed_at.is_some());
}

#[test]
fn cancel_is_rejected_in_terminal_states() {
    let now = OffsetDateTime::now_utc();
    let mut game = started_game(GameMode::Standard301, 1);

    game.cancel(now).unwrap();
    assert_eq!(game.status, GameStatus::Cancelled);
    assert!(game.winner.is_none());

    let err = game.cancel(now).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::GameNotActive, _)
    ));
}

#[test]
fn cancel_is_legal_from_setup() {
    let now = OffsetDateTime::now_utc();
    let mut game = Game::new(GameMode::Training, now);
    game.cancel(now).unwrap();
    assert_eq!(game.status, GameStatus::Cancelled);
}

#[test]
fn turn_lookups_distinguish_rounds_and_completeness() {
    let mut game = started_game(GameMode::Training, 1);

    let idx = game.ensure_open_turn().unwrap();
    for _ in 0..3 {
        game.turns[idx].add_throw(1, 1).unwrap();
    }
    game.advance_player();
    game.ensure_open_turn().unwrap();

    assert!(game.turn_for_round(1, 1).is_some());
    assert!(game.turn_for_round(1, 2).is_some());
    assert!(game.turn_for_round(1, 3).is_none());

    // The open turn is the round-2 one; the latest matches it.
    let open = game.open_turn_for(1).unwrap();
    assert_eq!(open.round_number, 2);
    let latest = game.latest_turn_for(1).unwrap();
    assert_eq!(latest.round_number, 2);
}

//! Game flow service tests: rulesets, rotation, and lifecycle over the
//! in-memory store.

mod common;

use backend::domain::state::{GameMode, GameStatus};
use backend::errors::ErrorCode;
use backend::services::players::PlayerService;
use common::{flow, names, test_state, throw_seq};

#[tokio::test]
async fn triple_twenties_leave_121_to_go() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice"]))
        .await
        .unwrap();

    let game = throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;

    let turn = &game.turns[0];
    assert_eq!(turn.total_score, 180);
    assert_eq!(turn.remaining_score, Some(121));
    assert!(!turn.is_bust);
    assert!(turn.is_complete());
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.score_for(game.players[0].id), 121);
}

#[tokio::test]
async fn double_out_finishes_on_double_sixteen() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::DoubleOut301, &names(&["Alice"]))
        .await
        .unwrap();
    let alice = game.players[0].id;

    // 301 -> 121 -> 32, then out on D16.
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(20, 3), (19, 1), (10, 1)]).await;
    flow.next_player(game.id).await.unwrap();

    let game = flow.record_throw(game.id, 16, 2).await.unwrap();

    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.winner, Some(alice));
    assert!(game.completed_at.is_some());
    let last = game.latest_turn_for(alice).unwrap();
    assert_eq!(last.remaining_score, Some(0));
    assert!(!last.is_bust);
}

#[tokio::test]
async fn double_out_zero_without_a_double_is_a_bust() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::DoubleOut301, &names(&["Alice"]))
        .await
        .unwrap();
    let alice = game.players[0].id;

    // 301 -> 121 -> 2.
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(20, 3), (19, 3), (2, 1)]).await;
    flow.next_player(game.id).await.unwrap();

    // Single 2 reaches zero arithmetically but is not a double.
    let game = flow.record_throw(game.id, 2, 1).await.unwrap();
    let turn = game.latest_turn_for(alice).unwrap();
    assert!(turn.is_bust);
    assert_eq!(turn.remaining_score, Some(2));
    assert_eq!(game.status, GameStatus::InProgress);

    // D1 closes it out from the reverted score.
    let game = flow.record_throw(game.id, 1, 2).await.unwrap();
    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.winner, Some(alice));
}

#[tokio::test]
async fn overshoot_reverts_the_remaining_score() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice"]))
        .await
        .unwrap();
    let alice = game.players[0].id;

    // 301 -> 121, then 61 -> 40, then T20 overshoots.
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    let game = throw_seq(&flow, game.id, &[(20, 3), (7, 3), (20, 3)]).await;

    let turn = game.latest_turn_for(alice).unwrap();
    assert!(turn.is_bust);
    assert_eq!(turn.remaining_score, Some(40));
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.score_for(alice), 40);
}

#[tokio::test]
async fn a_bust_does_not_end_the_turn_early() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice"]))
        .await
        .unwrap();
    let alice = game.players[0].id;

    // 301 -> 121 -> 1 (third dart of round two busts).
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 1)]).await;
    flow.next_player(game.id).await.unwrap();

    // Round three, 1 to go: the first dart busts, yet the turn stays open.
    let game = flow.record_throw(game.id, 5, 1).await.unwrap();
    let turn = game.latest_turn_for(alice).unwrap();
    assert!(turn.is_bust);
    assert_eq!(turn.remaining_score, Some(1));

    // A later legal dart is recorded and clears the bust flag.
    let game = flow.record_throw(game.id, 0, 0).await.unwrap();
    let turn = game.latest_turn_for(alice).unwrap();
    assert_eq!(turn.throw_count(), 2);
    assert!(!turn.is_bust);
    assert_eq!(turn.remaining_score, Some(1));

    // And the turn can still finish the game.
    let game = flow.record_throw(game.id, 1, 1).await.unwrap();
    assert_eq!(game.status, GameStatus::Completed);
}

#[tokio::test]
async fn rotation_requires_a_complete_turn() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice", "Bob"]))
        .await
        .unwrap();

    throw_seq(&flow, game.id, &[(20, 1), (20, 1)]).await;

    let err = flow.next_player(game.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::TurnNotComplete);
}

#[tokio::test]
async fn a_fourth_throw_requires_rotation_first() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice", "Bob"]))
        .await
        .unwrap();

    throw_seq(&flow, game.id, &[(1, 1), (1, 1), (1, 1)]).await;

    let err = flow.record_throw(game.id, 1, 1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::TurnComplete);
}

#[tokio::test]
async fn player_count_is_bounded() {
    let state = test_state();
    let flow = flow(&state);

    let err = flow
        .create_game(GameMode::Standard301, &[])
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPlayerCount);

    let too_many = names(&["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9"]);
    let err = flow
        .create_game(GameMode::Standard301, &too_many)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPlayerCount);
}

#[tokio::test]
async fn training_totals_accumulate_without_a_finish() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Training, &names(&["Alice", "Bob"]))
        .await
        .unwrap();
    let (alice, bob) = (game.players[0].id, game.players[1].id);

    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(25, 2), (25, 2), (25, 2)]).await;
    let game = flow.next_player(game.id).await.unwrap();

    // Full pass: back to Alice, round two.
    assert_eq!(game.current_player_index, 0);
    assert_eq!(game.current_round, 2);

    let game = throw_seq(&flow, game.id, &[(20, 1)]).await;
    assert_eq!(game.score_for(alice), 200);
    assert_eq!(game.score_for(bob), 150);
    assert_eq!(game.status, GameStatus::InProgress);
    assert!(game.turns.iter().all(|t| t.remaining_score.is_none()));
}

#[tokio::test]
async fn games_share_player_identities() {
    let state = test_state();
    let flow = flow(&state);

    let first = flow
        .create_game(GameMode::Standard301, &names(&["Alice", "Bob"]))
        .await
        .unwrap();
    let second = flow
        .create_game(GameMode::Training, &names(&["Alice"]))
        .await
        .unwrap();

    assert_eq!(first.players[0].id, second.players[0].id);
}

#[tokio::test]
async fn cancelled_games_reject_further_play() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Training, &names(&["Alice"]))
        .await
        .unwrap();

    let game = flow.cancel_game(game.id).await.unwrap();
    assert_eq!(game.status, GameStatus::Cancelled);
    assert!(game.winner.is_none());
    assert!(game.completed_at.is_some());

    let err = flow.record_throw(game.id, 20, 1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotActive);
    let err = flow.next_player(game.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotActive);
    let err = flow.cancel_game(game.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotActive);
}

#[tokio::test]
async fn completed_games_reject_further_play() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice"]))
        .await
        .unwrap();

    // 301 -> 121 -> 1 (third dart busts), then out on a single 1.
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    let game = flow.record_throw(game.id, 1, 1).await.unwrap();
    assert_eq!(game.status, GameStatus::Completed);

    let err = flow.record_throw(game.id, 1, 1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotActive);
}

#[tokio::test]
async fn double_bull_closes_a_double_out_game() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::DoubleOut301, &names(&["Alice"]))
        .await
        .unwrap();

    // 301 -> 121 -> 50, then out on the double bull.
    throw_seq(&flow, game.id, &[(20, 3), (20, 3), (20, 3)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(20, 3), (11, 1), (0, 0)]).await;
    flow.next_player(game.id).await.unwrap();

    let game = flow.record_throw(game.id, 25, 2).await.unwrap();
    assert_eq!(game.status, GameStatus::Completed);
}

#[tokio::test]
async fn deleting_a_game_drops_history_but_keeps_players() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Standard301, &names(&["Alice"]))
        .await
        .unwrap();
    throw_seq(&flow, game.id, &[(20, 1)]).await;

    flow.delete_game(game.id).await.unwrap();

    let err = flow.get_game(game.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    let err = flow.delete_game(game.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let players = PlayerService::new(state.players.clone());
    let all = players.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Alice");
}

#[tokio::test]
async fn list_active_games_excludes_terminal_ones() {
    let state = test_state();
    let flow = flow(&state);

    let running = flow
        .create_game(GameMode::Standard301, &names(&["Alice"]))
        .await
        .unwrap();
    let cancelled = flow
        .create_game(GameMode::Training, &names(&["Bob"]))
        .await
        .unwrap();
    flow.cancel_game(cancelled.id).await.unwrap();

    let active = flow.list_active_games().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, running.id);
}

#[tokio::test]
async fn turn_history_is_ordered_and_complete() {
    let state = test_state();
    let flow = flow(&state);

    let game = flow
        .create_game(GameMode::Training, &names(&["Alice", "Bob"]))
        .await
        .unwrap();

    throw_seq(&flow, game.id, &[(20, 1), (5, 1), (1, 1)]).await;
    flow.next_player(game.id).await.unwrap();
    throw_seq(&flow, game.id, &[(19, 3)]).await;

    let turns = flow.turn_history(game.id).await.unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].player_id, game.players[0].id);
    assert_eq!(turns[0].total_score, 26);
    assert_eq!(turns[1].player_id, game.players[1].id);
    assert_eq!(turns[1].total_score, 57);
}

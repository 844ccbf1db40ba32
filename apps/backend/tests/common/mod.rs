#![allow(dead_code)]

use backend::domain::state::Game;
use backend::services::game_flow::GameFlowService;
use backend::state::app_state::AppState;

pub fn test_state() -> AppState {
    AppState::in_memory()
}

pub fn flow(state: &AppState) -> GameFlowService {
    GameFlowService::from_state(state)
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Record a sequence of throws for the current player, returning the game
/// state after the last one.
pub async fn throw_seq(flow: &GameFlowService, game_id: i64, darts: &[(u8, u8)]) -> Game {
    let mut last = None;
    for (sector, multiplier) in darts {
        last = Some(
            flow.record_throw(game_id, *sector, *multiplier)
                .await
                .expect("throw accepted"),
        );
    }
    last.expect("at least one dart")
}

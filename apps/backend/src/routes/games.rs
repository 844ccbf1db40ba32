//! Game-related HTTP routes.
//!
//! Each endpoint maps 1:1 to a game-flow use case and returns either the full
//! game snapshot or a problem-details error.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::snapshot::{self, TurnPublic};
use crate::domain::state::GameMode;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub mode: GameMode,
    pub player_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordThrowRequest {
    pub sector: u8,
    pub multiplier: u8,
}

/// POST /api/games
async fn create_game(
    state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let game = flow.create_game(body.mode, &body.player_names).await?;
    Ok(HttpResponse::Created().json(snapshot::snapshot(&game)))
}

/// GET /api/games — games currently in progress.
async fn list_active_games(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let games = flow.list_active_games().await?;
    let snapshots: Vec<_> = games.iter().map(snapshot::snapshot).collect();
    Ok(HttpResponse::Ok().json(snapshots))
}

/// GET /api/games/{game_id}
async fn get_game(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let game = flow.get_game(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(snapshot::snapshot(&game)))
}

/// POST /api/games/{game_id}/throw
async fn record_throw(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<RecordThrowRequest>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let game = flow
        .record_throw(path.into_inner(), body.sector, body.multiplier)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot::snapshot(&game)))
}

/// POST /api/games/{game_id}/next-player
async fn next_player(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let game = flow.next_player(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(snapshot::snapshot(&game)))
}

/// POST /api/games/{game_id}/cancel
async fn cancel_game(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let game = flow.cancel_game(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(snapshot::snapshot(&game)))
}

/// GET /api/games/{game_id}/turns — full ordered turn history.
async fn turn_history(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    let game = flow.get_game(path.into_inner()).await?;
    let turns: Vec<TurnPublic> = game
        .turns
        .iter()
        .map(|t| snapshot::turn_public(&game, t))
        .collect();
    Ok(HttpResponse::Ok().json(turns))
}

/// DELETE /api/games/{game_id}
async fn delete_game(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let flow = GameFlowService::from_state(&state);
    flow.delete_game(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_game))
            .route(web::get().to(list_active_games)),
    );
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/{game_id}/throw").route(web::post().to(record_throw)));
    cfg.service(web::resource("/{game_id}/next-player").route(web::post().to(next_player)));
    cfg.service(web::resource("/{game_id}/cancel").route(web::post().to(cancel_game)));
    cfg.service(web::resource("/{game_id}/turns").route(web::get().to(turn_history)));
}

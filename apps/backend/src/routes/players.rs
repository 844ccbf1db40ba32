//! Player identity HTTP routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::player::Player;
use crate::domain::snapshot::PlayerPublic;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

fn player_public(player: &Player) -> PlayerPublic {
    PlayerPublic {
        id: player.id,
        name: player.name.clone(),
    }
}

/// GET /api/players
async fn list_players(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let service = PlayerService::new(state.players.clone());
    let players = service.list().await?;
    let views: Vec<PlayerPublic> = players.iter().map(player_public).collect();
    Ok(HttpResponse::Ok().json(views))
}

/// GET /api/players/{player_id}
async fn get_player(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = PlayerService::new(state.players.clone());
    let player = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(player_public(&player)))
}

/// POST /api/players — 409 when the display name is taken.
async fn create_player(
    state: web::Data<AppState>,
    body: ValidatedJson<CreatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let service = PlayerService::new(state.players.clone());
    let player = service.create(&body.name).await?;
    Ok(HttpResponse::Created().json(player_public(&player)))
}

/// DELETE /api/players/{player_id}
async fn delete_player(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = PlayerService::new(state.players.clone());
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    );
    cfg.service(
        web::resource("/{player_id}")
            .route(web::get().to(get_player))
            .route(web::delete().to(delete_player)),
    );
}

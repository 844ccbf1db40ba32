use actix_web::web;

pub mod games;
pub mod health;
pub mod players;

/// Configure application routes.
///
/// `main.rs` and the integration tests register the same paths, so endpoint
/// behavior can be exercised without the production server wiring.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Players routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));
}

use actix_web::web;

pub mod game;
pub mod health;

/// Register every route. `main.rs` and the integration tests share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game routes: /api/game/**
    cfg.service(web::scope("/api/game").configure(game::configure_routes));
}

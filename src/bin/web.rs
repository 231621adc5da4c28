//! Single binary web server tracking one tournament in memory.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Engine switches: MATCHUP_STRICT_SELECTION, MATCHUP_UNDO_RESTORES_LAST_OPPONENT.

use actix_web::{web::Data, App, HttpResponse, HttpServer};
use matchup_tracker::{api, EngineConfig, Matchmaker};
use std::sync::RwLock;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Avoid 404 in browser tab: favicon not required for app logic.
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);

    let config = EngineConfig::from_env();
    log::info!("Engine config: {:?}", config);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Matchmaker::new(config)));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/favicon.ico", actix_web::web::get().to(favicon))
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}

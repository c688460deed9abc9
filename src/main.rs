use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use models::app_state::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::{
        game::game_routes, health::health_routes, leads::lead_routes, promo::promo_routes,
    },
    config::app_config::CONFIG,
};

mod api;
mod config;
mod db;
mod models;
mod service;
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Initialize state
    let state = AppState::from_connection_string(&CONFIG.database_url)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    // Run migrations
    if let Err(e) = sqlx::migrate!().run(state.get_pool()).await {
        error!("Failed to run migrations: {}", e);
        return;
    }

    // The site frontend is served from another origin
    let cors = CorsLayer::permissive();

    let app = Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/game", game_routes(state.clone()))
        .nest("/promo", promo_routes(state.clone()))
        .merge(lead_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap();

    info!(
        "Server listening on address: {}",
        listener.local_addr().unwrap()
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

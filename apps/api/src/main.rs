use playlist_api::api::{build_router, AppState};
use playlist_api::config::AppConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (.env first, then the process environment)
    let config = AppConfig::from_env().expect("Invalid configuration");

    if let Some(seed) = config.track_sampler_seed {
        tracing::info!(seed, "Using seeded track sampler");
    }

    // In-memory stores; all state is dropped on shutdown
    let state = AppState::in_memory(&config);
    let app = build_router(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}

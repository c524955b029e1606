use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers::{health, playlists, users};
use crate::api::middleware::{handle_panic, log_requests};
use crate::api::state::AppState;

/// Builds the full application router with middleware applied
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // User routes
        .route("/users", post(users::create_user))
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Playlist routes
        .route("/users/:user_id/playlists", post(playlists::create_playlist))
        .route("/playlists", get(playlists::list_playlists))
        .route(
            "/playlists/:playlist_id/tracks",
            put(playlists::update_playlist_tracks),
        )
        .route(
            "/playlists/:playlist_id",
            delete(playlists::delete_playlist),
        )
        // Shared state
        .with_state(state);

    with_middleware(routes)
}

/// Wraps a router in the request logger and panic guard
///
/// The logger sits outside the panic guard so panic-generated 500s are
/// logged like any other response.
pub fn with_middleware(router: Router) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(log_requests))
        .layer(cors)
}

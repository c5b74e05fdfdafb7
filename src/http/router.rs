use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, map, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let map_routes = Router::new().route("/config", get(map::handlers::map_config));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::session::create))
        .route("/:session-id/view", get(sessions::handlers::session::view))
        .route(
            "/:session-id/generate",
            post(sessions::handlers::view_actions::generate),
        )
        .route(
            "/:session-id/select",
            post(sessions::handlers::view_actions::select),
        )
        .route(
            "/:session-id/close-detail",
            post(sessions::handlers::view_actions::close_detail),
        )
        .route(
            "/:session-id/show-all",
            post(sessions::handlers::view_actions::show_all),
        )
        .route(
            "/:session-id/close-all",
            post(sessions::handlers::view_actions::close_all),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/map", map_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}

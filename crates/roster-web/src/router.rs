//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::{error_page_middleware, logging_middleware},
    state::AppState,
};
use axum::{middleware, Router};
use roster_config::ServerConfig;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(user_controller::router())
        .merge(health_controller::router())
        .fallback(user_controller::fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_page_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server_config.request_timeout())),
        )
        .with_state(state);

    info!(
        timeout_secs = server_config.request_timeout_secs,
        "Router created with directory and health endpoints"
    );
    router
}

//! Application state for Axum handlers.

use roster_service::UserService;
use roster_ssr_engine::SsrEngine;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub ssr: Arc<SsrEngine>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, ssr: Arc<SsrEngine>) -> Self {
        Self { user_service, ssr }
    }
}

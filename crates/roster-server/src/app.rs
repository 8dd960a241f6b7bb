//! Application assembly.

use axum::Router;
use roster_config::AppConfig;
use roster_core::{RosterError, RosterResult};
use roster_repository::{create_pool, DatabasePool, SqlUserRepository, UserRepository};
use roster_service::{UserService, UserServiceImpl};
use roster_ssr_engine::SsrEngine;
use roster_web::{create_router, AppState};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A fully wired application: router plus the pool it owns.
pub struct App {
    config: AppConfig,
    router: Router,
    pool: Arc<DatabasePool>,
}

impl App {
    /// Connects to the datastore, creates the schema and builds the router.
    pub async fn build(config: AppConfig) -> RosterResult<Self> {
        let pool = create_pool(&config.database).await?;
        pool.bootstrap_schema().await?;

        let user_repository = Arc::new(SqlUserRepository::new(Arc::clone(&pool)));
        let existing = user_repository.count().await?;
        info!(users = existing, backend = %pool.backend(), "User directory ready");

        let user_service: Arc<dyn UserService> =
            Arc::new(UserServiceImpl::new(user_repository));
        let ssr = Arc::new(SsrEngine::new(config.ssr.clone()));

        let router = create_router(AppState::new(user_service, ssr), &config.server);

        Ok(Self {
            config,
            router,
            pool,
        })
    }

    /// Returns the router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Serves HTTP until `shutdown` completes, then closes the pool.
    pub async fn serve<F>(self, shutdown: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        info!("Listening on http://{}", addr);

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RosterError::internal(format!("HTTP server error: {}", e)));

        self.pool.close().await;
        result
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("addr", &self.config.server.addr())
            .field("pool", &self.pool)
            .finish_non_exhaustive()
    }
}

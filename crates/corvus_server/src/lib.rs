//! # Corvus Server
//!
//! The HTTP surface of the corvus content distribution service: three
//! routes over state prepared by [`bootstrap::prepare_content`].
//!
//! - `GET /health` (open)
//! - `GET /api/content` (authenticated, served from the boot-time cache)
//! - `GET /api/content/file/{*path}` (authenticated, read from disk)

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

mod api;
mod cors;

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod jwt;
pub mod state;

use crate::config::ServiceConfig;
use crate::cors::cors_layer;
use crate::jwt::JwtService;
use crate::state::AppState;
use corvus_fs::{ContentCache, ContentStore};

/// The builder for the corvus server.
#[derive(Clone, Debug, Default)]
pub struct CorvusServer {
    config: ServiceConfig,
}

impl CorvusServer {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Assemble the router over prepared content state.
    ///
    /// The routes and their status codes are the compatibility surface;
    /// everything behind them goes through [`AppState`].
    pub fn build(self, cache: Arc<ContentCache>, store: ContentStore) -> Router {
        if self.config.uses_default_secret() {
            warn!("Default JWT secret used. Set JWT_SECRET to a secure value!");
        }

        let ServiceConfig {
            jwt_secret,
            cors_origins,
            ..
        } = self.config;

        let state = AppState {
            cache,
            store,
            jwt: JwtService::new(&jwt_secret),
        };

        Router::new()
            .route("/health", get(api::health))
            .route("/api/content", get(api::get_content))
            .route("/api/content/file/{*path}", get(api::get_file))
            .layer(cors_layer(&cors_origins))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

pub mod prelude {
    pub use crate::CorvusServer;
    pub use crate::auth::{Identity, authenticate};
    pub use crate::bootstrap::prepare_content;
    pub use crate::config::ServiceConfig;
    pub use crate::jwt::JwtService;
    pub use crate::state::AppState;
}

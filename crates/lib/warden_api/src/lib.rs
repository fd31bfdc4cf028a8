//! # warden_api
//!
//! HTTP API library for Warden.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use warden_core::auth::queries::PgIdentityStore;
use warden_core::auth::{CredentialStore, IdentityStore, SessionIssuer};
use warden_core::profile::queries::PgProfileRepository;
use warden_core::profile::{ProfileRepository, ProfileService};

use crate::config::ApiConfig;
use crate::handlers::{auth, health, profiles};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Login, token verification and identity lookup.
    pub sessions: SessionIssuer,
    /// Profile CRUD.
    pub profiles: ProfileService,
}

impl AppState {
    /// Build state over arbitrary store backends.
    pub fn new(
        config: &ApiConfig,
        identities: Arc<dyn IdentityStore>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        let credentials = CredentialStore::new(identities);
        Self {
            sessions: SessionIssuer::new(
                credentials,
                config.jwt_secret.as_bytes(),
                config.token_lifetime,
            ),
            profiles: ProfileService::new(profiles),
        }
    }

    /// Build state backed by PostgreSQL.
    pub fn postgres(config: &ApiConfig, pool: PgPool) -> Self {
        Self::new(
            config,
            Arc::new(PgIdentityStore::new(pool.clone())),
            Arc::new(PgProfileRepository::new(pool)),
        )
    }
}

/// Run embedded database migrations.
///
/// Delegates to `warden_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    warden_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .route(routes::POST_AUTH_REGISTER, post(auth::register_handler))
        .route(routes::POST_AUTH_LOGIN, post(auth::login_handler))
        .route(
            routes::PROFILES,
            post(profiles::create_profile_handler).get(profiles::list_profiles_handler),
        )
        .route(
            routes::PROFILES_ID,
            get(profiles::get_profile_handler)
                .patch(profiles::update_profile_handler)
                .delete(profiles::delete_profile_handler),
        );

    // Protected routes (require a bearer token)
    let protected = Router::new()
        .route(routes::GET_AUTH_ME, get(auth::me_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

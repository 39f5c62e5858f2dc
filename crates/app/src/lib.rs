//! DevLead application composition root
//!
//! Composes all domain routers into a single application.

pub mod health;
pub mod logs;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use devlead_auth::{AuthBackend, AuthConfig};
use devlead_common::Config;
use devlead_identity::{IdentityConfig, IdentityProvider, IdentityProviderFactory};
use devlead_organizations::{OrganizationRepository, OrganizationStore, OrganizationsState};
use devlead_users::{DirectoryLookup, LoginSettings, UserDirectory, UserRepository, UsersState};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const API_BANNER: &str = "DevLead Companion API";

/// Identity provider settings derived from the application configuration
pub fn identity_config(config: &Config) -> IdentityConfig {
    IdentityConfig {
        provider: config.identity_provider.clone(),
        client_id: config.google_client_id.clone(),
        client_secret: config.google_client_secret.clone(),
        callback_url: config.google_callback_url.clone(),
        timeout: Duration::from_secs(config.identity_timeout_secs),
    }
}

/// Create the main application router backed by Postgres and the configured provider
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let directory: Arc<dyn UserDirectory> = Arc::new(UserRepository::new(pool.clone()));
    let organizations: Arc<dyn OrganizationStore> =
        Arc::new(OrganizationRepository::new(pool.clone()));
    let identity = IdentityProviderFactory::create(identity_config(&config))?;

    compose(&config, pool, directory, organizations, identity)
}

/// Wire domain states and shared middleware around the given collaborators
pub fn compose(
    config: &Config,
    pool: PgPool,
    directory: Arc<dyn UserDirectory>,
    organizations: Arc<dyn OrganizationStore>,
    identity: Arc<dyn IdentityProvider>,
) -> Result<Router, anyhow::Error> {
    let auth = AuthBackend::new(
        AuthConfig::new(config.jwt_secret.clone()),
        Arc::new(DirectoryLookup(directory.clone())),
    );

    let users_state = UsersState {
        directory,
        identity,
        auth: auth.clone(),
        login: LoginSettings {
            frontend_url: config.frontend_url.clone(),
            exchange_timeout: Duration::from_secs(config.identity_timeout_secs),
        },
    };

    let organizations_state = OrganizationsState {
        organizations,
        auth,
    };

    let app = Router::new()
        .route("/", get(|| async { API_BANNER }))
        .route("/hello", get(|| async { "Hello World!" }))
        .merge(health::routes(pool))
        .merge(logs::routes())
        .merge(devlead_users::routes().with_state(users_state))
        .merge(devlead_organizations::routes().with_state(organizations_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(&config.frontend_url)?)
                .into_inner(),
        );

    Ok(app)
}

/// CORS for the single frontend origin, with credentials
pub fn build_cors_layer(frontend_url: &str) -> Result<CorsLayer, anyhow::Error> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
        .with_context(|| format!("FRONTEND_URL is not a valid origin: {}", frontend_url))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::CONTENT_ENCODING,
        ]))
}

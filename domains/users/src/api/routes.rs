//! Route definitions for Users domain API

use axum::{routing::get, Router};

use super::handlers::{auth, users};
use super::middleware::UsersState;

/// Create login and session routes
fn auth_routes() -> Router<UsersState> {
    Router::new()
        .route("/auth/google", get(auth::google_login))
        .route("/auth/google/callback", get(auth::google_callback))
        .route("/auth/profile", get(auth::profile))
}

/// Create user listing routes
fn user_routes() -> Router<UsersState> {
    Router::new().route("/users", get(users::list_users))
}

/// Create all Users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}

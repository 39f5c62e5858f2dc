//! Login and session handlers
//!
//! - GET /auth/google - Redirect to the provider's consent screen
//! - GET /auth/google/callback - Complete login and redirect to the frontend
//! - GET /auth/profile - Current principal

use axum::{
    extract::{Query, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use devlead_auth::{AuthUser, Principal};
use devlead_identity::IdentityError;
use serde::Deserialize;

use crate::api::middleware::UsersState;
use crate::domain::login::{complete_login, LoginError};

/// Query parameters the provider appends to the callback
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// 302 to `location`
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// Start a Google login
///
/// **GET /auth/google**
pub async fn google_login(State(state): State<UsersState>) -> Response {
    found(state.identity.authorization_url())
}

/// Finish a Google login
///
/// **GET /auth/google/callback**
///
/// On success redirects to `{FRONTEND_URL}?token=...`. A provider error,
/// missing code, or failed exchange is 401; a directory outage is 503.
pub async fn google_callback(
    State(state): State<UsersState>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, LoginError> {
    if let Some(error) = params.error {
        return Err(IdentityError::Response(format!("provider returned error: {}", error)).into());
    }

    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| IdentityError::Response("callback without authorization code".to_string()))?;

    let outcome = complete_login(
        state.identity.as_ref(),
        state.directory.as_ref(),
        &state.auth,
        &code,
        state.login.exchange_timeout,
    )
    .await?;

    Ok(found(state.login.redirect_with_token(&outcome.token)))
}

/// Current session principal
///
/// **GET /auth/profile**
pub async fn profile(AuthUser(principal): AuthUser) -> Json<Principal> {
    Json(principal)
}

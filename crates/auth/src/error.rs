//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
///
/// Credential failures keep distinct variants for logging and tests but all
/// render the same 401 body, so callers cannot tell a missing header from
/// an expired or forged token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingAuthorization,

    #[error("invalid authorization header format")]
    InvalidAuthorizationFormat,

    #[error("invalid or expired session token")]
    InvalidToken,

    /// The external OAuth exchange did not complete
    #[error("identity provider exchange failed")]
    ProviderExchangeFailed,

    /// The user directory could not be reached while resolving a login
    #[error("user directory unavailable")]
    DirectoryUnavailable,

    #[error("session token signing failed")]
    TokenIssueFailed,

    #[error("failed to load user")]
    UserLoadError,

    #[error("insufficient privileges")]
    InsufficientPrivileges,
}

impl AuthError {
    /// Whether this error is a rejected credential (as opposed to a server fault)
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            AuthError::MissingAuthorization
                | AuthError::InvalidAuthorizationFormat
                | AuthError::InvalidToken
        )
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // The reason stays in the logs; the body is uniform
        if self.is_credential_failure() {
            tracing::debug!(reason = %self, "Rejected credentials");
        }

        let (status, code, message) = match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required",
            ),
            AuthError::ProviderExchangeFailed => (
                StatusCode::UNAUTHORIZED,
                "LOGIN_FAILED",
                "Login with the identity provider failed",
            ),
            AuthError::DirectoryUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Service temporarily unavailable",
            ),
            AuthError::TokenIssueFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AUTH_ERROR",
                "Authentication failed",
            ),
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::InsufficientPrivileges => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Super admin privileges required",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

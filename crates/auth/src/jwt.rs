//! Session token signing, validation and bearer extraction

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::{AuthConfig, SESSION_TOKEN_TTL_SECS};
use crate::error::AuthError;
use crate::types::Principal;

/// Sign a session token for a resolved user, valid for seven days from `now`
pub(crate) fn issue_session_token(
    user_id: Uuid,
    email: &str,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let iat = now.timestamp().max(0) as u64;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat,
        exp: iat + SESSION_TOKEN_TTL_SECS,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })
}

/// Validate a session token as of `now` and return its principal.
///
/// Expiry is checked here rather than by `jsonwebtoken` so the boundary is
/// exact: a token is expired at `now >= exp`, with no leeway.
pub(crate) fn validate_session_token(
    token: &str,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> Result<Principal, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let claims = decode::<SessionClaims>(token, &decoding_key, &validation)
        .map_err(|e| {
            tracing::debug!(error = %e, "Session token rejected");
            AuthError::InvalidToken
        })?
        .claims;

    let now = now.timestamp();
    if now < 0 || now as u64 >= claims.exp {
        tracing::debug!(exp = claims.exp, "Session token expired");
        return Err(AuthError::InvalidToken);
    }

    let id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::debug!("Session token subject is not a user id");
        AuthError::InvalidToken
    })?;

    Ok(Principal {
        id,
        email: claims.email,
    })
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    // Scheme names are case-insensitive (RFC 7235)
    match header_str.trim().split_once(char::is_whitespace) {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() || token.contains(char::is_whitespace) {
                Err(AuthError::InvalidAuthorizationFormat)
            } else {
                Ok(token)
            }
        }
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}

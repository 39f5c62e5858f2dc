//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! Rejections happen before the handler body runs.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;
use crate::types::{AuthIdentity, Principal};

/// Authenticated caller extractor (stateless JWT verification)
#[derive(Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let principal = backend.verify_session(token)?;

        // Later extractors in the same request can reuse the principal
        parts.extensions.insert(principal.clone());

        Ok(AuthUser(principal))
    }
}

/// Super-admin extractor.
///
/// Like `AuthUser` but re-reads the user record and rejects callers whose
/// current `is_super_admin` flag is false with 403 FORBIDDEN.
#[derive(Debug)]
pub struct SuperAdminUser(pub AuthIdentity);

impl<S> FromRequestParts<S> for SuperAdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let principal = match parts.extensions.get::<Principal>() {
            Some(principal) => principal.clone(),
            None => AuthUser::from_request_parts(parts, state).await?.0,
        };

        let identity = AuthBackend::from_ref(state)
            .load_identity(&principal)
            .await?;

        if !identity.is_super_admin {
            tracing::info!(user_id = %identity.id, "Super admin check failed");
            return Err(AuthError::InsufficientPrivileges);
        }

        Ok(SuperAdminUser(identity))
    }
}

//! Concrete authentication backend
//!
//! Holds the signing configuration and a read-only view of the user
//! directory. Issuance and verification are pure computations; only
//! privilege checks touch the directory.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{issue_session_token, validate_session_token};
use crate::types::{AuthIdentity, Principal};

/// Read model of the user directory needed for authorization decisions
#[async_trait::async_trait]
pub trait UserLookup: Send + Sync {
    /// Load the current privilege view of a user, `None` if the row is gone
    async fn find_auth_identity(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError>;
}

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
    users: Arc<dyn UserLookup>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig, users: Arc<dyn UserLookup>) -> Self {
        Self { config, users }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Sign a session token for a user resolved by the directory
    pub fn issue_session(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        self.issue_session_at(user_id, email, Utc::now())
    }

    pub fn issue_session_at(
        &self,
        user_id: Uuid,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        issue_session_token(user_id, email, &self.config, now)
    }

    /// Verify a bearer token and reconstruct the caller's principal
    pub fn verify_session(&self, token: &str) -> Result<Principal, AuthError> {
        self.verify_session_at(token, Utc::now())
    }

    pub fn verify_session_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Principal, AuthError> {
        validate_session_token(token, &self.config, now)
    }

    /// Re-read the principal's user record for a privilege decision.
    ///
    /// A principal whose user no longer exists is treated as unauthenticated.
    pub async fn load_identity(&self, principal: &Principal) -> Result<AuthIdentity, AuthError> {
        self.users
            .find_auth_identity(principal.id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %principal.id, "Session principal has no user record");
                AuthError::InvalidToken
            })
    }
}

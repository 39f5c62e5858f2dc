//! User directory: trait and implementations

pub mod memory;
pub mod users;

use std::sync::Arc;

use devlead_auth::{AuthError, AuthIdentity, UserLookup};
use devlead_common::RepositoryError;
use uuid::Uuid;

use crate::domain::entities::{NewIdentity, User};

pub use memory::InMemoryUserDirectory;
pub use users::UserRepository;

/// Persistent store of user records, keyed by email
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Create the user for `identity.email` or refresh its profile fields.
    ///
    /// Atomic with respect to concurrent calls for the same email: exactly
    /// one record exists afterwards and no caller sees a duplicate-key error.
    async fn find_or_create(&self, identity: &NewIdentity) -> Result<User, RepositoryError>;

    /// All users, oldest first
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Grant or revoke super-admin. Out-of-band administration only.
    async fn set_super_admin(&self, id: Uuid, is_super_admin: bool)
        -> Result<User, RepositoryError>;

    async fn find_super_admins(&self) -> Result<Vec<User>, RepositoryError>;
}

/// Exposes a `UserDirectory` to the auth extractors for privilege checks
#[derive(Clone)]
pub struct DirectoryLookup(pub Arc<dyn UserDirectory>);

#[async_trait::async_trait]
impl UserLookup for DirectoryLookup {
    async fn find_auth_identity(&self, id: Uuid) -> Result<Option<AuthIdentity>, AuthError> {
        match self.0.find_by_id(id).await {
            Ok(user) => Ok(user.as_ref().map(User::auth_identity)),
            Err(RepositoryError::Connection(e)) => {
                tracing::error!(error = %e, user_id = %id, "User directory unavailable");
                Err(AuthError::DirectoryUnavailable)
            }
            Err(e) => {
                tracing::error!(error = %e, user_id = %id, "Failed to load user");
                Err(AuthError::UserLoadError)
            }
        }
    }
}

//! In-memory user directory
//!
//! Backs local development and router tests without Postgres. Every
//! operation runs under one lock, which makes `find_or_create` a single
//! critical section.

use tokio::sync::Mutex;
use uuid::Uuid;

use devlead_common::RepositoryError;

use super::UserDirectory;
use crate::domain::entities::{NewIdentity, User};

/// Users kept in creation order
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_or_create(&self, identity: &NewIdentity) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;

        if let Some(existing) = users.iter_mut().find(|u| u.email == identity.email) {
            existing.merge_identity(identity);
            return Ok(existing.clone());
        }

        let user = User::from_identity(identity);
        tracing::info!(user_id = %user.id, "Created user");
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.lock().await.clone())
    }

    async fn set_super_admin(
        &self,
        id: Uuid,
        is_super_admin: bool,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.is_super_admin = is_super_admin;
        Ok(user.clone())
    }

    async fn find_super_admins(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users.iter().filter(|u| u.is_super_admin).cloned().collect())
    }
}

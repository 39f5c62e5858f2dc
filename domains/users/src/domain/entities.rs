//! Domain entities for the users domain

use chrono::{DateTime, Utc};
use devlead_auth::{AuthIdentity, Principal};
use devlead_identity::IdentityClaim;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity
///
/// `email` is the natural key and matches case-sensitively as stored.
/// `is_super_admin` is only ever changed out of band, never by login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_super_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh user record from a login identity
    pub fn from_identity(identity: &NewIdentity) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            avatar_url: identity.avatar_url.clone(),
            is_super_admin: false,
            created_at: Utc::now(),
        }
    }

    /// Refresh profile fields from a later login.
    ///
    /// Absent values leave the stored value untouched.
    pub fn merge_identity(&mut self, identity: &NewIdentity) {
        if let Some(name) = &identity.name {
            self.name = Some(name.clone());
        }
        if let Some(avatar_url) = &identity.avatar_url {
            self.avatar_url = Some(avatar_url.clone());
        }
    }

    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            email: self.email.clone(),
        }
    }

    pub fn auth_identity(&self) -> AuthIdentity {
        AuthIdentity {
            id: self.id,
            email: self.email.clone(),
            is_super_admin: self.is_super_admin,
        }
    }
}

/// Identity presented to the directory's upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl NewIdentity {
    /// Build an identity, folding empty or whitespace-only profile values to `None`
    pub fn new(
        email: impl Into<String>,
        name: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: non_blank(name),
            avatar_url: non_blank(avatar_url),
        }
    }
}

impl From<&IdentityClaim> for NewIdentity {
    fn from(claim: &IdentityClaim) -> Self {
        NewIdentity::new(
            claim.email.clone(),
            claim.display_name(),
            claim.picture_url.clone(),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! User listing handlers
//!
//! - GET /users - List all users

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use devlead_auth::AuthUser;
use devlead_common::{Error, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::UsersState;
use crate::domain::entities::User;

/// Response for user operations
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub is_super_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            avatar_url: user.avatar_url,
            is_super_admin: user.is_super_admin,
            created_at: user.created_at,
        }
    }
}

/// List users
///
/// **GET /users**
///
/// Any authenticated caller may list users, oldest first.
pub async fn list_users(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state.directory.find_all().await.map_err(Error::from)?;

    tracing::debug!(user_id = %principal.id, count = users.len(), "Listed users");
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

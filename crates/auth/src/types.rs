//! Identity types produced by the auth layer

use serde::Serialize;
use uuid::Uuid;

/// Authenticated caller reconstructed from a verified session token.
///
/// Carries identity only. Privilege decisions must re-read the user record
/// (see `AuthIdentity`) because the token does not carry admin status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
}

/// Current privilege view of a user, loaded fresh from the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub is_super_admin: bool,
}

//! Session authentication for the DevLead API
//!
//! Issues and verifies stateless HS256 session tokens and provides axum
//! extractors for any domain state implementing `FromRef<S>` for
//! `AuthBackend`. Extractors enforce a single guard ordering:
//! verify-token, attach-principal, authorize, then the handler body.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::{AuthBackend, UserLookup};
pub use claims::SessionClaims;
pub use config::{AuthConfig, SESSION_TOKEN_TTL_SECS};
pub use error::AuthError;
pub use extractors::{AuthUser, SuperAdminUser};
pub use types::{AuthIdentity, Principal};

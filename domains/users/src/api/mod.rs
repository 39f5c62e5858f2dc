//! API layer for the Users domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::{LoginSettings, UsersState};
pub use routes::routes;

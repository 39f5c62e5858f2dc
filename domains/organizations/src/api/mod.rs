//! API layer for the Organizations domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::OrganizationsState;
pub use routes::routes;

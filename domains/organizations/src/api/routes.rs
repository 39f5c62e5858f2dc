//! Route definitions for Organizations domain API

use axum::{routing::get, Router};

use super::handlers::organizations;
use super::middleware::OrganizationsState;

/// Create all Organizations domain API routes
pub fn routes() -> Router<OrganizationsState> {
    Router::new()
        .route(
            "/organizations",
            get(organizations::list_organizations).post(organizations::create_organization),
        )
        .route(
            "/organizations/{id}",
            get(organizations::get_organization)
                .patch(organizations::update_organization)
                .delete(organizations::delete_organization),
        )
}

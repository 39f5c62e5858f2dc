//! Organizations domain: organization records and CRUD routes

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::Organization;
pub use repository::{InMemoryOrganizationStore, OrganizationRepository, OrganizationStore};

pub use api::routes;
pub use api::OrganizationsState;

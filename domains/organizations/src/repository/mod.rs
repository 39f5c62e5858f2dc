//! Organization store: trait and implementations

pub mod memory;
pub mod organizations;

use devlead_common::Result;
use uuid::Uuid;

use crate::domain::entities::Organization;

pub use memory::InMemoryOrganizationStore;
pub use organizations::OrganizationRepository;

pub(crate) const DUPLICATE_NAME: &str = "An organization with this name already exists";

/// Persistent store of organizations, unique by name
#[async_trait::async_trait]
pub trait OrganizationStore: Send + Sync {
    /// All organizations, oldest first
    async fn list(&self) -> Result<Vec<Organization>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Organization>>;

    /// Insert an organization; a taken name is `Error::Conflict`
    async fn create(&self, name: &str, description: Option<&str>) -> Result<Organization>;

    /// Apply a partial update. `None` fields keep their stored value.
    async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Organization>>;

    /// Delete by id, returning whether a row existed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

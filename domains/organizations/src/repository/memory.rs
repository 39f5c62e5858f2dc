//! In-memory organization store for router tests

use chrono::Utc;
use devlead_common::{Error, Result};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{OrganizationStore, DUPLICATE_NAME};
use crate::domain::entities::Organization;

/// Organizations kept in creation order
#[derive(Debug, Default)]
pub struct InMemoryOrganizationStore {
    organizations: Mutex<Vec<Organization>>,
}

impl InMemoryOrganizationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl OrganizationStore for InMemoryOrganizationStore {
    async fn list(&self) -> Result<Vec<Organization>> {
        Ok(self.organizations.lock().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Organization>> {
        let organizations = self.organizations.lock().await;
        Ok(organizations.iter().find(|o| o.id == id).cloned())
    }

    async fn create(&self, name: &str, description: Option<&str>) -> Result<Organization> {
        let mut organizations = self.organizations.lock().await;
        if organizations.iter().any(|o| o.name == name) {
            return Err(Error::Conflict(DUPLICATE_NAME.to_string()));
        }

        let organization = Organization {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.map(String::from),
            created_at: Utc::now(),
        };
        organizations.push(organization.clone());
        Ok(organization)
    }

    async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<Organization>> {
        let mut organizations = self.organizations.lock().await;

        let Some(index) = organizations.iter().position(|o| o.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            if organizations.iter().any(|o| o.id != id && o.name == name) {
                return Err(Error::Conflict(DUPLICATE_NAME.to_string()));
            }
        }

        let organization = &mut organizations[index];
        if let Some(name) = name {
            organization.name = name.to_string();
        }
        if let Some(description) = description {
            organization.description = Some(description.to_string());
        }
        Ok(Some(organization.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut organizations = self.organizations.lock().await;
        let before = organizations.len();
        organizations.retain(|o| o.id != id);
        Ok(organizations.len() < before)
    }
}

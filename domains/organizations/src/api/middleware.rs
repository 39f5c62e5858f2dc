//! Organizations domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use devlead_auth::AuthBackend;

use crate::repository::OrganizationStore;

/// Application state for the Organizations domain
#[derive(Clone)]
pub struct OrganizationsState {
    pub organizations: Arc<dyn OrganizationStore>,
    pub auth: AuthBackend,
}

impl FromRef<OrganizationsState> for AuthBackend {
    fn from_ref(state: &OrganizationsState) -> Self {
        state.auth.clone()
    }
}

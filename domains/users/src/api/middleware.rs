//! Users domain state and auth backend integration

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use devlead_auth::AuthBackend;
use devlead_identity::IdentityProvider;

use crate::repository::UserDirectory;

/// Where a finished login sends the browser, and how long the exchange may take
#[derive(Debug, Clone)]
pub struct LoginSettings {
    pub frontend_url: String,
    pub exchange_timeout: Duration,
}

impl LoginSettings {
    /// Frontend URL carrying the session token as the `token` query parameter
    pub fn redirect_with_token(&self, token: &str) -> String {
        let separator = if self.frontend_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{}{}token={}", self.frontend_url, separator, token)
    }
}

/// Application state for the Users domain
#[derive(Clone)]
pub struct UsersState {
    pub directory: Arc<dyn UserDirectory>,
    pub identity: Arc<dyn IdentityProvider>,
    pub auth: AuthBackend,
    pub login: LoginSettings,
}

impl FromRef<UsersState> for AuthBackend {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}

//! Mock Identity Provider Implementation
//!
//! Maps authorization codes to canned identities. Unknown codes fail the
//! exchange the way a rejected code would at the real provider.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{IdentityClaim, IdentityError, IdentityProvider};

const MOCK_AUTHORIZATION_URL: &str = "http://localhost:3000/auth/google/callback?code=mock";

/// Mock identity provider for testing
#[derive(Debug, Clone, Default)]
pub struct MockIdentityProvider {
    identities: Arc<Mutex<HashMap<String, IdentityClaim>>>,
    delay: Option<Duration>,
    exchanged: Arc<Mutex<Vec<String>>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the identity returned for `code`
    pub fn with_identity(self, code: impl Into<String>, claim: IdentityClaim) -> Self {
        self.register(code, claim);
        self
    }

    /// Delay every exchange, for timeout tests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn register(&self, code: impl Into<String>, claim: IdentityClaim) {
        if let Ok(mut identities) = self.identities.lock() {
            identities.insert(code.into(), claim);
        }
    }

    /// Codes exchanged so far, in order
    pub fn exchanged_codes(&self) -> Vec<String> {
        self.exchanged
            .lock()
            .map(|codes| codes.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn authorization_url(&self) -> String {
        MOCK_AUTHORIZATION_URL.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<IdentityClaim, IdentityError> {
        tracing::info!(code = %code, "Mock identity provider exchanging code");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Ok(mut exchanged) = self.exchanged.lock() {
            exchanged.push(code.to_string());
        }

        let identities = self
            .identities
            .lock()
            .map_err(|_| IdentityError::Response("mock identity table poisoned".to_string()))?;

        identities
            .get(code)
            .cloned()
            .ok_or_else(|| IdentityError::Response(format!("unknown authorization code: {}", code)))
    }
}

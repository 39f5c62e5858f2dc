//! DevLead Identity Provider Adapter
//!
//! Wraps the external OAuth exchange and produces a normalized identity
//! claim:
//! - Google OAuth 2.0 / OpenID Connect for production
//! - Programmable mock provider for tests and local development
//! - Factory selecting the provider from configuration

pub mod google;
pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity provider configuration error: {0}")]
    Configuration(String),

    #[error("Identity provider request error: {0}")]
    Request(String),

    #[error("Identity provider response error: {0}")]
    Response(String),

    #[error("Identity provider returned no email address")]
    MissingEmail,

    #[error("Identity provider exchange timed out after {0:?}")]
    Timeout(Duration),
}

/// Normalized identity returned by a successful exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub picture_url: Option<String>,
}

impl IdentityClaim {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            picture_url: None,
        }
    }

    pub fn with_names(mut self, first: Option<&str>, last: Option<&str>) -> Self {
        self.first_name = first.map(str::to_string);
        self.last_name = last.map(str::to_string);
        self
    }

    pub fn with_picture(mut self, url: impl Into<String>) -> Self {
        self.picture_url = Some(url.into());
        self
    }

    /// `"{first} {last}"` with whichever parts are present, `None` if neither is
    pub fn display_name(&self) -> Option<String> {
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }

    /// Reject claims without a usable email so no partial identity escapes
    pub fn require_email(self) -> Result<Self, IdentityError> {
        if self.email.trim().is_empty() {
            return Err(IdentityError::MissingEmail);
        }
        Ok(self)
    }
}

/// Identity provider configuration
#[derive(Clone)]
pub struct IdentityConfig {
    /// Identity provider (google, mock)
    pub provider: String,
    pub client_id: String,
    pub client_secret: String,
    /// Where the provider sends the browser back with `?code=`
    pub callback_url: String,
    /// Upper bound on the whole code exchange
    pub timeout: Duration,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("provider", &self.provider)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Identity provider trait for different OAuth backends
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Consent URL the browser is redirected to
    fn authorization_url(&self) -> String;

    /// Exchange an authorization code for the user's identity
    async fn exchange_code(&self, code: &str) -> Result<IdentityClaim, IdentityError>;
}

/// Run `exchange_code` with an upper bound on its duration.
///
/// An elapsed timer is an exchange failure like any other.
pub async fn exchange_with_timeout(
    provider: &dyn IdentityProvider,
    code: &str,
    timeout: Duration,
) -> Result<IdentityClaim, IdentityError> {
    match tokio::time::timeout(timeout, provider.exchange_code(code)).await {
        Ok(result) => result.and_then(IdentityClaim::require_email),
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "Identity exchange timed out");
            Err(IdentityError::Timeout(timeout))
        }
    }
}

/// Factory for creating IdentityProvider implementations
///
/// `mock` is only selectable with the `test-support` feature: a factory-made
/// mock has no registered identities, so it cannot log anyone in.
pub struct IdentityProviderFactory;

impl IdentityProviderFactory {
    pub fn create(config: IdentityConfig) -> Result<Arc<dyn IdentityProvider>, IdentityError> {
        match config.provider.as_str() {
            "google" => {
                tracing::info!("Creating Google identity provider");
                Ok(Arc::new(google::GoogleIdentityProvider::new(config)?))
            }
            #[cfg(any(test, feature = "test-support"))]
            "mock" => {
                tracing::info!("Creating mock identity provider");
                Ok(Arc::new(mock::MockIdentityProvider::new()))
            }
            provider => Err(IdentityError::Configuration(format!(
                "Unsupported identity provider: {}. Supported providers: google",
                provider
            ))),
        }
    }
}

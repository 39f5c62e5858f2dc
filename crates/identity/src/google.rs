//! Google OAuth 2.0 / OpenID Connect Implementation
//!
//! Exchanges the authorization code at the token endpoint, then reads the
//! OpenID userinfo document with the returned access token.

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{IdentityClaim, IdentityConfig, IdentityError, IdentityProvider};

const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const SCOPES: &str = "openid email profile";

/// Token endpoint response body
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OpenID Connect userinfo response body
#[derive(Debug, Deserialize)]
struct UserInfo {
    email: Option<String>,
    given_name: Option<String>,
    family_name: Option<String>,
    picture: Option<String>,
}

impl From<UserInfo> for IdentityClaim {
    fn from(info: UserInfo) -> Self {
        IdentityClaim {
            email: info.email.unwrap_or_default(),
            first_name: info.given_name,
            last_name: info.family_name,
            picture_url: info.picture,
        }
    }
}

/// Google identity provider
pub struct GoogleIdentityProvider {
    client: Client,
    config: IdentityConfig,
    token_endpoint: String,
    userinfo_endpoint: String,
}

impl GoogleIdentityProvider {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        Self::with_endpoints(config, TOKEN_ENDPOINT, USERINFO_ENDPOINT)
    }

    /// Point the exchange at other endpoints (local stubs)
    pub fn with_endpoints(
        config: IdentityConfig,
        token_endpoint: impl Into<String>,
        userinfo_endpoint: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        if config.client_id.is_empty() || config.callback_url.is_empty() {
            return Err(IdentityError::Configuration(
                "Google client id and callback URL are required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IdentityError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            token_endpoint: token_endpoint.into(),
            userinfo_endpoint: userinfo_endpoint.into(),
        })
    }

    async fn fetch_access_token(&self, code: &str) -> Result<String, IdentityError> {
        let form = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(&self.token_endpoint)
            .form(&form)
            .send()
            .await
            .map_err(|e| IdentityError::Request(format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(IdentityError::Response(format!(
                "Token endpoint returned {}: {}",
                status, error_body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Response(format!("Failed to parse token response: {}", e)))?;

        Ok(token.access_token)
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<UserInfo, IdentityError> {
        let response = self
            .client
            .get(&self.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Request(format!("Userinfo request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Response(format!(
                "Userinfo endpoint returned {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| IdentityError::Response(format!("Failed to parse userinfo: {}", e)))
    }
}

#[async_trait::async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("response_type", "code"),
            ("scope", SCOPES),
        ];

        match Url::parse_with_params(AUTHORIZATION_ENDPOINT, &params) {
            Ok(url) => url.to_string(),
            Err(_) => AUTHORIZATION_ENDPOINT.to_string(),
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<IdentityClaim, IdentityError> {
        tracing::debug!("Exchanging Google authorization code");

        let access_token = self.fetch_access_token(code).await?;
        let info = self.fetch_user_info(&access_token).await?;

        let claim = IdentityClaim::from(info).require_email()?;
        tracing::info!(email = %claim.email, "Google identity resolved");
        Ok(claim)
    }
}

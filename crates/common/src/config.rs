//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables once at startup
//! and handed to constructors explicitly. Business logic never reads the
//! environment on its own.

use anyhow::Result;
use std::env;
use std::fmt;

/// Identity provider used when `IDENTITY_PROVIDER` is unset
pub const DEFAULT_IDENTITY_PROVIDER: &str = "google";

/// Upper bound on the OAuth code exchange when `IDENTITY_TIMEOUT_SECS` is unset
pub const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,

    /// Frontend base URL; login redirects land here and CORS allows it
    pub frontend_url: String,

    /// Identity provider selection (google; mock needs the identity `test-support` feature)
    pub identity_provider: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_callback_url: String,
    pub identity_timeout_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[redacted]")
            .field("jwt_secret", &"[redacted]")
            .field("frontend_url", &self.frontend_url)
            .field("identity_provider", &self.identity_provider)
            .field("google_client_id", &self.google_client_id)
            .field("google_client_secret", &"[redacted]")
            .field("google_callback_url", &self.google_callback_url)
            .field("identity_timeout_secs", &self.identity_timeout_secs)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} is required", key))
        };

        let identity_provider = lookup("IDENTITY_PROVIDER")
            .unwrap_or_else(|| DEFAULT_IDENTITY_PROVIDER.to_string());

        // Google credentials are only mandatory when Google is the provider
        let google = |key: &str| {
            if identity_provider == "google" {
                required(key)
            } else {
                Ok(lookup(key).unwrap_or_default())
            }
        };

        let config = Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            frontend_url: required("FRONTEND_URL")?,

            google_client_id: google("GOOGLE_CLIENT_ID")?,
            google_client_secret: google("GOOGLE_CLIENT_SECRET")?,
            google_callback_url: google("GOOGLE_CALLBACK_URL")?,
            identity_timeout_secs: lookup("IDENTITY_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_IDENTITY_TIMEOUT_SECS),
            identity_provider,

            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "devlead=debug".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

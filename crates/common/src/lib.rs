//! Shared utilities, configuration, and error handling for DevLead
//!
//! This crate provides common functionality used across the DevLead backend:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors shared by every domain router

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod state;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use state::StateError;

//! API endpoint integration tests
//!
//! Router-level tests for the login flow, session verification, users,
//! organizations and the ambient endpoints.

#![allow(dead_code)]

mod app;
mod auth;
mod common;
mod organizations;
mod users;

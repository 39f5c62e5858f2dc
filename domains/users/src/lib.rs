//! Users domain: user directory, Google login flow, session issuance

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{NewIdentity, User};
pub use domain::login::{complete_login, LoginError, LoginOutcome};
pub use domain::state::{LoginEvent, LoginState, LoginStateMachine};

// Re-export repository types
pub use repository::{DirectoryLookup, InMemoryUserDirectory, UserDirectory, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::{LoginSettings, UsersState};

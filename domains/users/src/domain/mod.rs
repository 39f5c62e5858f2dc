//! Domain layer for users: entities, the login state machine and flow

pub mod entities;
pub mod login;
pub mod state;

//! Login state machine
//!
//! A login attempt moves through:
//! - `Unauthenticated` → `ProviderPending` when the browser is sent to the provider
//! - `ProviderPending` → `IdentityExtracted` once the code exchange yields an identity
//! - `IdentityExtracted` → `UserResolved` once the directory returns a user
//! - `UserResolved` → `Authenticated` once a session token is signed
//!
//! Any failure before `Authenticated` returns the attempt to `Unauthenticated`.
//! Nothing is stored between attempts; the machine lives for one request.

use devlead_common::StateError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    Unauthenticated,
    ProviderPending,
    IdentityExtracted,
    UserResolved,
    Authenticated,
}

impl LoginState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [LoginState] {
        match self {
            Self::Unauthenticated => &[Self::ProviderPending],
            Self::ProviderPending => &[Self::IdentityExtracted, Self::Unauthenticated],
            Self::IdentityExtracted => &[Self::UserResolved, Self::Unauthenticated],
            Self::UserResolved => &[Self::Authenticated, Self::Unauthenticated],
            Self::Authenticated => &[],
        }
    }
}

impl std::fmt::Display for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "unauthenticated"),
            Self::ProviderPending => write!(f, "provider_pending"),
            Self::IdentityExtracted => write!(f, "identity_extracted"),
            Self::UserResolved => write!(f, "user_resolved"),
            Self::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Events that drive a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEvent {
    /// Browser redirected to the provider's consent screen
    RedirectToProvider,
    /// Authorization code exchanged for an identity claim
    IdentityReceived,
    /// Directory upsert returned a user
    UserResolved,
    /// Session token signed
    TokenSigned,
    /// Any step failed
    Fail,
}

impl std::fmt::Display for LoginEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedirectToProvider => write!(f, "redirect_to_provider"),
            Self::IdentityReceived => write!(f, "identity_received"),
            Self::UserResolved => write!(f, "user_resolved"),
            Self::TokenSigned => write!(f, "token_signed"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Login state machine
pub struct LoginStateMachine;

impl LoginStateMachine {
    pub fn transition(current: LoginState, event: LoginEvent) -> Result<LoginState, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (current, event) {
            (LoginState::Unauthenticated, LoginEvent::RedirectToProvider) => {
                LoginState::ProviderPending
            }
            (LoginState::ProviderPending, LoginEvent::IdentityReceived) => {
                LoginState::IdentityExtracted
            }
            (LoginState::IdentityExtracted, LoginEvent::UserResolved) => LoginState::UserResolved,
            (LoginState::UserResolved, LoginEvent::TokenSigned) => LoginState::Authenticated,
            (
                LoginState::ProviderPending
                | LoginState::IdentityExtracted
                | LoginState::UserResolved,
                LoginEvent::Fail,
            ) => LoginState::Unauthenticated,
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: LoginState, event: LoginEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}

//! OAuth callback flow: exchange, resolve user, sign session
//!
//! Fails closed: a failed step returns an error and never produces a token.

use std::time::Duration;

use axum::response::{IntoResponse, Response};
use devlead_auth::{AuthBackend, AuthError};
use devlead_common::{RepositoryError, StateError};
use devlead_identity::{exchange_with_timeout, IdentityError, IdentityProvider};

use crate::domain::entities::{NewIdentity, User};
use crate::domain::state::{LoginEvent, LoginState, LoginStateMachine};
use crate::repository::UserDirectory;

/// A completed login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("identity exchange failed: {0}")]
    Provider(#[from] IdentityError),

    #[error("user directory failed: {0}")]
    Directory(#[from] RepositoryError),

    #[error("session signing failed: {0}")]
    Session(#[from] AuthError),

    #[error("login state: {0}")]
    State(#[from] StateError),
}

impl From<LoginError> for AuthError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Provider(_) => AuthError::ProviderExchangeFailed,
            LoginError::Directory(_) => AuthError::DirectoryUnavailable,
            LoginError::Session(e) => e,
            LoginError::State(_) => AuthError::TokenIssueFailed,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Login failed");
        AuthError::from(self).into_response()
    }
}

/// Tracks one login attempt through the state machine
struct LoginAttempt {
    state: LoginState,
}

impl LoginAttempt {
    /// A callback carrying a code means the browser already visited the provider
    fn at_callback() -> Result<Self, StateError> {
        let state = LoginStateMachine::transition(
            LoginState::Unauthenticated,
            LoginEvent::RedirectToProvider,
        )?;
        Ok(Self { state })
    }

    fn advance(&mut self, event: LoginEvent) -> Result<(), StateError> {
        let next = LoginStateMachine::transition(self.state, event)?;
        tracing::debug!(from = %self.state, to = %next, "Login transition");
        self.state = next;
        Ok(())
    }

    /// Record the failure and hand the error back
    fn fail(&mut self, err: impl Into<LoginError>) -> LoginError {
        if let Err(e) = self.advance(LoginEvent::Fail) {
            return e.into();
        }
        err.into()
    }
}

/// Complete a login from an authorization code.
///
/// Exchange (bounded by `exchange_timeout`) → directory upsert → sign token.
pub async fn complete_login(
    provider: &dyn IdentityProvider,
    directory: &dyn UserDirectory,
    auth: &AuthBackend,
    code: &str,
    exchange_timeout: Duration,
) -> Result<LoginOutcome, LoginError> {
    let mut attempt = LoginAttempt::at_callback()?;

    let claim = match exchange_with_timeout(provider, code, exchange_timeout).await {
        Ok(claim) => claim,
        Err(e) => return Err(attempt.fail(e)),
    };
    attempt.advance(LoginEvent::IdentityReceived)?;

    let user = match directory.find_or_create(&NewIdentity::from(&claim)).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "User directory upsert failed during login");
            return Err(attempt.fail(e));
        }
    };
    attempt.advance(LoginEvent::UserResolved)?;

    let token = match auth.issue_session(user.id, &user.email) {
        Ok(token) => token,
        Err(e) => return Err(attempt.fail(e)),
    };
    attempt.advance(LoginEvent::TokenSigned)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(LoginOutcome { user, token })
}

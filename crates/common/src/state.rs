//! State machine error type shared by domain crates

use thiserror::Error;

/// Errors raised when a state machine refuses an event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Invalid transition: {event} is not allowed in state {from}")]
    InvalidTransition { from: String, event: String },

    #[error("Terminal state: {0} accepts no further events")]
    TerminalState(String),
}

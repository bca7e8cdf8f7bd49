//! Engine error types.
//!
//! All of these indicate a collaborator bug rather than a user mistake: a
//! malformed answer from the user is reported as
//! [`SubmitOutcome::InvalidInput`](crate::quiz_engine::models::SubmitOutcome),
//! never as an error.

use thiserror::Error;

/// Errors raised by the quiz engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// `tables_up_to` outside the supported `1..=12` range.
    #[error("tables_up_to must be within 1..=12, got {0}")]
    TablesOutOfRange(u8),

    /// `draw` was called on a pool with no facts left. The session controller
    /// checks `remaining()` first, so this never escapes under normal use.
    #[error("fact pool exhausted")]
    EmptyPool,

    /// `submit` was called after the session finished. The only valid action
    /// on a completed session is starting a new one.
    #[error("submit called on a completed session")]
    SessionCompleted,
}

impl QuizError {
    /// Returns `true` for state-machine violations (as opposed to bad
    /// configuration values).
    pub fn is_state_violation(&self) -> bool {
        matches!(self, QuizError::EmptyPool | QuizError::SessionCompleted)
    }
}

//! Core quiz engine — fact generation, shuffled draws, grading, and session
//! state.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | Shared types: facts, configuration, submission results |
//! | `pool`    | Fact pool with Fisher-Yates shuffle and cursor-based draws |
//! | `session` | Session controller: state machine, grading, completion |
//! | `error`   | `QuizError` — contract violations, never user mistakes |

pub mod error;
pub mod models;
pub mod pool;
pub mod session;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use error::QuizError;
pub use models::{Fact, QuestionCount, QuizConfig, SubmitOutcome, SubmitResult};
pub use pool::FactPool;
pub use session::QuizSession;

//! # times_table_drill
//!
//! A fully offline, deterministic multiplication-table quiz engine.
//!
//! This library runs one quiz session at a time: it builds the complete set
//! of multiplication facts for a configured table range, shuffles it, deals
//! questions one by one without repeats, grades each typed answer, and tracks
//! the running score until the configured question count is reached. All
//! presentation (layout, input fields, animations) belongs to the calling UI;
//! the engine only exposes state to render.
//!
//! ## How it works
//!
//! 1. Create a [`QuizConfig`] with a table range (`1..=12`), a
//!    [`QuestionCount`] from the fixed menu (5, 10, or 20), and an optional
//!    RNG seed.
//! 2. Call [`QuizSession::start`] — the engine shuffles the fact pool and
//!    draws the first question.
//! 3. For each user submission, call [`QuizSession::submit`] with the raw
//!    input string. The returned [`SubmitResult`] carries the grading
//!    outcome, updated score and progress, and the next question (if any).
//!
//! ## Key behaviors
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same question sequence and display orders — useful for tests.
//! - **Forgiving input**: a submission that is not a well-formed integer is
//!   not consumed; the result signals [`SubmitOutcome::InvalidInput`] and the
//!   session is unchanged, so the user just retries.
//! - **No repeats**: each fact is asked at most once per session, unless the
//!   configured count exceeds the pool size (range 1 holds only 12 facts), in
//!   which case the pool is reshuffled and drawing continues.
//!
//! ## Quick start
//!
//! ```rust
//! use times_table_drill::{QuestionCount, QuizConfig, QuizSession, SubmitOutcome};
//!
//! let mut session = QuizSession::start(QuizConfig {
//!     tables_up_to: 4,
//!     question_count: QuestionCount::Five,
//!     rng_seed: Some(42),
//! })?;
//!
//! println!("{}", session.current().prompt());
//!
//! // Answer every question correctly:
//! while !session.is_finished() {
//!     let answer = session.current().answer().to_string();
//!     let result = session.submit(&answer)?;
//!     assert_eq!(result.outcome, SubmitOutcome::Correct);
//! }
//! assert_eq!(session.score(), 5);
//! # Ok::<(), times_table_drill::QuizError>(())
//! ```

pub mod quiz_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `times_table_drill::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    Fact, FactPool, QuestionCount, QuizConfig, QuizError, QuizSession, SubmitOutcome,
    SubmitResult,
};

//! Session controller: owns all mutable state for one quiz run.
//!
//! A session moves through `Configuring → InProgress → Completed`. The
//! configuring phase belongs to the UI; it ends when [`QuizSession::start`]
//! consumes the chosen [`QuizConfig`], so a session value only ever exists in
//! progress or completed. Dropping the value is how the UI abandons a run
//! early; there is nothing to unwind.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz_engine::error::QuizError;
use crate::quiz_engine::models::{Fact, QuizConfig, SubmitOutcome, SubmitResult};
use crate::quiz_engine::pool::FactPool;

/// One quiz run from the first question to completion.
#[derive(Debug)]
pub struct QuizSession {
    config: QuizConfig,
    rng: StdRng,
    pool: FactPool,
    current: Fact,
    asked: u32,
    score: i32,
    finished: bool,
}

impl QuizSession {
    /// Start a session: seed the RNG, build and shuffle the fact pool, and
    /// draw the first question.
    ///
    /// Fails only on out-of-range configuration, which is a collaborator bug
    /// (the UI constrains the range) and is not recovered from.
    pub fn start(config: QuizConfig) -> Result<Self, QuizError> {
        let mut rng: StdRng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut pool = FactPool::new_shuffled(&mut rng, config.tables_up_to)?;
        let current = pool.draw()?;

        Ok(QuizSession {
            config,
            rng,
            pool,
            current,
            asked: 1,
            score: 0,
            finished: false,
        })
    }

    /// Grade one submitted answer and advance the session.
    ///
    /// Input is parsed as an `i128`, so any integer a user could plausibly
    /// type — negative or absurdly large — is consumed and graded.
    ///
    /// Input that does not parse as an integer is not consumed: the result
    /// carries [`SubmitOutcome::InvalidInput`] and score, progress, and the
    /// current question are all left untouched, so the UI can simply let the
    /// user retry.
    ///
    /// A well-formed answer moves the score by ±1, then either finishes the
    /// session (this was the last configured question) or draws the next
    /// fact. If the pool runs dry before the session is over — the user asked
    /// for more questions than the range holds — a fresh pool for the same
    /// range is shuffled in and drawing continues, so repeats are possible
    /// only in that degenerate case.
    pub fn submit(&mut self, raw_answer: &str) -> Result<SubmitResult, QuizError> {
        if self.finished {
            return Err(QuizError::SessionCompleted);
        }

        let parsed: i128 = match raw_answer.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                return Ok(SubmitResult {
                    outcome: SubmitOutcome::InvalidInput,
                    score: self.score,
                    asked: self.asked,
                    finished: false,
                    next: None,
                });
            }
        };

        let outcome = if parsed == self.current.answer() as i128 {
            self.score += 1;
            SubmitOutcome::Correct
        } else {
            self.score -= 1;
            SubmitOutcome::Incorrect
        };

        let next = if self.asked == self.config.question_count.count() {
            self.finished = true;
            None
        } else {
            if self.pool.remaining() == 0 {
                self.pool = FactPool::new_shuffled(&mut self.rng, self.config.tables_up_to)?;
            }
            self.current = self.pool.draw()?;
            self.asked += 1;
            Some(self.current)
        };

        Ok(SubmitResult {
            outcome,
            score: self.score,
            asked: self.asked,
            finished: self.finished,
            next,
        })
    }

    /// The question currently awaiting an answer (the last one asked, once
    /// the session has finished).
    pub fn current(&self) -> Fact {
        self.current
    }

    /// Running score. May be negative.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// 1-based number of the question currently (or last) asked.
    pub fn asked(&self) -> u32 {
        self.asked
    }

    /// Total questions this session will ask.
    pub fn question_count(&self) -> u32 {
        self.config.question_count.count()
    }

    /// The configured table range.
    pub fn tables_up_to(&self) -> u8 {
        self.config.tables_up_to
    }

    /// `true` once the configured question count has been graded.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Facts left in the current pool (before any refill).
    pub fn remaining_in_pool(&self) -> usize {
        self.pool.remaining()
    }
}

use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fact primitives
// ---------------------------------------------------------------------------

/// One multiplication question: a table number, a multiplier, and a cosmetic
/// display order chosen once at construction.
///
/// The answer is always derived from the operands, never stored, so it cannot
/// drift out of sync with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// The "table" operand, `1..=tables_up_to`.
    pub table: u8,
    /// The multiplier operand, `1..=12`.
    pub multiplier: u8,
    /// Whether `table` is shown before `multiplier` in the rendered prompt.
    /// Purely presentational; grading never consults it.
    pub table_first: bool,
}

impl Fact {
    /// The expected answer, derived on every call.
    pub fn answer(self) -> u32 {
        self.table as u32 * self.multiplier as u32
    }

    /// The two operands in display order.
    pub fn operands(self) -> (u8, u8) {
        if self.table_first {
            (self.table, self.multiplier)
        } else {
            (self.multiplier, self.table)
        }
    }

    /// Render the question prompt, e.g. `"7 × 3 = "`.
    pub fn prompt(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.operands();
        write!(f, "{} × {} = ", first, second)
    }
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// The fixed menu of session lengths offered to the user.
///
/// An enum rather than a raw integer: off-menu counts (including zero) are
/// unrepresentable, so `start` has nothing to validate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCount {
    Five,
    Ten,
    Twenty,
}

impl QuestionCount {
    /// All menu choices in display order.
    pub const ALL: [QuestionCount; 3] =
        [QuestionCount::Five, QuestionCount::Ten, QuestionCount::Twenty];

    /// The number of questions this choice stands for.
    pub fn count(self) -> u32 {
        match self {
            QuestionCount::Five => 5,
            QuestionCount::Ten => 10,
            QuestionCount::Twenty => 20,
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Immutable inputs for one quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Highest multiplication table to include, `1..=12`.
    pub tables_up_to: u8,
    /// How many questions to ask before the session completes.
    pub question_count: QuestionCount,
    /// `Some(seed)` makes the whole session deterministic (question order and
    /// display-order coin flips); `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl QuizConfig {
    /// Config with an entropy seed; set `rng_seed` directly for determinism.
    pub fn new(tables_up_to: u8, question_count: QuestionCount) -> Self {
        QuizConfig { tables_up_to, question_count, rng_seed: None }
    }
}

// ---------------------------------------------------------------------------
// Submission results
// ---------------------------------------------------------------------------

/// How one submission was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Parsed answer matched; score went up by one.
    Correct,
    /// Parsed answer did not match; score went down by one.
    Incorrect,
    /// The input was not a well-formed integer. The submission was not
    /// consumed: score, progress, and the current question are unchanged.
    InvalidInput,
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::Correct => write!(f, "correct"),
            SubmitOutcome::Incorrect => write!(f, "incorrect"),
            SubmitOutcome::InvalidInput => write!(f, "invalid input"),
        }
    }
}

/// Everything the UI needs to react to one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub outcome: SubmitOutcome,
    /// Running score after this submission. May be negative.
    pub score: i32,
    /// 1-based number of the question currently (or last) asked.
    pub asked: u32,
    /// `true` once the configured question count has been graded.
    pub finished: bool,
    /// The next question to display. `None` when the input was invalid (the
    /// current question stays up) or when the session just finished.
    pub next: Option<Fact>,
}

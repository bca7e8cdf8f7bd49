//! End-to-end walkthrough of a quiz session.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `times_table_drill` works end to end:
//!
//! 1. **A full session** — a seeded 5-question run over the 4-times tables,
//!    answering a mix of correct, wrong, and malformed inputs, printing the
//!    grading result after each submission.
//! 2. **The UI adapter** — the JSON payloads a thin quiz client would render,
//!    for both full state refreshes and per-submission feedback.
//! 3. **Pool exhaustion** — a 20-question run over the 1-times table (only 12
//!    facts), showing the reshuffle-and-continue policy in action.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes the whole session deterministic, so this
//!   demo prints the same output every run.
//! - Malformed input is never consumed: score and progress stand still and
//!   the same question is asked again.
//! - The session finishes exactly after the configured number of graded
//!   submissions, and further submits are rejected.

use times_table_drill::{
    ui_adapter, QuestionCount, QuizConfig, QuizError, QuizSession, SubmitOutcome,
};

/// Submit one answer and print the graded result.
fn submit_and_print(session: &mut QuizSession, raw: &str) -> Result<(), QuizError> {
    let prompt = session.current().prompt();
    let result = session.submit(raw)?;
    let marker = match result.outcome {
        SubmitOutcome::Correct => "✓",
        SubmitOutcome::Incorrect => "✗",
        SubmitOutcome::InvalidInput => "?",
    };
    println!(
        "  {prompt}{raw:<8} {marker} {}   score: {:+}   question {}/{}{}",
        result.outcome,
        result.score,
        result.asked,
        session.question_count(),
        if result.finished { "   — finished!" } else { "" },
    );
    Ok(())
}

fn main() -> Result<(), QuizError> {
    // ── A full session ───────────────────────────────────────────────────────
    println!();
    println!("══ 5 questions over the tables up to 4 (seed 42) ══");
    println!();

    let mut session = QuizSession::start(QuizConfig {
        tables_up_to: 4,
        question_count: QuestionCount::Five,
        rng_seed: Some(42),
    })?;

    // Answer the first question wrong, then fumble the keyboard, then recover.
    let wrong = (session.current().answer() + 1).to_string();
    submit_and_print(&mut session, &wrong)?;
    submit_and_print(&mut session, "twelve")?;
    while !session.is_finished() {
        let answer = session.current().answer().to_string();
        submit_and_print(&mut session, &answer)?;
    }
    println!();
    println!("  Final score: {:+}", session.score());

    // Submitting after completion is a contract violation, not a user error.
    match session.submit("1") {
        Err(QuizError::SessionCompleted) => println!("  Further submits: rejected, as expected"),
        other => println!("  Unexpected: {other:?}"),
    }

    // ── The UI adapter ───────────────────────────────────────────────────────
    println!();
    println!("══ UI adapter payloads (seed 7) ══");
    println!();

    let mut session = QuizSession::start(QuizConfig {
        tables_up_to: 6,
        question_count: QuestionCount::Ten,
        rng_seed: Some(7),
    })?;

    println!("  state after start:");
    println!("    {}", ui_adapter::to_client_state(&session));

    let answer = session.current().answer().to_string();
    let result = session.submit(&answer)?;
    println!("  result after one correct submission:");
    println!("    {}", ui_adapter::to_client_result(&result));

    // ── Pool exhaustion ──────────────────────────────────────────────────────
    // Range 1 holds only twelve facts; asking for twenty forces a reshuffle
    // mid-session. Repeats appear after question 12 — and nothing crashes.
    println!();
    println!("══ 20 questions over the 1-times table (seed 9) ══");
    println!();

    let mut session = QuizSession::start(QuizConfig {
        tables_up_to: 1,
        question_count: QuestionCount::Twenty,
        rng_seed: Some(9),
    })?;

    let mut prompts = vec![session.current().prompt()];
    while !session.is_finished() {
        let answer = session.current().answer().to_string();
        if let Some(next) = session.submit(&answer)?.next {
            prompts.push(next.prompt());
        }
    }
    println!("  {} questions asked, score {:+}", prompts.len(), session.score());
    println!("  first twelve (one full pool): {}", prompts[..12].join("· "));
    println!("  after the reshuffle:          {}", prompts[12..].join("· "));

    Ok(())
}

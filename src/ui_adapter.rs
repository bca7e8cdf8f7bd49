use serde_json::{json, Value};
use crate::quiz_engine::{Fact, QuizSession, SubmitOutcome, SubmitResult};

/// Build the question block a client renders: prompt text plus the operands
/// in display order, so native UIs can lay the pieces out themselves.
fn question_block(fact: Fact) -> Value {
    let (first, second) = fact.operands();
    json!({
        "prompt": fact.prompt(),
        "first_operand": first,
        "second_operand": second,
    })
}

/// Map a submission outcome to the tag the client switches on.
fn outcome_tag(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Correct => "correct",
        SubmitOutcome::Incorrect => "incorrect",
        SubmitOutcome::InvalidInput => "invalid_input",
    }
}

/// Map the current session state to the JSON a quiz client renders.
///
/// Emitted after `start` and whenever the client wants a full refresh. The
/// progress label matches the original screen's `"Question 3/10"` caption.
pub fn to_client_state(session: &QuizSession) -> Value {
    json!({
        "question": question_block(session.current()),
        "score": session.score(),
        "progress": {
            "asked": session.asked(),
            "total": session.question_count(),
            "label": format!("Question {}/{}", session.asked(), session.question_count()),
        },
        "tables_up_to": session.tables_up_to(),
        "finished": session.is_finished(),
    })
}

/// Map one submission result to the JSON driving transient client feedback
/// (score-change indicators, the end-of-session notice).
///
/// `next_question` is `null` when the input was invalid or the session just
/// finished; the client keeps the current question on screen in both cases.
pub fn to_client_result(result: &SubmitResult) -> Value {
    json!({
        "outcome": outcome_tag(result.outcome),
        "score": result.score,
        "asked": result.asked,
        "finished": result.finished,
        "next_question": result.next.map(question_block),
    })
}

//! Answer validation, run before any scoring.

use careerfit_core::{Answer, AnswerSet, Question, ValidationError};

/// Check that `answers` holds exactly one in-range answer for every
/// question in the catalog and nothing else.
pub fn validate_answers(answers: &AnswerSet, questions: &[Question]) -> Result<(), ValidationError> {
    if let Some(bad) = answers.iter().find(|a| !a.in_range()) {
        return Err(ValidationError::OutOfRange {
            question_id: bad.question_id,
            value: bad.value,
        });
    }

    if let Some(unknown) = answers
        .iter()
        .find(|a| !questions.iter().any(|q| q.id == a.question_id))
    {
        return Err(ValidationError::UnknownQuestion(unknown.question_id));
    }

    if let Some(missing) = questions.iter().find(|q| !answers.contains(q.id)) {
        return Err(ValidationError::MissingQuestion(missing.id));
    }

    if answers.len() != questions.len() {
        return Err(ValidationError::WrongCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    Ok(())
}

/// Validate a raw answer list as submitted, then collapse it into a set.
///
/// The list must have exactly one entry per question; a duplicate entry
/// therefore leaves another question unanswered and is rejected.
pub fn validate_answer_list(
    answers: &[Answer],
    questions: &[Question],
) -> Result<AnswerSet, ValidationError> {
    if answers.len() != questions.len() {
        return Err(ValidationError::WrongCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }
    let set: AnswerSet = answers.iter().copied().collect();
    validate_answers(&set, questions)?;
    Ok(set)
}

//! Trait aggregation: answers → six 0–100 trait scores.
//!
//! Answers are grouped by the `trait` tag of the question they reference,
//! so group membership follows the catalog rather than fixed id ranges.
//! Each group's mean (on the 1–4 scale) is converted to a percentage with
//! `round(min(100, mean / 4 * 100))`.

use careerfit_config::EmptyGroupPolicy;
use careerfit_core::{AnswerSet, MAX_ANSWER_VALUE, ProcessingError, Question, TraitKey, TraitScores};
use tracing::trace;

/// Running sum and count for one trait group.
#[derive(Debug, Default, Clone, Copy)]
struct Group {
    sum: u32,
    count: u32,
}

/// Aggregate a complete or partial answer set into trait scores.
///
/// Answers to question ids the catalog does not know are ignored. A trait
/// with no answers at all is handled according to `policy`.
pub fn aggregate_traits(
    answers: &AnswerSet,
    questions: &[Question],
    policy: EmptyGroupPolicy,
) -> Result<TraitScores, ProcessingError> {
    let mut groups = [Group::default(); 6];

    for answer in answers.iter() {
        let Some(question) = questions.iter().find(|q| q.id == answer.question_id) else {
            trace!(question_id = answer.question_id, "Ignoring answer to unknown question");
            continue;
        };
        let group = &mut groups[question.trait_key.index()];
        group.sum += u32::from(answer.value);
        group.count += 1;
    }

    let mut values = [0u32; 6];
    for key in TraitKey::ALL {
        let group = groups[key.index()];
        values[key.index()] = match (group.count, policy) {
            (0, EmptyGroupPolicy::Reject) => return Err(ProcessingError::EmptyTraitGroup(key)),
            (0, EmptyGroupPolicy::Zero) => 0,
            _ => percentage(group.sum, group.count),
        };
    }

    Ok(TraitScores::new(values))
}

/// `round(min(100, (sum / count) / 4 * 100))` computed in integers.
fn percentage(sum: u32, count: u32) -> u32 {
    let numerator = sum * 100;
    let denominator = count * u32::from(MAX_ANSWER_VALUE);
    // Round half up on the exact quotient
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    rounded.min(100)
}

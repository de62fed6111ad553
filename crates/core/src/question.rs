//! Questions, the Likert answer scale, and the per-session answer set.

use crate::trait_scores::TraitKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest value on the answer scale ("Strongly Disagree").
pub const MIN_ANSWER_VALUE: u8 = 1;
/// Highest value on the answer scale ("Strongly Agree").
pub const MAX_ANSWER_VALUE: u8 = 4;

/// A single assessment statement, tagged with the trait it measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(rename = "trait")]
    pub trait_key: TraitKey,
}

/// One point on the answer scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

/// A user's response to one question.
///
/// The value is not range-checked here; answer sets are validated as a
/// whole before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub value: u8,
}

impl Answer {
    pub fn new(question_id: u32, value: u8) -> Self {
        Self { question_id, value }
    }

    pub fn in_range(&self) -> bool {
        (MIN_ANSWER_VALUE..=MAX_ANSWER_VALUE).contains(&self.value)
    }
}

/// Answers keyed by question id. Re-answering a question replaces the
/// previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Answer>", into = "Vec<Answer>")]
pub struct AnswerSet {
    answers: BTreeMap<u32, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced (if any).
    pub fn record(&mut self, answer: Answer) -> Option<u8> {
        self.answers.insert(answer.question_id, answer.value)
    }

    pub fn get(&self, question_id: u32) -> Option<u8> {
        self.answers.get(&question_id).copied()
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.answers.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answers in ascending question-id order.
    pub fn iter(&self) -> impl Iterator<Item = Answer> + '_ {
        self.answers.iter().map(|(&id, &v)| Answer::new(id, v))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            set.record(answer);
        }
        set
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_answer_replaces_previous_value() {
        let mut set = AnswerSet::new();
        assert_eq!(set.record(Answer::new(3, 2)), None);
        assert_eq!(set.record(Answer::new(3, 4)), Some(2));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(3), Some(4));
    }

    #[test]
    fn collect_keeps_last_duplicate() {
        let set: AnswerSet = vec![Answer::new(0, 1), Answer::new(0, 3), Answer::new(1, 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(3));
    }

    #[test]
    fn answer_range_check() {
        assert!(Answer::new(0, 1).in_range());
        assert!(Answer::new(0, 4).in_range());
        assert!(!Answer::new(0, 0).in_range());
        assert!(!Answer::new(0, 5).in_range());
    }

    #[test]
    fn answer_set_serializes_as_list() {
        let set: AnswerSet = vec![Answer::new(1, 2), Answer::new(0, 4)].into();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"questionId":0,"value":4},{"questionId":1,"value":2}]"#);
    }

    #[test]
    fn question_uses_trait_field_name() {
        let q = Question {
            id: 9,
            text: "Imagining new possibilities comes naturally to me.".into(),
            trait_key: TraitKey::Creativity,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["trait"], "creativity");
    }
}

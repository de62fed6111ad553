//! Assessment results and the processor trait that produces them.

use crate::error::Result;
use crate::question::AnswerSet;
use crate::trait_scores::TraitScores;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one completed assessment pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub user_traits: TraitScores,
    /// Always in `0..=100`.
    pub compatibility_score: u8,
    pub completed_at: DateTime<Utc>,
}

/// Turns a submitted answer set into a result against a career's
/// requirement vector.
///
/// The session state machine awaits this while it sits on the loading
/// screen. Implementations must reject invalid answer sets with
/// [`crate::Error::Validation`] rather than scoring a partial set.
#[async_trait]
pub trait AssessmentProcessor: Send + Sync {
    fn name(&self) -> &str;

    async fn process(
        &self,
        answers: &AnswerSet,
        required_traits: &TraitScores,
    ) -> Result<AssessmentResult>;
}

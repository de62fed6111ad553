//! Assessment orchestrator: validate → aggregate → score.

use crate::aggregate::aggregate_traits;
use crate::compatibility::compatibility_score;
use crate::validate::validate_answers;
use async_trait::async_trait;
use careerfit_config::{EmptyGroupPolicy, ScoringConfig};
use careerfit_core::{
    AnswerSet, AssessmentProcessor, AssessmentResult, Catalog, ProcessingError, Result,
    TraitScores,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The production [`AssessmentProcessor`], backed by a catalog.
pub struct Orchestrator {
    catalog: Arc<dyn Catalog>,
    policy: EmptyGroupPolicy,
    delay: Duration,
}

impl Orchestrator {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self {
            catalog,
            policy: EmptyGroupPolicy::default(),
            delay: Duration::ZERO,
        }
    }

    pub fn from_config(catalog: Arc<dyn Catalog>, config: &ScoringConfig) -> Self {
        Self::new(catalog)
            .with_policy(config.empty_group_policy)
            .with_delay(Duration::from_millis(config.processing_delay_ms))
    }

    pub fn with_policy(mut self, policy: EmptyGroupPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Simulated processing time before a result resolves.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn catalog(&self) -> &Arc<dyn Catalog> {
        &self.catalog
    }

    /// Score `answers` against a career looked up by id.
    pub async fn process_for_career(
        &self,
        answers: &AnswerSet,
        career_id: &str,
    ) -> Result<AssessmentResult> {
        let required = self
            .catalog
            .get_career_by_id(career_id)
            .map(|c| c.required_traits)
            .ok_or_else(|| ProcessingError::CareerNotFound(career_id.to_string()))?;
        self.process(answers, &required).await
    }
}

#[async_trait]
impl AssessmentProcessor for Orchestrator {
    fn name(&self) -> &str {
        "orchestrator"
    }

    async fn process(
        &self,
        answers: &AnswerSet,
        required_traits: &TraitScores,
    ) -> Result<AssessmentResult> {
        if let Err(e) = validate_answers(answers, self.catalog.questions()) {
            warn!(error = %e, answers = answers.len(), "Rejected answer set");
            return Err(e.into());
        }

        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "Simulating processing time");
            tokio::time::sleep(self.delay).await;
        }

        let user_traits = aggregate_traits(answers, self.catalog.questions(), self.policy)?;
        let compatibility_score = compatibility_score(&user_traits, required_traits);

        info!(score = compatibility_score, "Assessment processed");

        Ok(AssessmentResult {
            user_traits,
            compatibility_score,
            completed_at: Utc::now(),
        })
    }
}

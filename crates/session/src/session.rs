//! The mutable session container.

use crate::report::ReportSnapshot;
use crate::screen::{Action, Screen};
use crate::state::{SessionState, TransitionError};
use careerfit_core::{
    Answer, AnswerSet, AssessmentProcessor, AssessmentResult, Career, Domain, DomainEvent,
    EventBus,
};
use careerfit_scoring::FitBand;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The session is on the result screen.
    Completed(AssessmentResult),
    /// The session is back on the questions with `last_error` set.
    Failed(String),
}

/// A single user's run through the assessment.
///
/// Holds the current [`SessionState`] and applies transitions one at a
/// time. `submit_answers` borrows the session mutably for the whole
/// processing call, so nothing can interleave while it sits on `loading`.
pub struct Session {
    id: String,
    state: SessionState,
    processor: Arc<dyn AssessmentProcessor>,
    events: Option<Arc<EventBus>>,
}

impl Session {
    pub fn new(processor: Arc<dyn AssessmentProcessor>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            state: SessionState::new(),
            processor,
            events: None,
        }
    }

    /// Publish screen changes and results on `bus`.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.current_screen
    }

    fn apply(
        &mut self,
        action: Action,
        transition: impl FnOnce(&SessionState) -> Result<SessionState, TransitionError>,
    ) -> Result<&SessionState, TransitionError> {
        let next = transition(&self.state)?;
        let from = self.state.current_screen;
        let to = next.current_screen;
        self.state = next;

        debug!(session_id = %self.id, %from, %to, %action, "Session transition");
        if from != to {
            self.publish(DomainEvent::ScreenChanged {
                session_id: self.id.clone(),
                from: from.to_string(),
                to: to.to_string(),
                action: action.to_string(),
                timestamp: Utc::now(),
            });
        }
        Ok(&self.state)
    }

    fn publish(&self, event: DomainEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    pub fn start(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(Action::Start, SessionState::start)
    }

    pub fn select_domain(&mut self, domain: Domain) -> Result<&SessionState, TransitionError> {
        self.apply(Action::SelectDomain, |s| s.select_domain(domain))
    }

    pub fn select_career(&mut self, career: Career) -> Result<&SessionState, TransitionError> {
        self.apply(Action::SelectCareer, |s| s.select_career(career))
    }

    pub fn begin(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(Action::Begin, SessionState::begin)
    }

    pub fn answer(&mut self, answer: Answer) -> Result<&SessionState, TransitionError> {
        self.apply(Action::Answer, |s| s.answer(answer))
    }

    pub fn view_insights(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(Action::ViewInsights, SessionState::view_insights)
    }

    pub fn next(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(Action::Next, SessionState::next)
    }

    pub fn back(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(Action::Back, SessionState::back)
    }

    pub fn retake_for_career(&mut self) -> Result<&SessionState, TransitionError> {
        self.apply(Action::RetakeForCareer, SessionState::retake_for_career)
    }

    pub fn reset(&mut self) -> &SessionState {
        let from = self.state.current_screen;
        self.state = self.state.reset();
        debug!(session_id = %self.id, %from, "Session reset");
        if from != Screen::Welcome {
            self.publish(DomainEvent::ScreenChanged {
                session_id: self.id.clone(),
                from: from.to_string(),
                to: Screen::Welcome.to_string(),
                action: Action::Reset.to_string(),
                timestamp: Utc::now(),
            });
        }
        self.publish(DomainEvent::SessionReset {
            session_id: self.id.clone(),
            timestamp: Utc::now(),
        });
        &self.state
    }

    /// Submit the answers recorded so far.
    pub async fn submit_recorded(&mut self) -> Result<SubmitOutcome, TransitionError> {
        let answers = self.state.answers.clone();
        self.submit_answers(answers).await
    }

    /// Move to `loading`, run the processor against the selected career,
    /// then land on `result` or back on `questions`.
    ///
    /// Processing failures are not errors of the transition: they are
    /// reported through [`SubmitOutcome::Failed`] and `last_error`.
    pub async fn submit_answers(
        &mut self,
        answers: AnswerSet,
    ) -> Result<SubmitOutcome, TransitionError> {
        self.apply(Action::SubmitAnswers, |s| s.submit_answers(answers))?;

        let Some(career) = self.state.selected_career.clone() else {
            return Err(TransitionError::MissingCareer);
        };

        let outcome = self
            .processor
            .process(&self.state.answers, &career.required_traits)
            .await;

        match outcome {
            Ok(result) => {
                self.apply(Action::Complete, |s| s.complete(&result))?;
                info!(
                    session_id = %self.id,
                    career = %career.id,
                    score = result.compatibility_score,
                    processor = self.processor.name(),
                    "Assessment completed"
                );
                self.publish(DomainEvent::AssessmentCompleted {
                    session_id: self.id.clone(),
                    career_id: career.id,
                    compatibility_score: result.compatibility_score,
                    timestamp: Utc::now(),
                });
                Ok(SubmitOutcome::Completed(result))
            }
            Err(e) => {
                let message = e.to_string();
                warn!(session_id = %self.id, error = %message, "Assessment failed");
                self.apply(Action::Fail, |s| s.fail(message.clone()))?;
                self.publish(DomainEvent::AssessmentFailed {
                    session_id: self.id.clone(),
                    error_message: message.clone(),
                    timestamp: Utc::now(),
                });
                Ok(SubmitOutcome::Failed(message))
            }
        }
    }

    /// The finished result, once one exists.
    pub fn report(&self) -> Option<ReportSnapshot> {
        let state = &self.state;
        Some(ReportSnapshot {
            career: state.selected_career.clone()?,
            user_traits: state.user_traits?,
            compatibility_score: state.compatibility_score,
            fit: FitBand::from_score(state.compatibility_score),
            completed_at: state.completed_at?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use careerfit_catalog::StaticCatalog;
    use careerfit_core::{Catalog, Error, ProcessingError, TraitScores};
    use careerfit_scoring::Orchestrator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ── Stub processors ─────────────────────────────────────────

    struct FixedProcessor {
        score: u8,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AssessmentProcessor for FixedProcessor {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn process(
            &self,
            _answers: &AnswerSet,
            _required: &TraitScores,
        ) -> careerfit_core::Result<AssessmentResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AssessmentResult {
                user_traits: TraitScores::uniform(60),
                compatibility_score: self.score,
                completed_at: Utc::now(),
            })
        }
    }

    struct FailingProcessor;

    #[async_trait]
    impl AssessmentProcessor for FailingProcessor {
        fn name(&self) -> &str {
            "failing"
        }

        async fn process(
            &self,
            _answers: &AnswerSet,
            _required: &TraitScores,
        ) -> careerfit_core::Result<AssessmentResult> {
            Err(Error::Processing(ProcessingError::Failed("scorer unavailable".into())))
        }
    }

    fn catalog() -> StaticCatalog {
        StaticCatalog::builtin().unwrap()
    }

    fn answers(value: u8) -> AnswerSet {
        (0..18).map(|id| Answer::new(id, value)).collect()
    }

    fn to_questions(session: &mut Session, career_id: &str) {
        let career = catalog().get_career_by_id(career_id).unwrap().clone();
        session.start().unwrap();
        session.select_domain(career.domain).unwrap();
        session.select_career(career).unwrap();
        session.begin().unwrap();
    }

    // ── Happy path ──────────────────────────────────────────────

    #[tokio::test]
    async fn full_flow_with_real_orchestrator() {
        let orch = Orchestrator::new(Arc::new(catalog()));
        let mut session = Session::new(Arc::new(orch));
        to_questions(&mut session, "doctor");

        let outcome = session.submit_answers(answers(1)).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Completed(ref r) if r.compatibility_score == 47));
        assert_eq!(session.screen(), Screen::Result);
        assert_eq!(session.state().user_traits, Some(TraitScores::uniform(25)));

        let report = session.report().unwrap();
        assert_eq!(report.career.id, "doctor");
        assert_eq!(report.compatibility_score, 47);
        assert_eq!(report.fit, FitBand::NeedsAlignment);

        session.view_insights().unwrap();
        session.next().unwrap();
        assert_eq!(session.screen(), Screen::NextSteps);
    }

    #[tokio::test]
    async fn answers_recorded_one_by_one() {
        let processor = Arc::new(FixedProcessor { score: 90, calls: AtomicUsize::new(0) });
        let mut session = Session::new(processor.clone());
        to_questions(&mut session, "lawyer");
        for id in 0..18 {
            session.answer(Answer::new(id, 2)).unwrap();
        }
        let outcome = session.submit_recorded().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Completed(_)));
        assert_eq!(processor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.state().answers.len(), 18);
    }

    // ── Failure handling ────────────────────────────────────────

    #[tokio::test]
    async fn processing_failure_returns_to_questions() {
        let mut session = Session::new(Arc::new(FailingProcessor));
        to_questions(&mut session, "doctor");

        let outcome = session.submit_answers(answers(3)).await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Failed("Processing error: assessment processor failed: scorer unavailable".into())
        );
        assert_eq!(session.screen(), Screen::Questions);
        assert_eq!(session.state().answers.len(), 18);
        assert!(session.state().last_error.as_deref().unwrap().contains("scorer unavailable"));
        assert!(session.report().is_none());
    }

    #[tokio::test]
    async fn validation_failure_surfaces_as_last_error() {
        let orch = Orchestrator::new(Arc::new(catalog()));
        let mut session = Session::new(Arc::new(orch));
        to_questions(&mut session, "doctor");

        let partial: AnswerSet = (0..17).map(|id| Answer::new(id, 3)).collect();
        let outcome = session.submit_answers(partial).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(session.state().last_error.as_deref().unwrap().contains("question 17"));
    }

    #[tokio::test]
    async fn submit_from_wrong_screen_is_rejected() {
        let processor = Arc::new(FixedProcessor { score: 50, calls: AtomicUsize::new(0) });
        let mut session = Session::new(processor.clone());
        let err = session.submit_answers(answers(2)).await.unwrap_err();
        assert_eq!(
            err,
            TransitionError::NotAllowed { from: Screen::Welcome, action: Action::SubmitAnswers }
        );
        assert_eq!(processor.calls.load(Ordering::SeqCst), 0);
    }

    // ── Events ──────────────────────────────────────────────────

    #[tokio::test]
    async fn events_published_for_screens_and_results() {
        let bus = Arc::new(EventBus::new(32));
        let mut rx = bus.subscribe();
        let processor = Arc::new(FixedProcessor { score: 82, calls: AtomicUsize::new(0) });
        let mut session = Session::new(processor).with_events(bus);
        to_questions(&mut session, "psychologist");
        session.submit_answers(answers(4)).await.unwrap();

        let mut screens = Vec::new();
        let mut completed = None;
        while let Ok(event) = rx.try_recv() {
            match event.as_ref() {
                DomainEvent::ScreenChanged { to, .. } => screens.push(to.clone()),
                DomainEvent::AssessmentCompleted { career_id, compatibility_score, .. } => {
                    completed = Some((career_id.clone(), *compatibility_score));
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!(
            screens,
            vec!["domain", "career", "instructions", "questions", "loading", "result"]
        );
        assert_eq!(completed, Some(("psychologist".to_string(), 82)));
    }

    #[tokio::test]
    async fn failure_and_reset_events() {
        let bus = Arc::new(EventBus::new(32));
        let mut rx = bus.subscribe();
        let mut session = Session::new(Arc::new(FailingProcessor)).with_events(bus);
        to_questions(&mut session, "doctor");
        session.submit_answers(answers(4)).await.unwrap();
        session.reset();

        let events: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert!(events.iter().any(|e| matches!(e.as_ref(), DomainEvent::AssessmentFailed { .. })));
        assert!(matches!(events.last().unwrap().as_ref(), DomainEvent::SessionReset { .. }));
        assert_eq!(session.state(), &SessionState::new());
    }

    // ── Retake ──────────────────────────────────────────────────

    #[tokio::test]
    async fn retake_then_pick_another_career() {
        let processor = Arc::new(FixedProcessor { score: 70, calls: AtomicUsize::new(0) });
        let mut session = Session::new(processor);
        to_questions(&mut session, "software-engineer");
        session.submit_answers(answers(3)).await.unwrap();

        session.retake_for_career().unwrap();
        assert_eq!(session.screen(), Screen::Career);
        assert_eq!(session.state().selected_domain, Some(Domain::Pcm));
        assert!(session.report().is_none());

        let other = catalog().get_career_by_id("data-scientist").unwrap().clone();
        session.select_career(other).unwrap();
        assert_eq!(
            session.state().selected_career.as_ref().map(|c| c.id.as_str()),
            Some("data-scientist")
        );
    }
}

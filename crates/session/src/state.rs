//! Immutable session snapshots and the pure transitions between them.
//!
//! Every transition takes `&self` and returns a new [`SessionState`], or a
//! [`TransitionError`] when the current screen does not offer the action.
//! Nothing here performs I/O; [`crate::Session`] applies transitions and
//! drives the processor.

use crate::screen::{Action, Screen};
use careerfit_core::{Answer, AnswerSet, AssessmentResult, Career, Domain, TraitScores};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} from the {from} screen")]
    NotAllowed { from: Screen, action: Action },

    #[error("no career selected")]
    MissingCareer,
}

/// One point-in-time view of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_screen: Screen,
    pub selected_domain: Option<Domain>,
    pub selected_career: Option<Career>,
    pub answers: AnswerSet,
    pub user_traits: Option<TraitScores>,
    pub compatibility_score: u8,
    pub completed_at: Option<DateTime<Utc>>,
    /// Message from the most recent failed processing attempt
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.current_screen
    }

    pub fn has_result(&self) -> bool {
        self.user_traits.is_some()
    }

    fn require(&self, screens: &[Screen], action: Action) -> Result<(), TransitionError> {
        if screens.contains(&self.current_screen) {
            Ok(())
        } else {
            Err(TransitionError::NotAllowed {
                from: self.current_screen,
                action,
            })
        }
    }

    fn on(&self, screen: Screen) -> Self {
        Self {
            current_screen: screen,
            ..self.clone()
        }
    }

    pub fn start(&self) -> Result<Self, TransitionError> {
        self.require(&[Screen::Welcome], Action::Start)?;
        Ok(self.on(Screen::Domain))
    }

    pub fn select_domain(&self, domain: Domain) -> Result<Self, TransitionError> {
        self.require(&[Screen::Domain], Action::SelectDomain)?;
        Ok(Self {
            selected_domain: Some(domain),
            ..self.on(Screen::Career)
        })
    }

    pub fn select_career(&self, career: Career) -> Result<Self, TransitionError> {
        self.require(&[Screen::Career], Action::SelectCareer)?;
        Ok(Self {
            selected_career: Some(career),
            ..self.on(Screen::Instructions)
        })
    }

    pub fn begin(&self) -> Result<Self, TransitionError> {
        self.require(&[Screen::Instructions], Action::Begin)?;
        Ok(self.on(Screen::Questions))
    }

    /// Record one answer, replacing any earlier answer to the same question.
    pub fn answer(&self, answer: Answer) -> Result<Self, TransitionError> {
        self.require(&[Screen::Questions], Action::Answer)?;
        let mut next = self.clone();
        next.answers.record(answer);
        Ok(next)
    }

    pub fn submit_answers(&self, answers: AnswerSet) -> Result<Self, TransitionError> {
        self.require(&[Screen::Questions], Action::SubmitAnswers)?;
        if self.selected_career.is_none() {
            return Err(TransitionError::MissingCareer);
        }
        Ok(Self {
            answers,
            last_error: None,
            ..self.on(Screen::Loading)
        })
    }

    pub fn complete(&self, result: &AssessmentResult) -> Result<Self, TransitionError> {
        self.require(&[Screen::Loading], Action::Complete)?;
        Ok(Self {
            user_traits: Some(result.user_traits),
            compatibility_score: result.compatibility_score,
            completed_at: Some(result.completed_at),
            ..self.on(Screen::Result)
        })
    }

    /// Back to the questions with the submitted answers intact.
    pub fn fail(&self, message: impl Into<String>) -> Result<Self, TransitionError> {
        self.require(&[Screen::Loading], Action::Fail)?;
        Ok(Self {
            last_error: Some(message.into()),
            ..self.on(Screen::Questions)
        })
    }

    pub fn view_insights(&self) -> Result<Self, TransitionError> {
        self.require(&[Screen::Result], Action::ViewInsights)?;
        Ok(self.on(Screen::Insights))
    }

    pub fn next(&self) -> Result<Self, TransitionError> {
        self.require(&[Screen::Insights], Action::Next)?;
        Ok(self.on(Screen::NextSteps))
    }

    pub fn back(&self) -> Result<Self, TransitionError> {
        match self.current_screen.previous() {
            Some(previous) => Ok(self.on(previous)),
            None => Err(TransitionError::NotAllowed {
                from: self.current_screen,
                action: Action::Back,
            }),
        }
    }

    /// Drop the result and answers and pick a career again within the
    /// same domain.
    pub fn retake_for_career(&self) -> Result<Self, TransitionError> {
        self.require(
            &[Screen::Result, Screen::Insights, Screen::NextSteps],
            Action::RetakeForCareer,
        )?;
        Ok(Self {
            answers: AnswerSet::new(),
            user_traits: None,
            compatibility_score: 0,
            completed_at: None,
            last_error: None,
            ..self.on(Screen::Career)
        })
    }

    /// Allowed from every screen.
    pub fn reset(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career() -> Career {
        Career {
            id: "software-engineer".into(),
            name: "Software Engineer".into(),
            description: "Build software systems".into(),
            domain: Domain::Pcm,
            required_traits: TraitScores::new([70, 90, 70, 70, 85, 65]),
        }
    }

    fn result() -> AssessmentResult {
        AssessmentResult {
            user_traits: TraitScores::uniform(75),
            compatibility_score: 88,
            completed_at: Utc::now(),
        }
    }

    fn answers() -> AnswerSet {
        (0..18).map(|id| Answer::new(id, 3)).collect()
    }

    fn at_questions() -> SessionState {
        SessionState::new()
            .start()
            .and_then(|s| s.select_domain(Domain::Pcm))
            .and_then(|s| s.select_career(career()))
            .and_then(|s| s.begin())
            .unwrap()
    }

    fn at_result() -> SessionState {
        at_questions()
            .submit_answers(answers())
            .and_then(|s| s.complete(&result()))
            .unwrap()
    }

    #[test]
    fn initial_state() {
        let s = SessionState::new();
        assert_eq!(s.screen(), Screen::Welcome);
        assert!(s.selected_domain.is_none());
        assert!(s.answers.is_empty());
        assert_eq!(s.compatibility_score, 0);
        assert!(!s.has_result());
    }

    #[test]
    fn selections_carry_to_instructions() {
        let s = SessionState::new()
            .start()
            .and_then(|s| s.select_domain(Domain::Pcm))
            .and_then(|s| s.select_career(career()))
            .unwrap();
        assert_eq!(s.screen(), Screen::Instructions);
        assert_eq!(s.selected_domain, Some(Domain::Pcm));
        assert_eq!(s.selected_career.as_ref().map(|c| c.id.as_str()), Some("software-engineer"));
    }

    #[test]
    fn transitions_do_not_mutate_the_source() {
        let welcome = SessionState::new();
        let domain = welcome.start().unwrap();
        assert_eq!(welcome.screen(), Screen::Welcome);
        assert_eq!(domain.screen(), Screen::Domain);
    }

    #[test]
    fn wrong_screen_is_rejected() {
        let err = SessionState::new().begin().unwrap_err();
        assert_eq!(
            err,
            TransitionError::NotAllowed { from: Screen::Welcome, action: Action::Begin }
        );
        assert_eq!(err.to_string(), "cannot begin from the welcome screen");
        assert!(at_questions().view_insights().is_err());
        assert!(at_result().start().is_err());
    }

    #[test]
    fn submit_without_career_is_rejected() {
        let s = SessionState {
            current_screen: Screen::Questions,
            ..SessionState::new()
        };
        assert_eq!(s.submit_answers(answers()), Err(TransitionError::MissingCareer));
    }

    #[test]
    fn answers_are_recorded_and_replaced() {
        let s = at_questions()
            .answer(Answer::new(3, 2))
            .and_then(|s| s.answer(Answer::new(3, 4)))
            .unwrap();
        assert_eq!(s.answers.len(), 1);
        assert_eq!(s.answers.get(3), Some(4));
        assert_eq!(s.screen(), Screen::Questions);
    }

    #[test]
    fn complete_records_result() {
        let s = at_result();
        assert_eq!(s.screen(), Screen::Result);
        assert_eq!(s.compatibility_score, 88);
        assert_eq!(s.user_traits, Some(TraitScores::uniform(75)));
        assert!(s.completed_at.is_some());
    }

    #[test]
    fn failure_keeps_answers_and_sets_error() {
        let s = at_questions()
            .submit_answers(answers())
            .and_then(|s| s.fail("boom"))
            .unwrap();
        assert_eq!(s.screen(), Screen::Questions);
        assert_eq!(s.answers.len(), 18);
        assert_eq!(s.last_error.as_deref(), Some("boom"));

        let resubmitted = s.submit_answers(s.answers.clone()).unwrap();
        assert!(resubmitted.last_error.is_none());
        assert_eq!(resubmitted.screen(), Screen::Loading);
    }

    #[test]
    fn back_preserves_selections() {
        let s = at_questions();
        let instructions = s.back().unwrap();
        assert_eq!(instructions.screen(), Screen::Instructions);
        let career_screen = instructions.back().unwrap();
        assert_eq!(career_screen.screen(), Screen::Career);
        let domain_screen = career_screen.back().unwrap();
        assert_eq!(domain_screen.screen(), Screen::Domain);
        assert_eq!(domain_screen.selected_domain, Some(Domain::Pcm));
        assert!(domain_screen.selected_career.is_some());
        assert_eq!(domain_screen.back().unwrap().screen(), Screen::Welcome);
    }

    #[test]
    fn no_back_from_loading_or_result() {
        let loading = at_questions().submit_answers(answers()).unwrap();
        assert!(loading.back().is_err());
        assert!(at_result().back().is_err());
        assert!(SessionState::new().back().is_err());
    }

    #[test]
    fn insights_and_next_steps_navigation() {
        let insights = at_result().view_insights().unwrap();
        let next_steps = insights.next().unwrap();
        assert_eq!(next_steps.screen(), Screen::NextSteps);
        assert_eq!(next_steps.back().unwrap().screen(), Screen::Insights);
        assert_eq!(insights.back().unwrap().screen(), Screen::Result);
    }

    #[test]
    fn retake_clears_result_but_keeps_domain() {
        for s in [
            at_result(),
            at_result().view_insights().unwrap(),
            at_result().view_insights().and_then(|s| s.next()).unwrap(),
        ] {
            let retake = s.retake_for_career().unwrap();
            assert_eq!(retake.screen(), Screen::Career);
            assert!(retake.answers.is_empty());
            assert!(retake.user_traits.is_none());
            assert_eq!(retake.compatibility_score, 0);
            assert!(retake.completed_at.is_none());
            assert_eq!(retake.selected_domain, Some(Domain::Pcm));
        }
        assert!(at_questions().retake_for_career().is_err());
    }

    #[test]
    fn reset_from_every_reachable_screen() {
        let loading = at_questions().submit_answers(answers()).unwrap();
        let reachable = [
            SessionState::new(),
            SessionState::new().start().unwrap(),
            at_questions().back().and_then(|s| s.back()).unwrap(),
            at_questions().back().unwrap(),
            at_questions(),
            loading.clone(),
            loading.fail("x").unwrap(),
            at_result(),
            at_result().view_insights().unwrap(),
            at_result().view_insights().and_then(|s| s.next()).unwrap(),
        ];
        for s in reachable {
            assert_eq!(s.reset(), SessionState::new());
        }
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let json = serde_json::to_value(at_result()).unwrap();
        assert_eq!(json["currentScreen"], "result");
        assert_eq!(json["selectedDomain"], "pcm");
        assert_eq!(json["compatibilityScore"], 88);
        assert!(json["lastError"].is_null());
    }
}

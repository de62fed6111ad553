//! Screens and the actions that move between them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The screen a session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Welcome,
    Domain,
    Career,
    Instructions,
    Questions,
    Loading,
    Result,
    Insights,
    NextSteps,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Welcome,
        Screen::Domain,
        Screen::Career,
        Screen::Instructions,
        Screen::Questions,
        Screen::Loading,
        Screen::Result,
        Screen::Insights,
        Screen::NextSteps,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Domain => "domain",
            Screen::Career => "career",
            Screen::Instructions => "instructions",
            Screen::Questions => "questions",
            Screen::Loading => "loading",
            Screen::Result => "result",
            Screen::Insights => "insights",
            Screen::NextSteps => "next-steps",
        }
    }

    /// Where `back` leads from here, if anywhere.
    pub fn previous(self) -> Option<Screen> {
        match self {
            Screen::Domain => Some(Screen::Welcome),
            Screen::Career => Some(Screen::Domain),
            Screen::Instructions => Some(Screen::Career),
            Screen::Questions => Some(Screen::Instructions),
            Screen::Insights => Some(Screen::Result),
            Screen::NextSteps => Some(Screen::Insights),
            Screen::Welcome | Screen::Loading | Screen::Result => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing affordance. Used to name the rejected action in errors
/// and the cause of a screen change in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    SelectDomain,
    SelectCareer,
    Begin,
    Answer,
    SubmitAnswers,
    Complete,
    Fail,
    ViewInsights,
    Next,
    Back,
    RetakeForCareer,
    Reset,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::SelectDomain => "select_domain",
            Action::SelectCareer => "select_career",
            Action::Begin => "begin",
            Action::Answer => "answer",
            Action::SubmitAnswers => "submit_answers",
            Action::Complete => "complete",
            Action::Fail => "fail",
            Action::ViewInsights => "view_insights",
            Action::Next => "next",
            Action::Back => "back",
            Action::RetakeForCareer => "retake_for_career",
            Action::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Screen state machine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::{MarcusError, Result};

/// The view the application is currently showing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Screen {
    #[default]
    Splash,
    Onboarding,
    Dashboard,
    Loading,
    Result,
    Debate,
}

/// Everything that can move the session from one screen to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    FinishSplash { has_user_name: bool },
    CompleteOnboarding,
    SubmitForAnalysis,
    AnalysisSucceeded,
    AnalysisFailed,
    StartDebate,
    ResetToDashboard,
    EndDebate,
    ChangeLanguage,
}

impl ScreenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenEvent::FinishSplash { .. } => "finish_splash",
            ScreenEvent::CompleteOnboarding => "complete_onboarding",
            ScreenEvent::SubmitForAnalysis => "submit_for_analysis",
            ScreenEvent::AnalysisSucceeded => "analysis_succeeded",
            ScreenEvent::AnalysisFailed => "analysis_failed",
            ScreenEvent::StartDebate => "start_debate",
            ScreenEvent::ResetToDashboard => "reset_to_dashboard",
            ScreenEvent::EndDebate => "end_debate",
            ScreenEvent::ChangeLanguage => "change_language",
        }
    }
}

impl Screen {
    /// Target screen for `event`, or `None` when the table has no such edge.
    pub fn next(self, event: ScreenEvent) -> Option<Screen> {
        use Screen::*;
        use ScreenEvent as E;

        match (self, event) {
            (_, E::ChangeLanguage) => Some(Splash),
            (Splash, E::FinishSplash { has_user_name: false }) => Some(Onboarding),
            (Splash, E::FinishSplash { has_user_name: true }) => Some(Dashboard),
            (Onboarding, E::CompleteOnboarding) => Some(Dashboard),
            (Dashboard, E::SubmitForAnalysis) => Some(Loading),
            (Loading, E::AnalysisSucceeded) => Some(Result),
            (Loading, E::AnalysisFailed) => Some(Dashboard),
            (Result, E::StartDebate) => Some(Debate),
            (Result | Dashboard, E::ResetToDashboard) => Some(Dashboard),
            (Debate, E::EndDebate) => Some(Dashboard),
            _ => None,
        }
    }

    /// Like [`Screen::next`] but reports a missing edge as an error.
    pub fn transition(self, event: ScreenEvent) -> Result<Screen> {
        self.next(event)
            .ok_or_else(|| MarcusError::invalid_transition(self, event.name()))
    }
}

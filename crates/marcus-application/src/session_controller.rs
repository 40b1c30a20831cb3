//! The session controller: sole owner of the screen and session state.

use std::sync::Arc;

use marcus_core::agent::{AnalysisClient, DebateChat, DebateClient, DebateSeed, ModelError};
use marcus_core::analysis::{AnalysisRequest, SituationInput, StoicAnalysis};
use marcus_core::error::{MarcusError, Result};
use marcus_core::i18n::Language;
use marcus_core::preferences::PreferenceRepository;
use marcus_core::session::{
    Screen, ScreenEvent, SessionSnapshot, debate_context, situation_context,
};

use crate::debate::DebateSession;
use crate::retry::RetryPolicy;

/// Event name reported when a debate message is sent from the wrong screen.
const SEND_DEBATE_MESSAGE: &str = "send_debate_message";

/// An analysis request that has been accepted but not yet sent.
///
/// Produced by [`SessionController::begin_analysis`]. Running it does not
/// need the controller, so the caller can keep rendering while it is in
/// flight.
pub struct PendingAnalysis {
    client: Arc<dyn AnalysisClient>,
    request: AnalysisRequest,
    retry_policy: RetryPolicy,
    epoch: u64,
}

impl PendingAnalysis {
    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    pub async fn execute(self) -> AnalysisCompletion {
        let client = self.client;
        let request = &self.request;
        let result = self
            .retry_policy
            .run(|| client.analyze(request))
            .await;
        AnalysisCompletion {
            epoch: self.epoch,
            result,
        }
    }
}

/// Outcome of a [`PendingAnalysis`], applied with
/// [`SessionController::finish_analysis`].
#[derive(Debug)]
pub struct AnalysisCompletion {
    epoch: u64,
    pub result: std::result::Result<StoicAnalysis, ModelError>,
}

/// A debate message that has been logged but not yet answered.
pub struct PendingTurn {
    chat: Arc<dyn DebateChat>,
    message: String,
    epoch: u64,
}

impl PendingTurn {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub async fn execute(self) -> TurnCompletion {
        let result = self.chat.send(&self.message).await;
        TurnCompletion {
            epoch: self.epoch,
            result,
        }
    }
}

/// Outcome of a [`PendingTurn`], applied with
/// [`SessionController::finish_debate_turn`].
#[derive(Debug)]
pub struct TurnCompletion {
    epoch: u64,
    pub result: std::result::Result<String, ModelError>,
}

/// Drives every screen transition and every call into the model clients.
///
/// Each asynchronous operation is split into a `begin_*` step that validates
/// and updates state, and a `finish_*` step that applies the outcome. The
/// session carries an epoch that is bumped whenever in-flight work becomes
/// irrelevant (language change, reset, new submission); completions carrying
/// an older epoch are discarded.
pub struct SessionController {
    screen: Screen,
    user_name: Option<String>,
    language: Language,
    analysis: Option<StoicAnalysis>,
    situation_context: String,
    notification: Option<String>,
    debate: Option<DebateSession>,
    epoch: u64,

    analysis_client: Arc<dyn AnalysisClient>,
    debate_client: Arc<dyn DebateClient>,
    preferences: Arc<dyn PreferenceRepository>,
    retry_policy: RetryPolicy,
}

impl SessionController {
    /// Creates a controller on the splash screen, restoring the stored name
    /// and language.
    pub fn new(
        analysis_client: Arc<dyn AnalysisClient>,
        debate_client: Arc<dyn DebateClient>,
        preferences: Arc<dyn PreferenceRepository>,
    ) -> Self {
        let stored = preferences.load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load preferences, using defaults: {}", err);
            Default::default()
        });

        let user_name = stored.stored_user_name().map(str::to_string);
        let language = stored.resolved_language();
        tracing::info!(
            has_user_name = user_name.is_some(),
            language = language.code(),
            "Session started"
        );

        Self {
            screen: Screen::Splash,
            user_name,
            language,
            analysis: None,
            situation_context: String::new(),
            notification: None,
            debate: None,
            epoch: 0,
            analysis_client,
            debate_client,
            preferences,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn analysis(&self) -> Option<&StoicAnalysis> {
        self.analysis.as_ref()
    }

    pub fn situation_context(&self) -> &str {
        &self.situation_context
    }

    /// Immutable copy of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen,
            user_name: self.user_name.clone(),
            language: self.language,
            analysis: self.analysis.clone(),
            situation_context: self.situation_context.clone(),
            notification: self.notification.clone(),
            debate: self.debate.as_ref().map(DebateSession::snapshot),
        }
    }

    /// Returns the pending notification and clears it.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }

    // ============================================================================
    // Intents
    // ============================================================================

    /// Leaves the splash screen for onboarding or, if a name is known, the
    /// dashboard.
    pub fn finish_splash(&mut self) -> Result<Screen> {
        let event = ScreenEvent::FinishSplash {
            has_user_name: self.user_name.is_some(),
        };
        self.apply(event)
    }

    /// Stores the trimmed display name and moves to the dashboard.
    pub fn complete_onboarding(&mut self, name: &str) -> Result<()> {
        let next = self.screen.transition(ScreenEvent::CompleteOnboarding)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(MarcusError::invalid_input("Name must not be empty"));
        }

        if let Err(err) = self.preferences.save_user_name(name) {
            tracing::warn!("Failed to persist user name: {}", err);
        }
        self.user_name = Some(name.to_string());
        self.set_screen(next, ScreenEvent::CompleteOnboarding);
        Ok(())
    }

    /// Switches language from any screen.
    ///
    /// Drops the analysis, the situation context and any debate, invalidates
    /// in-flight requests, and returns to the splash screen. The name is kept.
    pub fn change_language(&mut self, language: Language) -> Result<()> {
        let next = self.screen.transition(ScreenEvent::ChangeLanguage)?;

        if let Err(err) = self.preferences.save_language(language) {
            tracing::warn!(language = language.code(), "Failed to persist language: {}", err);
        }

        self.language = language;
        self.analysis = None;
        self.situation_context.clear();
        self.notification = None;
        self.debate = None;
        self.bump_epoch();
        self.set_screen(next, ScreenEvent::ChangeLanguage);
        Ok(())
    }

    /// [`change_language`](Self::change_language) for a raw language code.
    /// An unsupported code leaves the session untouched.
    pub fn change_language_code(&mut self, code: &str) -> Result<()> {
        let language = Language::from_code(code)?;
        self.change_language(language)
    }

    /// Validates a submission and moves to the loading screen.
    ///
    /// Returns `Ok(None)` without any state change when neither text nor an
    /// image was provided.
    pub fn begin_analysis(&mut self, input: SituationInput) -> Result<Option<PendingAnalysis>> {
        let next = self.screen.transition(ScreenEvent::SubmitForAnalysis)?;
        let Some(user_name) = self.user_name.clone() else {
            return Err(MarcusError::invalid_input(
                "A name is required before submitting",
            ));
        };
        if input.is_empty() {
            tracing::debug!("Ignoring empty submission");
            return Ok(None);
        }

        self.situation_context = situation_context(&input);
        self.notification = None;
        self.bump_epoch();
        self.set_screen(next, ScreenEvent::SubmitForAnalysis);

        Ok(Some(PendingAnalysis {
            client: self.analysis_client.clone(),
            request: AnalysisRequest {
                user_name,
                language: self.language,
                input,
            },
            retry_policy: self.retry_policy,
            epoch: self.epoch,
        }))
    }

    /// Applies an analysis outcome.
    ///
    /// Returns `false` when the completion is stale and was discarded.
    pub fn finish_analysis(&mut self, completion: AnalysisCompletion) -> bool {
        if completion.epoch != self.epoch || self.screen != Screen::Loading {
            tracing::debug!(
                completion_epoch = completion.epoch,
                session_epoch = self.epoch,
                "Discarding stale analysis result"
            );
            return false;
        }

        match completion.result {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.set_screen(Screen::Result, ScreenEvent::AnalysisSucceeded);
            }
            Err(err) => {
                tracing::warn!("Analysis failed: {}", err);
                self.notification = Some(self.language.ui_text().error.to_string());
                self.set_screen(Screen::Dashboard, ScreenEvent::AnalysisFailed);
            }
        }
        true
    }

    /// Runs [`begin_analysis`](Self::begin_analysis), the request, and
    /// [`finish_analysis`](Self::finish_analysis) in sequence.
    ///
    /// Returns `false` if the submission was empty.
    pub async fn submit_for_analysis(&mut self, input: SituationInput) -> Result<bool> {
        let Some(pending) = self.begin_analysis(input)? else {
            return Ok(false);
        };
        let completion = pending.execute().await;
        Ok(self.finish_analysis(completion))
    }

    /// Clears the analysis and situation context, then returns to the
    /// dashboard. Idempotent.
    pub fn reset_to_dashboard(&mut self) -> Result<()> {
        let next = self.screen.transition(ScreenEvent::ResetToDashboard)?;
        self.clear_analysis();
        self.set_screen(next, ScreenEvent::ResetToDashboard);
        Ok(())
    }

    /// Opens a debate about the current analysis.
    pub fn start_debate(&mut self) -> Result<()> {
        let next = self.screen.transition(ScreenEvent::StartDebate)?;
        let (Some(analysis), Some(user_name)) = (&self.analysis, &self.user_name) else {
            return Err(MarcusError::internal(
                "Result screen without an analysis or name",
            ));
        };

        let seed = DebateSeed {
            user_name: user_name.clone(),
            context: debate_context(&self.situation_context, analysis),
            language: self.language,
        };
        let chat = self.debate_client.open_chat(seed);
        self.debate = Some(DebateSession::new(
            chat,
            self.language.ui_text().debate_init,
        ));
        self.set_screen(next, ScreenEvent::StartDebate);
        Ok(())
    }

    /// Leaves the debate; same effect as a reset.
    pub fn end_debate(&mut self) -> Result<()> {
        let next = self.screen.transition(ScreenEvent::EndDebate)?;
        self.clear_analysis();
        self.set_screen(next, ScreenEvent::EndDebate);
        Ok(())
    }

    /// Logs the user's message and hands back the turn to execute.
    ///
    /// Returns `Ok(None)` for blank text or while a previous turn is still in
    /// flight.
    pub fn begin_debate_turn(&mut self, text: &str) -> Result<Option<PendingTurn>> {
        let debate = match (self.screen, self.debate.as_mut()) {
            (Screen::Debate, Some(debate)) => debate,
            _ => {
                return Err(MarcusError::invalid_transition(
                    self.screen,
                    SEND_DEBATE_MESSAGE,
                ));
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if debate.is_typing() {
            tracing::debug!("Debate turn already in flight");
            return Ok(None);
        }

        debate.begin_turn(text);
        Ok(Some(PendingTurn {
            chat: debate.chat(),
            message: text.to_string(),
            epoch: self.epoch,
        }))
    }

    /// Appends the reply, or the localized error text on failure.
    ///
    /// Returns `false` when the debate the turn belonged to is gone.
    pub fn finish_debate_turn(&mut self, completion: TurnCompletion) -> bool {
        let debate = match self.debate.as_mut() {
            Some(debate) if completion.epoch == self.epoch && debate.is_typing() => debate,
            _ => {
                tracing::debug!("Discarding stale debate reply");
                return false;
            }
        };

        let reply = match completion.result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("Debate turn failed: {}", err);
                self.language.ui_text().error.to_string()
            }
        };
        debate.finish_turn(&reply);
        true
    }

    /// Runs a full debate turn.
    ///
    /// Returns `false` if nothing was sent.
    pub async fn send_debate_message(&mut self, text: &str) -> Result<bool> {
        let Some(pending) = self.begin_debate_turn(text)? else {
            return Ok(false);
        };
        let completion = pending.execute().await;
        Ok(self.finish_debate_turn(completion))
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn apply(&mut self, event: ScreenEvent) -> Result<Screen> {
        let next = self.screen.transition(event)?;
        self.set_screen(next, event);
        Ok(next)
    }

    fn set_screen(&mut self, next: Screen, event: ScreenEvent) {
        tracing::info!(from = %self.screen, to = %next, event = event.name(), "Screen transition");
        self.screen = next;
    }

    fn clear_analysis(&mut self) {
        self.analysis = None;
        self.situation_context.clear();
        if self.debate.take().is_some() {
            self.bump_epoch();
        }
    }

    fn bump_epoch(&mut self) {
        self.epoch += 1;
    }
}

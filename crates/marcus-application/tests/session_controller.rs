//! Session controller behaviour against in-memory fakes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use marcus_application::{RetryPolicy, SessionController};
use marcus_core::agent::{
    AnalysisClient, DebateChat, DebateClient, DebateSeed, ModelError,
};
use marcus_core::analysis::{AnalysisRequest, ImageAttachment, SituationInput, StoicAnalysis};
use marcus_core::error::Result;
use marcus_core::i18n::Language;
use marcus_core::preferences::{PreferenceRepository, Preferences};
use marcus_core::session::{MessageRole, Screen};

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct FakeAnalysisClient {
    results: Mutex<VecDeque<std::result::Result<StoicAnalysis, ModelError>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl FakeAnalysisClient {
    fn returning(results: Vec<std::result::Result<StoicAnalysis, ModelError>>) -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(results.into()),
            requests: Mutex::default(),
        })
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisClient for FakeAnalysisClient {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> std::result::Result<StoicAnalysis, ModelError> {
        self.requests.lock().unwrap().push(request.clone());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ModelError::EmptyResponse))
    }
}

type ReplyQueue = Arc<Mutex<VecDeque<std::result::Result<String, ModelError>>>>;

#[derive(Default)]
struct FakeDebateClient {
    replies: ReplyQueue,
    seeds: Mutex<Vec<DebateSeed>>,
}

impl FakeDebateClient {
    fn replying(replies: Vec<std::result::Result<String, ModelError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Arc::new(Mutex::new(replies.into())),
            seeds: Mutex::default(),
        })
    }

    fn seeds(&self) -> Vec<DebateSeed> {
        self.seeds.lock().unwrap().clone()
    }
}

impl DebateClient for FakeDebateClient {
    fn open_chat(&self, seed: DebateSeed) -> Arc<dyn DebateChat> {
        self.seeds.lock().unwrap().push(seed);
        Arc::new(FakeChat {
            replies: self.replies.clone(),
        })
    }
}

struct FakeChat {
    replies: ReplyQueue,
}

#[async_trait]
impl DebateChat for FakeChat {
    async fn send(&self, _message: &str) -> std::result::Result<String, ModelError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok("Silence.".into()))
    }
}

#[derive(Default)]
struct MemoryPreferences {
    stored: Mutex<Preferences>,
}

impl MemoryPreferences {
    fn with(user_name: Option<&str>, language: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            stored: Mutex::new(Preferences {
                user_name: user_name.map(str::to_string),
                language: language.map(str::to_string),
            }),
        })
    }

    fn current(&self) -> Preferences {
        self.stored.lock().unwrap().clone()
    }
}

impl PreferenceRepository for MemoryPreferences {
    fn load(&self) -> Result<Preferences> {
        Ok(self.current())
    }

    fn save_user_name(&self, user_name: &str) -> Result<()> {
        self.stored.lock().unwrap().user_name = Some(user_name.to_string());
        Ok(())
    }

    fn save_language(&self, language: Language) -> Result<()> {
        self.stored.lock().unwrap().language = Some(language.code().to_string());
        Ok(())
    }
}

struct Harness {
    controller: SessionController,
    analysis: Arc<FakeAnalysisClient>,
    debate: Arc<FakeDebateClient>,
    preferences: Arc<MemoryPreferences>,
}

impl Harness {
    fn new(
        preferences: Arc<MemoryPreferences>,
        analysis: Arc<FakeAnalysisClient>,
        debate: Arc<FakeDebateClient>,
    ) -> Self {
        let controller = SessionController::new(
            analysis.clone(),
            debate.clone(),
            preferences.clone(),
        );
        Self {
            controller,
            analysis,
            debate,
            preferences,
        }
    }

    /// A returning user already on the dashboard.
    fn on_dashboard(
        analysis: Vec<std::result::Result<StoicAnalysis, ModelError>>,
        replies: Vec<std::result::Result<String, ModelError>>,
    ) -> Self {
        let mut harness = Self::new(
            MemoryPreferences::with(Some("Cato"), Some("EN")),
            FakeAnalysisClient::returning(analysis),
            FakeDebateClient::replying(replies),
        );
        assert_eq!(harness.controller.finish_splash().unwrap(), Screen::Dashboard);
        harness
    }
}

fn sample_analysis() -> StoicAnalysis {
    StoicAnalysis {
        facts: vec!["A".into()],
        opinions: vec!["B".into()],
        in_control: vec!["C".into()],
        out_of_control: vec!["D".into()],
        verdict: "V".into(),
    }
}

// ============================================================================
// Splash and onboarding
// ============================================================================

#[test]
fn first_run_goes_through_onboarding() {
    let mut h = Harness::new(
        Arc::new(MemoryPreferences::default()),
        FakeAnalysisClient::returning(vec![]),
        FakeDebateClient::replying(vec![]),
    );
    assert_eq!(h.controller.screen(), Screen::Splash);
    assert_eq!(h.controller.language(), Language::Indonesian);

    assert_eq!(h.controller.finish_splash().unwrap(), Screen::Onboarding);
    h.controller.complete_onboarding("  Cato  ").unwrap();

    assert_eq!(h.controller.screen(), Screen::Dashboard);
    assert_eq!(h.controller.user_name(), Some("Cato"));
    assert_eq!(h.preferences.current().user_name.as_deref(), Some("Cato"));
}

#[test]
fn blank_name_is_rejected() {
    let mut h = Harness::new(
        Arc::new(MemoryPreferences::default()),
        FakeAnalysisClient::returning(vec![]),
        FakeDebateClient::replying(vec![]),
    );
    h.controller.finish_splash().unwrap();

    let err = h.controller.complete_onboarding("   ").unwrap_err();
    assert!(matches!(err, marcus_core::MarcusError::InvalidInput(_)));
    assert_eq!(h.controller.screen(), Screen::Onboarding);
    assert!(h.controller.user_name().is_none());
}

#[test]
fn unsupported_stored_language_falls_back_to_default() {
    let h = Harness::new(
        MemoryPreferences::with(Some("Seneca"), Some("XX")),
        FakeAnalysisClient::returning(vec![]),
        FakeDebateClient::replying(vec![]),
    );
    assert_eq!(h.controller.language(), Language::default());
    assert_eq!(h.controller.user_name(), Some("Seneca"));
}

// ============================================================================
// Analysis
// ============================================================================

#[tokio::test]
async fn empty_submission_is_a_no_op() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
    let before = h.controller.snapshot();

    assert!(!h.controller.submit_for_analysis(SituationInput::text("  ")).await.unwrap());
    assert!(
        !h.controller
            .submit_for_analysis(SituationInput::default().worst_case(true))
            .await
            .unwrap()
    );

    assert_eq!(h.controller.snapshot(), before);
    assert_eq!(h.analysis.calls(), 0);
}

#[tokio::test]
async fn successful_analysis_shows_result() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);

    let pending = h
        .controller
        .begin_analysis(SituationInput::text("Lost my job").worst_case(true))
        .unwrap()
        .unwrap();
    assert_eq!(h.controller.screen(), Screen::Loading);
    assert_eq!(pending.request().user_name, "Cato");
    assert_eq!(pending.request().language, Language::English);

    let completion = pending.execute().await;
    assert!(h.controller.finish_analysis(completion));

    assert_eq!(h.controller.screen(), Screen::Result);
    assert_eq!(h.controller.analysis(), Some(&sample_analysis()));
    assert_eq!(
        h.controller.situation_context(),
        "Input User: Lost my job \nAnalysis Type: Worst Case"
    );
}

#[tokio::test]
async fn image_only_submission_is_sent() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
    let input = SituationInput::default().with_image(ImageAttachment::jpeg(vec![0xFF, 0xD8]));

    assert!(h.controller.submit_for_analysis(input).await.unwrap());
    assert_eq!(h.analysis.calls(), 1);
    assert_eq!(
        h.controller.situation_context(),
        "Input User:  \nAnalysis Type: Normal"
    );
}

#[tokio::test]
async fn failed_analysis_returns_to_dashboard_with_notice() {
    let mut h = Harness::on_dashboard(vec![Err(ModelError::malformed("no verdict"))], vec![]);

    assert!(h.controller.submit_for_analysis(SituationInput::text("storm")).await.unwrap());

    let snapshot = h.controller.snapshot();
    assert_eq!(snapshot.screen, Screen::Dashboard);
    assert!(snapshot.analysis.is_none());
    assert_eq!(
        snapshot.notification.as_deref(),
        Some(Language::English.ui_text().error)
    );

    assert!(h.controller.take_notification().is_some());
    assert!(h.controller.take_notification().is_none());
}

#[tokio::test]
async fn transient_failures_follow_retry_policy() {
    let h = Harness::on_dashboard(
        vec![Err(ModelError::transport("timeout", true)), Ok(sample_analysis())],
        vec![],
    );
    let mut controller = h
        .controller
        .with_retry_policy(RetryPolicy::new(2, Duration::ZERO));

    controller
        .submit_for_analysis(SituationInput::text("storm"))
        .await
        .unwrap();
    assert_eq!(controller.screen(), Screen::Result);
    assert_eq!(h.analysis.calls(), 2);
}

#[tokio::test]
async fn stale_analysis_is_discarded_after_language_change() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);

    let pending = h
        .controller
        .begin_analysis(SituationInput::text("storm"))
        .unwrap()
        .unwrap();
    h.controller.change_language(Language::Spanish).unwrap();
    let before = h.controller.snapshot();

    let completion = pending.execute().await;
    assert!(!h.controller.finish_analysis(completion));
    assert_eq!(h.controller.snapshot(), before);
    assert_eq!(h.controller.screen(), Screen::Splash);
}

// ============================================================================
// Reset and language
// ============================================================================

#[tokio::test]
async fn reset_is_idempotent() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
    h.controller
        .submit_for_analysis(SituationInput::text("storm"))
        .await
        .unwrap();

    h.controller.reset_to_dashboard().unwrap();
    let once = h.controller.snapshot();
    h.controller.reset_to_dashboard().unwrap();

    assert_eq!(h.controller.snapshot(), once);
    assert_eq!(once.screen, Screen::Dashboard);
    assert!(once.analysis.is_none());
    assert!(once.situation_context.is_empty());
}

#[tokio::test]
async fn change_language_clears_state_from_every_screen() {
    for target in [
        Screen::Dashboard,
        Screen::Result,
        Screen::Debate,
        Screen::Splash,
    ] {
        let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
        if target != Screen::Dashboard {
            h.controller
                .submit_for_analysis(SituationInput::text("storm"))
                .await
                .unwrap();
        }
        if target == Screen::Debate {
            h.controller.start_debate().unwrap();
        }
        if target == Screen::Splash {
            h.controller.change_language(Language::German).unwrap();
        }

        h.controller.change_language(Language::Japanese).unwrap();

        let snapshot = h.controller.snapshot();
        assert_eq!(snapshot.screen, Screen::Splash, "from {target}");
        assert!(snapshot.analysis.is_none());
        assert!(snapshot.situation_context.is_empty());
        assert!(snapshot.debate.is_none());
        assert_eq!(snapshot.language, Language::Japanese);
        assert_eq!(snapshot.user_name.as_deref(), Some("Cato"));
        assert_eq!(h.preferences.current().language.as_deref(), Some("JP"));
    }
}

#[test]
fn change_language_from_onboarding_and_loading() {
    let mut h = Harness::new(
        Arc::new(MemoryPreferences::default()),
        FakeAnalysisClient::returning(vec![]),
        FakeDebateClient::replying(vec![]),
    );
    h.controller.finish_splash().unwrap();
    h.controller.change_language_code("de").unwrap();
    assert_eq!(h.controller.screen(), Screen::Splash);
    assert_eq!(h.controller.language(), Language::German);

    let mut h = Harness::on_dashboard(vec![], vec![]);
    h.controller
        .begin_analysis(SituationInput::text("storm"))
        .unwrap();
    assert_eq!(h.controller.screen(), Screen::Loading);
    h.controller.change_language(Language::English).unwrap();
    assert_eq!(h.controller.screen(), Screen::Splash);
}

#[test]
fn unsupported_language_code_leaves_session_untouched() {
    let mut h = Harness::on_dashboard(vec![], vec![]);
    let before = h.controller.snapshot();

    let err = h.controller.change_language_code("FR").unwrap_err();
    assert!(matches!(err, marcus_core::MarcusError::UnsupportedLanguage(_)));
    assert_eq!(h.controller.snapshot(), before);
}

// ============================================================================
// Debate
// ============================================================================

#[tokio::test]
async fn cato_scenario() {
    let mut h = Harness::new(
        Arc::new(MemoryPreferences::default()),
        FakeAnalysisClient::returning(vec![Ok(sample_analysis())]),
        FakeDebateClient::replying(vec![Ok("Because the rain is not yours.".into())]),
    );
    h.controller.change_language(Language::English).unwrap();
    h.controller.finish_splash().unwrap();
    h.controller.complete_onboarding("Cato").unwrap();
    h.controller
        .submit_for_analysis(SituationInput::text("It rained on my wedding"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();
    assert!(h.controller.send_debate_message("Why?").await.unwrap());

    let debate = h.controller.snapshot().debate.unwrap();
    assert!(!debate.is_typing);
    let log: Vec<(u64, MessageRole, &str)> = debate
        .messages
        .iter()
        .map(|m| (m.id, m.role, m.text.as_str()))
        .collect();
    assert_eq!(
        log,
        vec![
            (0, MessageRole::Model, Language::English.ui_text().debate_init),
            (1, MessageRole::User, "Why?"),
            (2, MessageRole::Model, "Because the rain is not yours."),
        ]
    );
}

#[tokio::test]
async fn debate_context_lists_everything_in_order() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
    h.controller
        .submit_for_analysis(SituationInput::text("X"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();

    let seeds = h.debate.seeds();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0].user_name, "Cato");
    assert_eq!(seeds[0].language, Language::English);

    let context = &seeds[0].context;
    let mut cursor = 0;
    for needle in [
        "Input User: X",
        "Facts: A",
        "Opinions: B",
        "In Control: C",
        "Out of Control: D",
        "Verdict: V",
    ] {
        let found = context[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} missing or out of order"));
        cursor += found + needle.len();
    }
}

#[tokio::test]
async fn failed_turn_substitutes_error_text() {
    let mut h = Harness::on_dashboard(
        vec![Ok(sample_analysis())],
        vec![Err(ModelError::transport("reset", false))],
    );
    h.controller
        .submit_for_analysis(SituationInput::text("storm"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();
    h.controller.send_debate_message("Unfair!").await.unwrap();

    let debate = h.controller.snapshot().debate.unwrap();
    assert_eq!(debate.messages.len(), 3);
    assert_eq!(debate.messages[2].text, Language::English.ui_text().error);
    assert!(!debate.is_typing);
    assert_eq!(h.controller.screen(), Screen::Debate);
}

#[tokio::test]
async fn second_turn_waits_for_the_first() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
    h.controller
        .submit_for_analysis(SituationInput::text("storm"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();

    let first = h.controller.begin_debate_turn("  first ").unwrap().unwrap();
    assert_eq!(first.message(), "first");
    assert!(h.controller.snapshot().debate.unwrap().is_typing);
    assert!(h.controller.begin_debate_turn("second").unwrap().is_none());
    assert!(h.controller.begin_debate_turn("   ").unwrap().is_none());

    let completion = first.execute().await;
    assert!(h.controller.finish_debate_turn(completion));
    assert_eq!(h.controller.snapshot().debate.unwrap().messages.len(), 3);
}

#[tokio::test]
async fn ended_debate_never_leaks_into_the_next() {
    let mut h = Harness::on_dashboard(
        vec![Ok(sample_analysis()), Ok(sample_analysis())],
        vec![Ok("first reply".into())],
    );
    h.controller
        .submit_for_analysis(SituationInput::text("one"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();
    h.controller.send_debate_message("hello").await.unwrap();

    h.controller.end_debate().unwrap();
    assert_eq!(h.controller.screen(), Screen::Dashboard);
    assert!(h.controller.snapshot().debate.is_none());
    assert!(h.controller.analysis().is_none());
    assert!(h.controller.situation_context().is_empty());

    h.controller
        .submit_for_analysis(SituationInput::text("two"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();

    let debate = h.controller.snapshot().debate.unwrap();
    assert_eq!(debate.messages.len(), 1);
    assert_eq!(debate.messages[0].id, 0);
}

#[tokio::test]
async fn reply_after_debate_ended_is_discarded() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![Ok("late".into())]);
    h.controller
        .submit_for_analysis(SituationInput::text("storm"))
        .await
        .unwrap();
    h.controller.start_debate().unwrap();

    let pending = h.controller.begin_debate_turn("question").unwrap().unwrap();
    h.controller.end_debate().unwrap();

    let completion = pending.execute().await;
    assert!(!h.controller.finish_debate_turn(completion));
    assert!(h.controller.snapshot().debate.is_none());
}

// ============================================================================
// Invalid transitions
// ============================================================================

#[tokio::test]
async fn invalid_intents_leave_session_untouched() {
    let mut h = Harness::on_dashboard(vec![Ok(sample_analysis())], vec![]);
    let before = h.controller.snapshot();

    assert!(h.controller.start_debate().unwrap_err().is_invalid_transition());
    assert!(h.controller.end_debate().unwrap_err().is_invalid_transition());
    assert!(h.controller.finish_splash().unwrap_err().is_invalid_transition());
    assert!(
        h.controller
            .complete_onboarding("Seneca")
            .unwrap_err()
            .is_invalid_transition()
    );
    assert!(
        h.controller
            .send_debate_message("hello")
            .await
            .unwrap_err()
            .is_invalid_transition()
    );

    assert_eq!(h.controller.snapshot(), before);
    assert_eq!(h.analysis.calls(), 0);
}

//! End-to-end integration tests for the linkwise pipeline.
//!
//! These tests exercise the full path from a user query to a recorded answer:
//! profile analysis, classification, memory windowing, composition and
//! generation, against scripted providers and a mocked Gemini endpoint.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use linkwise_agent::{
    compose, ComposeInput, MemoryWindow, Orchestrator, QuickAction, Template, TurnOutcome,
    PROFILE_REQUIRED_MESSAGE,
};
use linkwise_core::error::ProviderError;
use linkwise_core::provider::{Provider, ProviderRequest, ProviderResponse};
use linkwise_core::{
    AnalysisError, ChatMessage, ComposeError, ConversationHistory, ExperienceLevel,
    ExtractionError, GenerationError, Industry, Intent, ProfileContext, ProfileData,
    ProfileScraper, Role, ScrapeError, SessionState,
};
use linkwise_providers::{GeminiProvider, RetryPolicy, RetryingProvider};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Mocks ────────────────────────────────────────────────────────────────

/// A mock provider that replays scripted results and records prompts.
struct ScriptedProvider {
    results: Mutex<Vec<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(results: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut prompts = self.prompts.lock().unwrap();
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            panic!("ScriptedProvider exhausted: call #{}", prompts.len() + 1);
        }
        prompts.push(request.prompt);
        results
            .remove(0)
            .map(|text| ProviderResponse::text(text, "mock"))
    }
}

struct StaticScraper(String);

#[async_trait::async_trait]
impl ProfileScraper for StaticScraper {
    async fn fetch(&self, url: &str) -> Result<ProfileData, ScrapeError> {
        if url.is_empty() {
            return Err(ScrapeError::NotFound(url.to_string()));
        }
        Ok(ProfileData::new(self.0.clone()))
    }
}

const PROFILE: &str = r#"{"name": "Ada", "headline": "CS student", "connections": 87}"#;

const JUNIOR_TECH_JSON: &str = r#"{
    "experience_level": "junior",
    "industry": "Tech",
    "career_stage": "early career",
    "recent_career_type": "internship",
    "total_work_experience": 1.5,
    "role_type": "Software Engineering Intern",
    "profile_completeness": 40
}"#;

fn junior_tech_context() -> ProfileContext {
    ProfileContext::from_json_str(JUNIOR_TECH_JSON).unwrap()
}

fn profiled_session() -> SessionState {
    let mut session = SessionState::new();
    session.set_profile(ProfileData::new(PROFILE), junior_tech_context());
    session
}

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}],
        "usageMetadata": {"promptTokenCount": 100, "candidatesTokenCount": 20, "totalTokenCount": 120}
    }))
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 2,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        timeout: Duration::from_secs(5),
    }
}

// ── Scenario A: first-turn content rewrite ───────────────────────────────

#[tokio::test]
async fn e2e_scenario_a_first_turn_content_rewrite() {
    let provider = Arc::new(ScriptedProvider::texts(&[
        "content_rewrite",
        "## About\nCurious engineer building things.",
    ]));
    let orchestrator = Orchestrator::new(provider.clone(), "gemini-2.0-flash");
    let mut session = profiled_session();
    assert!(session.history().is_empty());

    let outcome = orchestrator
        .handle_turn(&mut session, "rewrite my about section")
        .await
        .unwrap();

    match &outcome {
        TurnOutcome::Answered { intent, text } => {
            assert_eq!(*intent, Intent::ContentRewrite);
            assert!(text.starts_with("## About"));
        }
        other => panic!("Expected an answer, got {other:?}"),
    }

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 2);
    let instruction = &prompts[1];
    assert!(instruction.contains("rewrite my about section"));
    assert!(instruction.contains("40"));
    assert!(instruction.contains("Simplify technical language."));
    assert!(!instruction.contains("PREVIOUS CONVERSATION CONTEXT"));

    let messages = session.history().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Assistant);
}

// ── Scenario B: memory window over 25 messages ───────────────────────────

#[tokio::test]
async fn e2e_scenario_b_memory_window_keeps_last_twenty() {
    let mut history = ConversationHistory::new();
    for i in 1..=25 {
        let message = if i % 2 == 1 {
            ChatMessage::user(format!("msg-{i:02}"))
        } else {
            ChatMessage::assistant(format!("msg-{i:02}"))
        };
        history.push(message);
    }

    let memory = MemoryWindow::default().render(&history);
    let context = junior_tech_context();
    let data = ProfileData::new(PROFILE);
    let instruction = compose(
        Template::ProfileAnalysis(ExperienceLevel::Junior),
        &ComposeInput {
            query: "how is my profile?",
            profile_data: &data,
            context: &context,
            job_titles: &[],
            memory: &memory,
        },
    );

    for excluded in 1..=5 {
        assert!(!instruction.contains(&format!("msg-{excluded:02}")));
    }
    let positions: Vec<usize> = (6..=25)
        .map(|i| instruction.find(&format!("msg-{i:02}")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(instruction.contains("Assistant: msg-06\n"));
    assert!(instruction.contains("User: msg-25\n"));
    assert_eq!(history.len(), 25);
}

#[tokio::test]
async fn e2e_long_conversation_memory_through_orchestrator() {
    let mut script = Vec::new();
    for i in 0..12 {
        script.push("general".to_string());
        script.push(format!("answer {i}"));
    }
    let provider = Arc::new(ScriptedProvider::new(script.into_iter().map(Ok).collect()));
    let orchestrator = Orchestrator::new(provider.clone(), "m");
    let mut session = profiled_session();

    for i in 0..12 {
        orchestrator
            .handle_turn(&mut session, &format!("question {i}"))
            .await
            .unwrap();
    }

    // The 12th turn sees 22 prior messages: questions 0 and the first
    // answer fall outside the window.
    let last_instruction = provider.prompts().pop().unwrap();
    assert!(!last_instruction.contains("User: question 0\n"));
    assert!(!last_instruction.contains("Assistant: answer 0\n"));
    assert!(last_instruction.contains("User: question 1\n"));
    assert!(last_instruction.contains("Assistant: answer 10\n"));
    assert_eq!(session.history().len(), 24);
}

// ── Scenario C: no profile context ───────────────────────────────────────

#[tokio::test]
async fn e2e_scenario_c_no_profile_short_circuits() {
    let provider = Arc::new(ScriptedProvider::texts(&[]));
    let orchestrator = Orchestrator::new(provider.clone(), "m");
    let mut session = SessionState::new();

    for query in ["rewrite my headline", "hello", ""] {
        let outcome = orchestrator.handle_turn(&mut session, query).await.unwrap();
        assert_eq!(outcome, TurnOutcome::NeedsProfile(PROFILE_REQUIRED_MESSAGE));
    }
    assert_eq!(provider.calls(), 0);
    assert!(session.history().is_empty());
}

// ── Scenario D: unrecognized tier ────────────────────────────────────────

#[tokio::test]
async fn e2e_scenario_d_unrecognized_tier_is_explicit() {
    assert_eq!(
        Template::resolve(Intent::ProfileAnalysis, "executive"),
        Err(ComposeError::UnrecognizedTier("executive".into()))
    );

    // The same label can never make it into a ProfileContext.
    let record = JUNIOR_TECH_JSON.replace("\"junior\"", "\"executive\"");
    assert!(matches!(
        ProfileContext::from_json_str(&record),
        Err(ExtractionError::Validation { field: "experience_level", .. })
    ));
}

// ── Failure handling ─────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_generation_failure_leaves_history_unchanged() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("general".into()),
        Ok("first answer".into()),
        Ok("job_fit_analysis".into()),
        Err(ProviderError::AuthenticationFailed("bad key".into())),
    ]));
    let orchestrator = Orchestrator::new(provider.clone(), "m");
    let mut session = profiled_session();

    orchestrator.handle_turn(&mut session, "hi").await.unwrap();
    let before = session.history().messages().to_vec();

    let err = orchestrator
        .handle_turn(&mut session, "how do I fit a staff role?")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Provider(ProviderError::AuthenticationFailed(_))));
    assert_eq!(session.history().messages(), before.as_slice());
}

#[tokio::test]
async fn e2e_classification_failure_still_answers() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Err(ProviderError::Timeout("classifier timed out".into())),
        Ok("Sure, ask me anything about your profile.".into()),
    ]));
    let orchestrator = Orchestrator::new(provider.clone(), "m");
    let mut session = profiled_session();

    let outcome = orchestrator.handle_turn(&mut session, "hello").await.unwrap();

    assert!(matches!(outcome, TurnOutcome::Answered { intent: Intent::General, .. }));
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn e2e_failed_reanalysis_keeps_previous_profile() {
    let provider = Arc::new(ScriptedProvider::texts(&[
        r#"{"experience_level": "senior", "industry": "Retail"}"#,
    ]));
    let orchestrator = Orchestrator::new(provider.clone(), "m");
    let mut session = profiled_session();
    session.record_exchange("q", "a");

    let err = orchestrator
        .analyze_profile(&mut session, &StaticScraper("new".into()), "url", vec![])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::Extraction(ExtractionError::Validation { .. })
    ));
    assert_eq!(session.profile_context(), Some(&junior_tech_context()));
    assert_eq!(session.history().len(), 2);
}

// ── Full flow: analysis, quick action, job fit ───────────────────────────

#[tokio::test]
async fn e2e_analyze_then_quick_action_job_fit() {
    let fenced = format!("```json\n{JUNIOR_TECH_JSON}\n```");
    let provider = Arc::new(ScriptedProvider::texts(&[
        &fenced,
        "job_fit_analysis",
        "# Overall match score: 62%",
    ]));
    let orchestrator = Orchestrator::new(provider.clone(), "m");
    let mut session = SessionState::new();

    let context = orchestrator
        .analyze_profile(
            &mut session,
            &StaticScraper(PROFILE.into()),
            "https://www.linkedin.com/in/ada",
            vec!["Backend Engineer".into()],
        )
        .await
        .unwrap();
    assert_eq!(context.industry(), Industry::Tech);

    let query = QuickAction::JobFit.query(session.job_titles());
    assert_eq!(query, "Analyze my fit for Backend Engineer role");

    let outcome = orchestrator.handle_turn(&mut session, &query).await.unwrap();
    assert_eq!(outcome.text(), "# Overall match score: 62%");

    let prompts = provider.prompts();
    assert!(prompts[0].contains("\"connections\": 87"));
    assert!(prompts[2].contains("TARGET ROLES: Backend Engineer"));
    assert!(prompts[2].contains("Match Score Analysis"));
}

// ── Full flow against a mocked Gemini endpoint ───────────────────────────

#[tokio::test]
async fn e2e_gemini_pipeline_with_transient_failure() {
    let server = MockServer::start().await;
    let endpoint = "/models/gemini-2.0-flash:generateContent";

    // The first generation attempt hits a 503 and is retried.
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_string_contains("USER QUERY"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_string_contains("JSON format"))
        .respond_with(gemini_reply(&format!("```json\n{JUNIOR_TECH_JSON}\n```")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_string_contains("Classify this query"))
        .respond_with(gemini_reply("profile_analysis\n"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_string_contains("USER QUERY"))
        .respond_with(gemini_reply("  ## Profile Foundation Assessment\nLooks promising.  "))
        .mount(&server)
        .await;

    let gemini = Arc::new(GeminiProvider::new("g-test").with_base_url(server.uri()));
    let provider = Arc::new(RetryingProvider::new(gemini, fast_policy()));
    let orchestrator = Orchestrator::new(provider, "gemini-2.0-flash");
    let mut session = SessionState::new();

    orchestrator
        .analyze_profile(&mut session, &StaticScraper(PROFILE.into()), "url", vec![])
        .await
        .unwrap();
    let outcome = orchestrator
        .handle_turn(&mut session, "how is my profile?")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::Answered {
            intent: Intent::ProfileAnalysis,
            text: "## Profile Foundation Assessment\nLooks promising.".into(),
        }
    );
    assert_eq!(session.history().len(), 2);
}

#[tokio::test]
async fn e2e_gemini_auth_failure_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let gemini = Arc::new(GeminiProvider::new("bad").with_base_url(server.uri()));
    let provider = Arc::new(RetryingProvider::new(gemini, fast_policy()));
    let orchestrator = Orchestrator::new(provider, "gemini-2.0-flash");
    let mut session = SessionState::new();

    let err = orchestrator
        .analyze_profile(&mut session, &StaticScraper(PROFILE.into()), "url", vec![])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AnalysisError::Extraction(ExtractionError::Provider(ProviderError::AuthenticationFailed(_)))
    ));
    assert!(!session.has_profile());
}

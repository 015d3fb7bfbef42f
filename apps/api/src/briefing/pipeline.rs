//! Briefing pipelines — thread one mutable record through a fixed sequence
//! of generation steps.
//!
//! Body flow: News → Meaning → Action → LinkedIn → POCs → Compounding → Final.
//! Intro flow: Title → Summary.
//!
//! Each step formats one prompt, makes one external call, and writes one
//! field. Steps run strictly in sequence: a step's call completes before the
//! next starts. Any failure aborts the run; the caller gets every output
//! field or none.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::briefing::prompts;
use crate::config::{Config, ModelTier};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Run identifier attached to every pipeline invocation's log events.
/// All requests share it: results are returned synchronously and never
/// resumed, so nothing hangs per-request state off this value.
pub const RUN_ID: &str = "growpulse-api";

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

/// Request body shared by both briefing endpoints.
/// Missing fields default silently; nothing else is validated.
#[derive(Debug, Clone, Deserialize)]
pub struct GrowPulseRequest {
    #[serde(default = "default_task")]
    pub task: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_profession")]
    pub profession: String,
    #[serde(default = "default_sector")]
    pub sector: String,
}

fn default_task() -> String {
    "Daily briefing".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_profession() -> String {
    "Developer".to_string()
}

fn default_sector() -> String {
    "AI".to_string()
}

/// Output of the body pipeline. Input fields are not echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct BlogBodyOutput {
    pub news: String,
    pub meaning: String,
    pub action: String,
    pub linkedin_post: String,
    pub poc_ideas: String,
    pub compounding: String,
    pub final_summary: String,
}

impl From<BriefingRecord> for BlogBodyOutput {
    fn from(record: BriefingRecord) -> Self {
        Self {
            news: record.news,
            meaning: record.meaning,
            action: record.action,
            linkedin_post: record.linkedin_post,
            poc_ideas: record.poc_ideas,
            compounding: record.compounding,
            final_summary: record.final_summary,
        }
    }
}

/// Output of the intro pipeline: a blog-preview title and teaser.
#[derive(Debug, Clone, Serialize)]
pub struct BlogIntroOutput {
    pub title: String,
    pub summary: String,
}

impl From<BriefingRecord> for BlogIntroOutput {
    fn from(record: BriefingRecord) -> Self {
        Self {
            title: record.title,
            summary: record.summary,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Briefing record
// ────────────────────────────────────────────────────────────────────────────

/// Per-request state threaded through the generation steps.
///
/// The four input fields are set at construction and never change. Each
/// output field is written exactly once, by the step that owns it, and read
/// only by steps downstream of that write. The record lives for exactly one
/// pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct BriefingRecord {
    pub task: String,
    pub lang: String,
    pub profession: String,
    pub sector: String,
    pub news: String,
    pub meaning: String,
    pub action: String,
    pub linkedin_post: String,
    pub poc_ideas: String,
    pub compounding: String,
    pub final_summary: String,
    pub title: String,
    pub summary: String,
}

impl BriefingRecord {
    fn new(request: GrowPulseRequest) -> Self {
        Self {
            task: request.task,
            lang: request.lang,
            profession: request.profession,
            sector: request.sector,
            ..Self::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation steps
// ────────────────────────────────────────────────────────────────────────────

/// Common shape of one generation step: build a prompt from the record, call
/// the model for the step's tier, write the single output field.
trait GenerationStep: Copy {
    fn field(self) -> &'static str;
    fn tier(self) -> ModelTier;
    fn prompt(self, record: &BriefingRecord) -> String;
    fn write(self, record: &mut BriefingRecord, text: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStep {
    News,
    Meaning,
    Action,
    LinkedinPost,
    PocIdeas,
    Compounding,
    FinalSummary,
}

impl BodyStep {
    /// Fixed execution order of the body pipeline.
    pub const SEQUENCE: [BodyStep; 7] = [
        BodyStep::News,
        BodyStep::Meaning,
        BodyStep::Action,
        BodyStep::LinkedinPost,
        BodyStep::PocIdeas,
        BodyStep::Compounding,
        BodyStep::FinalSummary,
    ];
}

impl GenerationStep for BodyStep {
    fn field(self) -> &'static str {
        match self {
            BodyStep::News => "news",
            BodyStep::Meaning => "meaning",
            BodyStep::Action => "action",
            BodyStep::LinkedinPost => "linkedin_post",
            BodyStep::PocIdeas => "poc_ideas",
            BodyStep::Compounding => "compounding",
            BodyStep::FinalSummary => "final_summary",
        }
    }

    /// The two steps that synthesize prior outputs run on the heavy tier.
    fn tier(self) -> ModelTier {
        match self {
            BodyStep::Compounding | BodyStep::FinalSummary => ModelTier::Heavy,
            _ => ModelTier::Fast,
        }
    }

    fn prompt(self, record: &BriefingRecord) -> String {
        match self {
            BodyStep::News => prompts::news_prompt(record),
            BodyStep::Meaning => prompts::meaning_prompt(record),
            BodyStep::Action => prompts::action_prompt(record),
            BodyStep::LinkedinPost => prompts::linkedin_prompt(record),
            BodyStep::PocIdeas => prompts::poc_prompt(record),
            BodyStep::Compounding => prompts::compounding_prompt(record),
            BodyStep::FinalSummary => prompts::final_summary_prompt(record),
        }
    }

    fn write(self, record: &mut BriefingRecord, text: String) {
        match self {
            BodyStep::News => record.news = text,
            BodyStep::Meaning => record.meaning = text,
            BodyStep::Action => record.action = text,
            BodyStep::LinkedinPost => record.linkedin_post = text,
            BodyStep::PocIdeas => record.poc_ideas = text,
            BodyStep::Compounding => record.compounding = text,
            BodyStep::FinalSummary => record.final_summary = text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStep {
    Title,
    Summary,
}

impl IntroStep {
    /// The two intro steps share no state but still execute in this order.
    pub const SEQUENCE: [IntroStep; 2] = [IntroStep::Title, IntroStep::Summary];
}

impl GenerationStep for IntroStep {
    fn field(self) -> &'static str {
        match self {
            IntroStep::Title => "title",
            IntroStep::Summary => "summary",
        }
    }

    fn tier(self) -> ModelTier {
        ModelTier::Fast
    }

    fn prompt(self, record: &BriefingRecord) -> String {
        match self {
            IntroStep::Title => prompts::title_prompt(record),
            IntroStep::Summary => prompts::intro_summary_prompt(record),
        }
    }

    fn write(self, record: &mut BriefingRecord, text: String) {
        match self {
            IntroStep::Title => record.title = text,
            IntroStep::Summary => record.summary = text,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline runners
// ────────────────────────────────────────────────────────────────────────────

async fn run_steps<S: GenerationStep>(
    llm: &dyn TextGenerator,
    config: &Config,
    steps: &[S],
    record: &mut BriefingRecord,
) -> Result<(), AppError> {
    for &step in steps {
        let model = config.model_for(step.tier());
        let prompt = step.prompt(record);
        info!(
            run_id = RUN_ID,
            step = step.field(),
            model,
            "running generation step"
        );
        let text = llm
            .generate(model, &prompt)
            .await
            .map_err(|e| AppError::Llm(format!("{} step failed: {e}", step.field())))?;
        step.write(record, text);
    }
    Ok(())
}

/// Runs the 7-step body pipeline.
///
/// All-or-nothing: the caller gets seven populated fields or an error, never
/// a partial set.
pub async fn run_blog_body_pipeline(
    llm: &dyn TextGenerator,
    config: &Config,
    request: GrowPulseRequest,
) -> Result<BlogBodyOutput, AppError> {
    let mut record = BriefingRecord::new(request);
    run_steps(llm, config, &BodyStep::SEQUENCE, &mut record).await?;
    Ok(BlogBodyOutput::from(record))
}

/// Runs the 2-step intro pipeline (blog title + teaser summary).
pub async fn run_blog_intro_pipeline(
    llm: &dyn TextGenerator,
    config: &Config,
    request: GrowPulseRequest,
) -> Result<BlogIntroOutput, AppError> {
    let mut record = BriefingRecord::new(request);
    run_steps(llm, config, &IntroStep::SEQUENCE, &mut record).await?;
    Ok(BlogIntroOutput::from(record))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted generator: returns canned text per call and records the
    /// (model, prompt) pair of every call it receives.
    struct ScriptedGenerator {
        calls: Mutex<Vec<(String, String)>>,
        fail_at: Option<usize>,
    }

    impl ScriptedGenerator {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_at: None,
            }
        }

        fn failing_at(index: usize) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_at: Some(index),
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push((model.to_string(), prompt.to_string()));
            if self.fail_at == Some(index) {
                return Err(LlmError::Api {
                    status: 500,
                    message: "upstream failure".to_string(),
                });
            }
            Ok(format!("generated-{index}"))
        }
    }

    fn test_config() -> Config {
        Config {
            openai_api_key: "test-key".to_string(),
            fast_model: "fast-model".to_string(),
            heavy_model: "heavy-model".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn empty_request() -> GrowPulseRequest {
        serde_json::from_str("{}").unwrap()
    }

    #[test]
    fn test_request_defaults() {
        let request = empty_request();
        assert_eq!(request.task, "Daily briefing");
        assert_eq!(request.lang, "en");
        assert_eq!(request.profession, "Developer");
        assert_eq!(request.sector, "AI");
    }

    #[test]
    fn test_defaults_appear_in_constructed_context_block() {
        let record = BriefingRecord::new(empty_request());
        let prompt = prompts::news_prompt(&record);
        assert!(prompt.contains("Profession: Developer"));
        assert!(prompt.contains("Sector: AI"));
        assert!(prompt.contains("Task: Daily briefing"));
    }

    #[tokio::test]
    async fn test_body_pipeline_populates_all_seven_fields_in_order() {
        let llm = ScriptedGenerator::new();
        let output = run_blog_body_pipeline(&llm, &test_config(), empty_request())
            .await
            .unwrap();

        assert_eq!(output.news, "generated-0");
        assert_eq!(output.meaning, "generated-1");
        assert_eq!(output.action, "generated-2");
        assert_eq!(output.linkedin_post, "generated-3");
        assert_eq!(output.poc_ideas, "generated-4");
        assert_eq!(output.compounding, "generated-5");
        assert_eq!(output.final_summary, "generated-6");
        assert_eq!(llm.calls().len(), 7);
    }

    #[tokio::test]
    async fn test_body_pipeline_uses_heavy_tier_for_synthesis_steps() {
        let llm = ScriptedGenerator::new();
        run_blog_body_pipeline(&llm, &test_config(), empty_request())
            .await
            .unwrap();

        let models: Vec<String> = llm.calls().into_iter().map(|(model, _)| model).collect();
        assert_eq!(
            models,
            vec![
                "fast-model",
                "fast-model",
                "fast-model",
                "fast-model",
                "fast-model",
                "heavy-model",
                "heavy-model",
            ]
        );
    }

    #[tokio::test]
    async fn test_downstream_prompts_quote_upstream_outputs_verbatim() {
        let llm = ScriptedGenerator::new();
        run_blog_body_pipeline(&llm, &test_config(), empty_request())
            .await
            .unwrap();

        let prompts: Vec<String> = llm.calls().into_iter().map(|(_, prompt)| prompt).collect();

        // meaning ← news
        assert!(prompts[1].contains("generated-0"));
        // action reads nothing upstream
        assert!(!prompts[2].contains("generated-"));
        // linkedin_post ← news + meaning + action
        assert!(prompts[3].contains("generated-0"));
        assert!(prompts[3].contains("generated-1"));
        assert!(prompts[3].contains("generated-2"));
        // poc_ideas ← news
        assert!(prompts[4].contains("generated-0"));
        assert!(!prompts[4].contains("generated-1"));
        // compounding ← action + linkedin_post + poc_ideas
        assert!(prompts[5].contains("generated-2"));
        assert!(prompts[5].contains("generated-3"));
        assert!(prompts[5].contains("generated-4"));
        assert!(!prompts[5].contains("generated-0"));
        // final_summary ← all six prior fields
        for text in [
            "generated-0",
            "generated-1",
            "generated-2",
            "generated-3",
            "generated-4",
            "generated-5",
        ] {
            assert!(prompts[6].contains(text), "final summary missing {text}");
        }
    }

    #[tokio::test]
    async fn test_failure_aborts_run_with_no_partial_output() {
        let llm = ScriptedGenerator::failing_at(3);
        let result = run_blog_body_pipeline(&llm, &test_config(), empty_request()).await;

        assert!(matches!(result, Err(AppError::Llm(_))));
        // The failing step was the last call issued; nothing ran after it.
        assert_eq!(llm.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_identical_responses_produce_identical_output() {
        let first = run_blog_body_pipeline(&ScriptedGenerator::new(), &test_config(), empty_request())
            .await
            .unwrap();
        let second = run_blog_body_pipeline(&ScriptedGenerator::new(), &test_config(), empty_request())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_intro_pipeline_runs_two_independent_fast_steps() {
        let llm = ScriptedGenerator::new();
        let output = run_blog_intro_pipeline(&llm, &test_config(), empty_request())
            .await
            .unwrap();

        assert_eq!(output.title, "generated-0");
        assert_eq!(output.summary, "generated-1");

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(model, _)| model == "fast-model"));
        // Summary does not quote the title; the steps share no state.
        assert!(!calls[1].1.contains("generated-0"));
    }

    #[tokio::test]
    async fn test_intro_failure_aborts_the_run() {
        let llm = ScriptedGenerator::failing_at(0);
        let result = run_blog_intro_pipeline(&llm, &test_config(), empty_request()).await;

        assert!(matches!(result, Err(AppError::Llm(_))));
        assert_eq!(llm.calls().len(), 1);
    }
}

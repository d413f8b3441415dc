//! Meeting processing pipeline
//!
//! Orchestrates the artifact chain: notes are truncated to the input token
//! budget and summarized once, then the follow-up email and executive brief
//! are each derived from that summary. Raw notes go to the model exactly once
//! per meeting regardless of which artifacts are requested, and the derived
//! artifacts can never diverge from what the summary states.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::models::{ArtifactKind, MeetingRequest, ProcessingResult};
use crate::domain::prompts::PromptTemplates;
use crate::domain::text::{count_words, estimate_tokens, truncate_to_budget};
use crate::domain::usage::{CostEstimate, UsageLedger, UsageTotals};
use crate::error::{AppError, Result};
use crate::ports::clock::Clock;
use crate::ports::completion::{CompletionPort, CompletionRequest};
use crate::ports::sink::OutputSinkPort;

/// Pipeline progress states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Summarizing,
    EmailGenerating,
    BriefGenerating,
    Done,
    Failed,
}

/// One meeting-processing session
///
/// Owns exactly one usage ledger; totals accumulate across every completion
/// call made through this instance and are never reset. Not to be shared
/// across concurrent batch items - each gets its own pipeline, or items run
/// sequentially through one.
pub struct MeetingPipeline {
    config: Arc<AppConfig>,
    completion: Arc<dyn CompletionPort>,
    sink: Arc<dyn OutputSinkPort>,
    clock: Arc<dyn Clock>,
    model: String,
    ledger: UsageLedger,
    state: PipelineState,
}

impl MeetingPipeline {
    /// Create a pipeline; `model` falls back to the configured default tier
    pub fn new(
        config: Arc<AppConfig>,
        completion: Arc<dyn CompletionPort>,
        sink: Arc<dyn OutputSinkPort>,
        clock: Arc<dyn Clock>,
        model: Option<String>,
    ) -> Self {
        let model = model.unwrap_or_else(|| config.default_model.clone());
        log::info!("Initialized meeting pipeline with model: {}", model);

        Self {
            config,
            completion,
            sink,
            clock,
            model,
            ledger: UsageLedger::new(),
            state: PipelineState::Idle,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Read-only session accounting
    pub fn usage_totals(&self) -> UsageTotals {
        self.ledger.totals()
    }

    /// Priced estimate for the session's model
    pub fn cost_estimate(&self) -> CostEstimate {
        self.ledger.cost_estimate(&self.model)
    }

    /// Send one prompt through the completion port and record its usage
    ///
    /// At most one attempt per prompt; retry policy belongs to the caller.
    async fn call_model(&mut self, user_prompt: String) -> Result<String> {
        log::info!(
            "Calling {} (~{} input tokens)",
            self.model,
            estimate_tokens(&user_prompt)
        );

        let request = CompletionRequest {
            system_prompt: Some(PromptTemplates::system().to_string()),
            user_prompt,
            model: self.model.clone(),
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        };

        let result = self.completion.complete(&request).await?;
        self.ledger
            .record_call(result.input_tokens, result.output_tokens);
        Ok(result.text)
    }

    /// Generate the structured summary from raw notes
    pub async fn summarize_meeting(&mut self, notes: &str, date: Option<&str>) -> Result<String> {
        log::info!("Processing meeting notes ({} words)", count_words(notes));

        let (notes, was_truncated) = truncate_to_budget(notes, self.config.max_input_tokens);
        if was_truncated {
            log::warn!(
                "Input notes were truncated to the {}-token budget",
                self.config.max_input_tokens
            );
        }

        let date = match date {
            Some(date) => date.to_string(),
            None => self.clock.now().format("%B %d, %Y").to_string(),
        };

        let prompt = PromptTemplates::format_summary(&notes, &date);
        self.call_model(prompt).await
    }

    /// Generate the follow-up email from an existing summary
    pub async fn generate_email(&mut self, summary: &str) -> Result<String> {
        self.call_model(PromptTemplates::format_email(summary)).await
    }

    /// Generate the executive brief from an existing summary
    pub async fn generate_brief(&mut self, summary: &str) -> Result<String> {
        self.call_model(PromptTemplates::format_brief(summary)).await
    }

    async fn persist(&self, dir: &Path, kind: ArtifactKind, text: &str) -> Result<PathBuf> {
        let path = self
            .sink
            .write(dir, kind.base_name(), kind.extension(), text)
            .await?;
        log::info!("{} saved: {}", kind, path.display());
        Ok(path)
    }

    /// Generate and persist one derived artifact from the summary
    async fn run_derived(
        &mut self,
        kind: ArtifactKind,
        summary: &str,
        dir: &Path,
    ) -> Result<(String, PathBuf)> {
        let text = if kind == ArtifactKind::Email {
            self.generate_email(summary).await?
        } else {
            self.generate_brief(summary).await?
        };
        let path = self.persist(dir, kind, &text).await?;
        Ok((text, path))
    }

    /// Run the full artifact chain for one meeting
    ///
    /// Summary failure aborts the request. Email and brief are siblings:
    /// each is attempted independently, already-persisted artifacts are never
    /// rolled back, and the first derived failure is surfaced once both have
    /// had their chance.
    pub async fn process_meeting(&mut self, request: &MeetingRequest) -> Result<ProcessingResult> {
        if request.notes.trim().is_empty() {
            self.state = PipelineState::Failed;
            return Err(AppError::EmptyNotes);
        }

        let want_email = request.want_email.unwrap_or(self.config.generate_email);
        let want_brief = request.want_brief.unwrap_or(self.config.generate_brief);
        let output_dir = request
            .output_dir
            .clone()
            .unwrap_or_else(|| self.config.output_dir.clone());

        let mut result = ProcessingResult::default();

        self.state = PipelineState::Summarizing;
        let summary = match self
            .summarize_meeting(&request.notes, request.date.as_deref())
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                self.state = PipelineState::Failed;
                return Err(e);
            }
        };
        let summary_path = match self.persist(&output_dir, ArtifactKind::Summary, &summary).await {
            Ok(path) => path,
            Err(e) => {
                self.state = PipelineState::Failed;
                return Err(e);
            }
        };
        result.record(ArtifactKind::Summary, summary.clone(), summary_path);

        let mut first_failure: Option<AppError> = None;

        if want_email {
            self.state = PipelineState::EmailGenerating;
            match self
                .run_derived(ArtifactKind::Email, &summary, &output_dir)
                .await
            {
                Ok((text, path)) => result.record(ArtifactKind::Email, text, path),
                Err(e) => {
                    log::error!("Email generation failed: {}", e);
                    first_failure.get_or_insert(e);
                }
            }
        }

        if want_brief {
            self.state = PipelineState::BriefGenerating;
            match self
                .run_derived(ArtifactKind::Brief, &summary, &output_dir)
                .await
            {
                Ok((text, path)) => result.record(ArtifactKind::Brief, text, path),
                Err(e) => {
                    log::error!("Brief generation failed: {}", e);
                    first_failure.get_or_insert(e);
                }
            }
        }

        if let Some(failure) = first_failure {
            self.state = PipelineState::Failed;
            return Err(failure);
        }

        self.state = PipelineState::Done;
        Ok(result)
    }
}

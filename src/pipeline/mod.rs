//! Content processing workflow
//!
//! A linear three-step pipeline over a single content record:
//!
//! VALIDATE → ENRICH → SUMMARIZE
//!
//! Each step is a typed transformation whose output record type is the
//! next step's input record type, so the composition is checked by the
//! compiler. Execution is strictly sequential; the first failing step
//! aborts the run and its error propagates to the caller unchanged.

use crate::clock::{Clock, SystemClock};
use crate::models::{ContentInput, ProcessedContent};
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub mod enrich;
pub mod summarize;
pub mod validate;

pub use enrich::EnrichContent;
pub use summarize::GenerateSummary;
pub use validate::ValidateContent;

/// One workflow step: a transformation with a fixed input/output schema.
#[async_trait]
pub trait WorkflowStep: Send + Sync {
    type Input: Send;
    type Output: Send;

    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output>;
}

/// Step metadata for introspection and logging.
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    pub id: &'static str,
    pub description: &'static str,
}

/// Run a single step with per-step logging, aborting the run on failure.
async fn run_step<S: WorkflowStep>(run_id: Uuid, step: &S, input: S::Input) -> Result<S::Output> {
    debug!(run_id = %run_id, step = step.id(), "Running workflow step");

    match step.execute(input).await {
        Ok(output) => Ok(output),
        Err(e) => {
            warn!(
                run_id = %run_id,
                step = step.id(),
                error = %e,
                "Workflow step failed, aborting run"
            );
            Err(e)
        }
    }
}

/// The content processing workflow.
///
/// Overall input schema: [`ContentInput`] (content + optional type).
/// Overall output schema: [`ProcessedContent`] (the last step's output).
///
/// Runs are independent of each other: the workflow holds no mutable
/// state, so distinct records may flow through one instance concurrently.
pub struct ContentWorkflow<C: Clock = SystemClock> {
    validate: ValidateContent,
    enrich: EnrichContent<C>,
    summarize: GenerateSummary,
}

impl ContentWorkflow<SystemClock> {
    /// Workflow stamping records with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ContentWorkflow<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ContentWorkflow<C> {
    /// Workflow with an explicit time source (deterministic in tests).
    pub fn with_clock(clock: C) -> Self {
        Self {
            validate: ValidateContent,
            enrich: EnrichContent::with_clock(clock),
            summarize: GenerateSummary,
        }
    }

    /// The ordered steps of this workflow.
    pub fn steps(&self) -> [StepInfo; 3] {
        [
            StepInfo {
                id: self.validate.id(),
                description: self.validate.description(),
            },
            StepInfo {
                id: self.enrich.id(),
                description: self.enrich.description(),
            },
            StepInfo {
                id: self.summarize.id(),
                description: self.summarize.description(),
            },
        ]
    }

    /// Execute all steps in order, feeding each step's output into the
    /// next. No retry, no recovery: the first failure is the run's result.
    pub async fn run(&self, input: ContentInput) -> Result<ProcessedContent> {
        let run_id = Uuid::new_v4();

        debug!(
            run_id = %run_id,
            content_type = %input.content_type,
            "Starting content workflow run"
        );

        let validated = run_step(run_id, &self.validate, input).await?;
        let enriched = run_step(run_id, &self.enrich, validated).await?;
        let processed = run_step(run_id, &self.summarize, enriched).await?;

        info!(
            run_id = %run_id,
            word_count = processed.word_count,
            difficulty = %processed.metadata.difficulty,
            "Content workflow run complete"
        );

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::AssistantError;
    use crate::models::{ContentType, Difficulty};
    use chrono::DateTime;

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[tokio::test]
    async fn end_to_end_short_blog() {
        let workflow = ContentWorkflow::new();
        let input = ContentInput::new(
            "The quick brown fox jumps over the lazy dog today",
            ContentType::Blog,
        );

        let result = workflow.run(input).await.unwrap();

        assert_eq!(result.word_count, 9);
        assert_eq!(result.content_type, ContentType::Blog);
        assert_eq!(result.metadata.reading_time, 1);
        assert_eq!(result.metadata.difficulty, Difficulty::Easy);
        assert_eq!(
            result.summary,
            "The quick brown fox jumps over the lazy dog today."
        );
    }

    #[tokio::test]
    async fn end_to_end_too_short_fails_with_count() {
        let workflow = ContentWorkflow::new();
        let input = ContentInput::new("Hi there.", ContentType::Article);

        let err = workflow.run(input).await.unwrap_err();

        match err {
            AssistantError::Validation(msg) => assert!(msg.contains('2'), "message: {}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn end_to_end_long_article_is_hard() {
        let workflow = ContentWorkflow::new();
        let input = ContentInput::new(words(350), ContentType::Article);

        let result = workflow.run(input).await.unwrap();

        assert_eq!(result.word_count, 350);
        assert_eq!(result.metadata.difficulty, Difficulty::Hard);
        assert_eq!(result.metadata.reading_time, 2);
        assert!(result.summary.contains("contains 350 words"));
        assert!(result
            .summary
            .ends_with("This article contains 350 words and takes approximately 2 minute(s) to read."));
    }

    #[tokio::test]
    async fn five_tokens_pass_four_fail() {
        let workflow = ContentWorkflow::new();

        let ok = workflow
            .run(ContentInput::new(words(5), ContentType::Article))
            .await;
        assert!(ok.is_ok());
        assert_eq!(ok.unwrap().word_count, 5);

        let err = workflow
            .run(ContentInput::new(words(4), ContentType::Article))
            .await
            .unwrap_err();
        assert!(matches!(err, AssistantError::Validation(_)));
    }

    #[tokio::test]
    async fn reruns_are_idempotent_for_derived_fields() {
        let workflow = ContentWorkflow::new();
        let input = ContentInput::new(format!("  {}  ", words(120)), ContentType::Social);

        let first = workflow.run(input).await.unwrap();
        // The first run already trimmed the content.
        let second = workflow
            .run(ContentInput::new(first.content.clone(), first.content_type))
            .await
            .unwrap();

        assert_eq!(first.word_count, second.word_count);
        assert_eq!(first.metadata.difficulty, second.metadata.difficulty);
        assert_eq!(first.metadata.reading_time, second.metadata.reading_time);
        assert_eq!(first.summary, second.summary);
    }

    #[tokio::test]
    async fn fixed_clock_makes_runs_reproducible() {
        let instant = DateTime::parse_from_rfc3339("2026-02-01T08:00:00Z")
            .unwrap()
            .to_utc();

        let workflow = ContentWorkflow::with_clock(FixedClock::at(instant));
        let input = || ContentInput::new(words(60), ContentType::Blog);

        let first = workflow.run(input()).await.unwrap();
        let second = workflow.run(input()).await.unwrap();

        assert_eq!(first.metadata.processed_at, instant);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn steps_are_ordered() {
        let workflow = ContentWorkflow::new();
        let ids: Vec<&str> = workflow.steps().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["validate-content", "enhance-content", "generate-summary"]
        );
    }
}

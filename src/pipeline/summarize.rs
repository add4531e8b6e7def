//! Summary generation step
//!
//! Produces a short natural-language summary: the normalized lead
//! sentence, plus an explanatory sentence for longer content. Total over
//! enriched input.

use super::WorkflowStep;
use crate::models::{ContentType, EnrichedContent, ProcessedContent};
use crate::Result;
use async_trait::async_trait;
use tracing::debug;

/// Content longer than this gets the explanatory second sentence
const EXPLANATION_WORD_THRESHOLD: usize = 50;

/// Creates a summary of the content.
pub struct GenerateSummary;

/// First sentence of `content`, whitespace-normalized, with exactly one
/// trailing period. The original terminator (`.`, `!`, `?`) is not
/// preserved. Degenerates to a bare period when no sentence is found.
fn lead_sentence(content: &str) -> String {
    let first = content
        .split(['.', '!', '?'])
        .find(|fragment| !fragment.trim().is_empty());

    let mut lead = match first {
        Some(fragment) => fragment.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    };
    lead.push('.');
    lead
}

fn compose_summary(
    content: &str,
    content_type: ContentType,
    word_count: usize,
    reading_time: u32,
) -> String {
    let mut summary = lead_sentence(content);

    if word_count > EXPLANATION_WORD_THRESHOLD {
        summary.push_str(&format!(
            " This {} contains {} words and takes approximately {} minute(s) to read.",
            content_type, word_count, reading_time
        ));
    }

    summary
}

#[async_trait]
impl WorkflowStep for GenerateSummary {
    type Input = EnrichedContent;
    type Output = ProcessedContent;

    fn id(&self) -> &'static str {
        "generate-summary"
    }

    fn description(&self) -> &'static str {
        "Creates a summary of the content"
    }

    async fn execute(&self, input: EnrichedContent) -> Result<ProcessedContent> {
        let summary = compose_summary(
            &input.content,
            input.content_type,
            input.word_count,
            input.metadata.reading_time,
        );

        debug!(summary_len = summary.len(), "Generated summary");

        Ok(ProcessedContent {
            content: input.content,
            content_type: input.content_type,
            word_count: input.word_count,
            metadata: input.metadata,
            summary,
        })
    }
}

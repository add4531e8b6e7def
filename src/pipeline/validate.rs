//! Content validation step
//!
//! Rejects degenerate input before any metadata is derived.

use super::WorkflowStep;
use crate::error::AssistantError;
use crate::models::{ContentInput, ValidatedContent};
use crate::Result;
use async_trait::async_trait;
use tracing::debug;

/// Minimum whitespace-delimited tokens for content to be processable
const MIN_WORD_COUNT: usize = 5;

/// Validates incoming text content and computes its word count.
pub struct ValidateContent;

#[async_trait]
impl WorkflowStep for ValidateContent {
    type Input = ContentInput;
    type Output = ValidatedContent;

    fn id(&self) -> &'static str {
        "validate-content"
    }

    fn description(&self) -> &'static str {
        "Validates incoming text content"
    }

    async fn execute(&self, input: ContentInput) -> Result<ValidatedContent> {
        let trimmed = input.content.trim();

        if trimmed.is_empty() {
            return Err(AssistantError::Validation(
                "Content cannot be empty".to_string(),
            ));
        }

        let word_count = trimmed.split_whitespace().count();
        let is_valid = word_count >= MIN_WORD_COUNT;

        if !is_valid {
            return Err(AssistantError::Validation(format!(
                "Content too short: {} words",
                word_count
            )));
        }

        debug!(word_count, content_type = %input.content_type, "Content validated");

        Ok(ValidatedContent {
            content: trimmed.to_string(),
            content_type: input.content_type,
            word_count,
            is_valid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentType;

    async fn validate(content: &str) -> Result<ValidatedContent> {
        ValidateContent
            .execute(ContentInput::new(content, ContentType::Article))
            .await
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let err = validate("").await.unwrap_err();
        match err {
            AssistantError::Validation(msg) => assert!(msg.contains("empty")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn whitespace_only_content_is_rejected_as_empty() {
        let err = validate("   \n\t  ").await.unwrap_err();
        match err {
            AssistantError::Validation(msg) => assert!(msg.contains("empty")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn single_word_fails_with_count() {
        let err = validate("Hello").await.unwrap_err();
        match err {
            AssistantError::Validation(msg) => {
                assert_eq!(msg, "Content too short: 1 words");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn four_words_fail() {
        let err = validate("one two three four").await.unwrap_err();
        match err {
            AssistantError::Validation(msg) => assert!(msg.contains('4')),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn exactly_five_words_pass() {
        let validated = validate("one two three four five").await.unwrap();
        assert_eq!(validated.word_count, 5);
        assert!(validated.is_valid);
    }

    #[tokio::test]
    async fn content_is_trimmed_and_counted_across_whitespace_runs() {
        let validated = validate("  alpha\tbeta  gamma\ndelta epsilon  ").await.unwrap();
        assert_eq!(validated.content, "alpha\tbeta  gamma\ndelta epsilon");
        assert_eq!(validated.word_count, 5);
    }

    #[tokio::test]
    async fn content_type_is_carried_through() {
        let validated = ValidateContent
            .execute(ContentInput::new("a b c d e f", ContentType::Social))
            .await
            .unwrap();
        assert_eq!(validated.content_type, ContentType::Social);
    }
}

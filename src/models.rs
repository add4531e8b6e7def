//! Core data models for the content workflow and tool layer
//!
//! Each pipeline boundary has its own record type, so a stage can only
//! receive input that the previous stage actually produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Article,
    Blog,
    Social,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

//
// ================= Pipeline Records =================
//

/// Raw input accepted by the workflow. `type` defaults to "article"
/// when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentInput {
    pub content: String,
    #[serde(rename = "type", default)]
    pub content_type: ContentType,
}

impl ContentInput {
    pub fn new(content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            content: content.into(),
            content_type,
        }
    }
}

/// Output of the validation stage: trimmed content plus token statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedContent {
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub word_count: usize,
    pub is_valid: bool,
}

/// Derived metadata attached by the enrichment stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMetadata {
    /// Estimated minutes to read at 200 words per minute, rounded up
    pub reading_time: u32,
    pub difficulty: Difficulty,
    /// Capture time of enrichment, not reused from validation
    pub processed_at: DateTime<Utc>,
}

/// Output of the enrichment stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedContent {
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub word_count: usize,
    pub metadata: ContentMetadata,
}

/// Terminal record produced by the summarization stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedContent {
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub word_count: usize,
    pub metadata: ContentMetadata,
    pub summary: String,
}

//
// ================= Tool I/O =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    pub tool_name: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,
    pub data: serde_json::Value,
    pub error: Option<String>,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Article => "article",
            ContentType::Blog => "blog",
            ContentType::Social => "social",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", s)
    }
}

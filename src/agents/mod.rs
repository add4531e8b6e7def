//! Assistant definitions
//!
//! Declarative configuration for the conversational assistants: who they
//! are, which model backs them, which tools they may call, and how their
//! memory is configured. The surrounding agent framework owns the
//! conversational loop, storage, retrieval, and embedding — this module
//! only describes the assistants.

use crate::tools::mcp::McpServerConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub mod financial;
pub mod memory;

pub use financial::financial_agent;
pub use memory::memory_agent;

pub(crate) const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
pub(crate) const MEMORY_DB_URL: &str = "file:../../memory.db";
pub(crate) const VECTOR_DB_URL: &str = "file:../../vector.db";
pub(crate) const EMBEDDER_MODEL: &str = "text-embedding-3-small";

/// Recent messages kept verbatim in the conversation context
pub(crate) const HISTORY_WINDOW: usize = 20;

/// A configured conversational assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    pub instructions: String,
    pub model: String,
    /// Names of local tools from the registry
    pub tools: Vec<String>,
    /// Remote tool servers available to this agent
    pub mcp_servers: HashMap<String, McpServerConfig>,
    pub memory: MemoryConfig,
}

/// Memory settings handed to the agent framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub storage_url: String,
    pub vector_url: String,
    pub embedder: String,
    /// Number of recent messages kept in context
    pub last_messages: usize,
    pub semantic_recall: SemanticRecallConfig,
    pub working_memory: WorkingMemoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticRecallConfig {
    /// Most similar past messages to retrieve
    pub top_k: usize,
    /// Surrounding messages included with each match
    pub message_range: MessageRange,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MessageRange {
    pub before: usize,
    pub after: usize,
}

impl Default for SemanticRecallConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            message_range: MessageRange {
                before: 2,
                after: 1,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingMemoryConfig {
    pub enabled: bool,
    pub template: String,
}

/// Directory the filesystem tool server and note-taking guidance point at.
pub fn notes_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("notes")
}

/// The assistants this workspace configures.
pub fn default_agents() -> Vec<AgentDefinition> {
    vec![financial_agent(&notes_dir()), memory_agent()]
}

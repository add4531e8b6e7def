//! The memory assistant
//!
//! A general-purpose assistant built around its memory: conversation
//! history, semantic recall over past conversations, and a structured
//! working-memory profile of the user.

use super::{
    AgentDefinition, MemoryConfig, SemanticRecallConfig, WorkingMemoryConfig, DEFAULT_MODEL,
    EMBEDDER_MODEL, HISTORY_WINDOW, MEMORY_DB_URL, VECTOR_DB_URL,
};
use std::collections::HashMap;

/// Working-memory template: a structured profile the agent keeps current.
const USER_PROFILE_TEMPLATE: &str = r#"
# User Profile

## Personal Info
- Name:
- Location:
- Timezone:
- Occupation:

## Preferences
- Communication Style:
- Topics of Interest:
- Learning Goals:

## Project Information
- Current Projects:
  - [Project 1]:
    - Deadline:
    - Status:
  - [Project 2]:
    - Deadline:
    - Status:

## Session State
- Current Topic:
- Open Questions:
- Action Items:
"#;

const INSTRUCTIONS: &str = r#"You are a helpful assistant with advanced memory capabilities.
You can remember previous conversations and user preferences.

MEMORY CAPABILITIES:
1. Conversation History: You remember the last 20 messages in the conversation
2. Semantic Recall: You can find relevant information from past conversations using semantic search
3. Working Memory: You maintain a structured profile of the user with personal info, preferences, projects, and session state

IMPORTANT: You have access to working memory to store persistent information about the user.
When you learn something important about the user (name, location, preferences, projects, etc.),
update your working memory according to the template.

Always refer to your working memory before asking for information the user has already provided.
Use the information in your working memory to provide personalized responses.

When the user shares personal information, acknowledge it and update your working memory accordingly.
Track project information, deadlines, and action items as the user discusses them."#;

/// Build the memory assistant definition.
pub fn memory_agent() -> AgentDefinition {
    AgentDefinition {
        name: "MemoryAgent".to_string(),
        instructions: INSTRUCTIONS.to_string(),
        model: DEFAULT_MODEL.to_string(),
        tools: Vec::new(),
        mcp_servers: HashMap::new(),
        memory: MemoryConfig {
            storage_url: MEMORY_DB_URL.to_string(),
            vector_url: VECTOR_DB_URL.to_string(),
            embedder: EMBEDDER_MODEL.to_string(),
            last_messages: HISTORY_WINDOW,
            semantic_recall: SemanticRecallConfig::default(),
            working_memory: WorkingMemoryConfig {
                enabled: true,
                template: USER_PROFILE_TEMPLATE.to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_agent_has_no_tools() {
        let agent = memory_agent();
        assert!(agent.tools.is_empty());
        assert!(agent.mcp_servers.is_empty());
    }

    #[test]
    fn profile_template_covers_all_sections() {
        let agent = memory_agent();
        let template = &agent.memory.working_memory.template;
        for section in [
            "## Personal Info",
            "## Preferences",
            "## Project Information",
            "## Session State",
        ] {
            assert!(template.contains(section), "missing section {}", section);
        }
    }

    #[test]
    fn vector_store_is_separate_from_message_store() {
        let agent = memory_agent();
        assert_ne!(agent.memory.storage_url, agent.memory.vector_url);
    }

    #[test]
    fn instructions_mention_memory_capabilities() {
        let agent = memory_agent();
        assert!(agent.instructions.contains("Semantic Recall"));
        assert!(agent.instructions.contains("Working Memory"));
    }
}

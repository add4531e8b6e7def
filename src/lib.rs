//! Financial Assistant Agents
//!
//! Configures two conversational assistants — a financial assistant and a
//! memory-focused assistant — together with their tool wiring (local
//! transaction data plus remote MCP servers) and memory settings, and
//! implements the content processing workflow they expose:
//!
//! VALIDATE → ENRICH → SUMMARIZE
//!
//! The conversational loop, memory storage, semantic search, and the MCP
//! protocol itself belong to the surrounding agent framework; this crate
//! supplies the configuration and the workflow.

pub mod agents;
pub mod clock;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod tools;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use pipeline::ContentWorkflow;

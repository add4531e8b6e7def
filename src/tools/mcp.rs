//! Remote tool-server wiring
//!
//! Declares the MCP servers the assistants draw remote tools from: Gmail
//! via Zapier, GitHub via Smithery, Hacker News search, and a filesystem
//! server rooted at the notes directory. Only the wiring lives here —
//! connecting to the servers and speaking the protocol is the surrounding
//! framework's job.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::Path;
use url::Url;

const SMITHERY_GITHUB_SERVER: &str = "https://server.smithery.ai/@smithery-ai/github";

/// How one remote tool server is reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "transport", rename_all = "snake_case")]
pub enum McpServerConfig {
    /// Server reachable over HTTP
    Http { url: String },
    /// Server spawned as a local subprocess speaking stdio
    Stdio { command: String, args: Vec<String> },
}

/// Assemble the Smithery-hosted GitHub server URL, carrying the access
/// token as server config in the query string.
fn smithery_url(api_key: &str, profile: &str, github_token: Option<&str>) -> Option<String> {
    let mut url = Url::parse(SMITHERY_GITHUB_SERVER).ok()?;

    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("profile", profile);

    if let Some(token) = github_token {
        let config = serde_json::json!({ "githubPersonalAccessToken": token });
        url.query_pairs_mut()
            .append_pair("config", &config.to_string());
    }

    Some(url.into())
}

fn smithery_github_url_from_env() -> Option<String> {
    let api_key = env::var("SMITHERY_API_KEY").ok()?;
    let profile = env::var("SMITHERY_PROFILE").ok()?;
    let token = env::var("GITHUB_TOKEN").ok();
    smithery_url(&api_key, &profile, token.as_deref())
}

/// The default server set. HTTP-backed entries appear only when their
/// environment configuration is present; the stdio-backed entries are
/// always wired.
pub fn default_servers(notes_dir: &Path) -> HashMap<String, McpServerConfig> {
    let mut servers = HashMap::new();

    if let Ok(url) = env::var("ZAPIER_MCP_URL") {
        servers.insert("zapier".to_string(), McpServerConfig::Http { url });
    }

    if let Some(url) = smithery_github_url_from_env() {
        servers.insert("github".to_string(), McpServerConfig::Http { url });
    }

    servers.insert(
        "hackernews".to_string(),
        McpServerConfig::Stdio {
            command: "npx".to_string(),
            args: vec!["-y".to_string(), "@devabdultech/hn-mcp-server".to_string()],
        },
    );

    servers.insert(
        "text_editor".to_string(),
        McpServerConfig::Stdio {
            command: "pnpx".to_string(),
            args: vec![
                "@modelcontextprotocol/server-filesystem".to_string(),
                notes_dir.display().to_string(),
            ],
        },
    );

    servers
}

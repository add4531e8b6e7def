//! Tool trait and registry
//!
//! Local tools are deterministic data-access operations the assistants can
//! call. Remote tool servers (email, source control, forum search, notes)
//! are declared in [`mcp`] and served by external processes.

use crate::error::AssistantError;
use crate::models::{ToolInput, ToolOutput};
use crate::Result;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Duration;

pub mod mcp;

/// Trait for a single tool (deterministic execution)
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn execute(&self, input: &ToolInput) -> Result<ToolOutput>;
}

/// Tool registry for looking up and executing tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
struct TransactionsApiClient {
    client: Client,
    url: String,
}

impl TransactionsApiClient {
    fn from_env() -> Option<Self> {
        let url = env::var("TRANSACTIONS_API_URL").ok()?;

        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(30))
            .build()
            .ok()?;

        Some(Self { client, url })
    }

    async fn fetch_csv(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            AssistantError::Tool(format!("Transactions request failed: {}", e))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Tool(format!("Invalid transactions response: {}", e)))?;

        if !status.is_success() {
            return Err(AssistantError::Tool(format!(
                "Transactions endpoint returned {}",
                status
            )));
        }

        Ok(body)
    }
}

/// Parse a CSV document (header row + comma-separated fields) into one
/// JSON object per data row, keyed by the header names. Blank lines are
/// skipped; a row's trailing fields beyond the header are ignored.
fn parse_transactions_csv(csv: &str) -> Vec<Value> {
    let mut lines = csv.lines().filter(|line| !line.trim().is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();

    lines
        .map(|line| {
            let mut row = serde_json::Map::new();
            for (column, field) in columns.iter().zip(line.split(',')) {
                row.insert(
                    (*column).to_string(),
                    Value::String(field.trim().to_string()),
                );
            }
            Value::Object(row)
        })
        .collect()
}

/// Fetches the user's transaction data for the financial assistant.
pub struct GetTransactionsTool {
    api: Option<TransactionsApiClient>,
}

impl GetTransactionsTool {
    fn new(api: Option<TransactionsApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl Tool for GetTransactionsTool {
    fn name(&self) -> &'static str {
        "get_transactions"
    }

    fn description(&self) -> &'static str {
        "Fetch the user's financial transaction data as structured rows"
    }

    async fn execute(&self, _input: &ToolInput) -> Result<ToolOutput> {
        let api = self.api.as_ref().ok_or_else(|| {
            AssistantError::Tool("TRANSACTIONS_API_URL is not configured".to_string())
        })?;

        let csv = api.fetch_csv().await?;
        let transactions = parse_transactions_csv(&csv);

        Ok(ToolOutput {
            success: true,
            data: json!({
                "count": transactions.len(),
                "transactions": transactions,
            }),
            error: None,
        })
    }
}

/// Create the default registry with the locally-implemented tools.
pub fn create_default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GetTransactionsTool::new(
        TransactionsApiClient::from_env(),
    )));
    registry
}

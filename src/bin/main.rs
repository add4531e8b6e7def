use financial_assistant_agents::{
    agents::default_agents,
    models::{ContentInput, ContentType},
    pipeline::ContentWorkflow,
    tools::create_default_registry,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Assistant workspace starting");

    let registry = create_default_registry();
    info!(tools = registry.list().len(), "Local tools registered");

    for agent in default_agents() {
        info!(
            name = %agent.name,
            model = %agent.model,
            tools = agent.tools.len(),
            mcp_servers = agent.mcp_servers.len(),
            "Configured agent"
        );
    }

    let workflow = ContentWorkflow::new();
    let input = ContentInput::new(
        "Climate change is one of the most pressing challenges of our time, \
         requiring immediate action from governments, businesses, and individuals worldwide.",
        ContentType::Blog,
    );

    info!(content_type = %input.content_type, "Running content workflow");

    match workflow.run(input).await {
        Ok(result) => {
            info!("Workflow run successful");
            println!("\n=== CONTENT WORKFLOW RESULT ===");
            println!("Word count: {}", result.word_count);
            println!("Reading time: {} minute(s)", result.metadata.reading_time);
            println!("Difficulty: {}", result.metadata.difficulty);
            println!("Processed at: {}", result.metadata.processed_at.to_rfc3339());
            println!("\nSummary: {}", result.summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("Workflow failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}

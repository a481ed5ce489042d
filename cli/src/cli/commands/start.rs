use std::sync::Arc;

use watson_gateway_core::config::Config;
use watson_gateway_core::gateway::GatewayServer;
use watson_gateway_core::watson::WatsonAssistant;

pub async fn run(port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::from_env()?;

    // Apply port override if provided
    if let Some(port) = port_override {
        config.server.port = port;
    }

    tracing::info!("Starting Watson gateway...");
    tracing::info!("  Host: {}", config.server.host);
    tracing::info!("  Port: {}", config.server.port);
    tracing::info!("  Assistant: {}", config.watson.assistant_id);

    let provider = Arc::new(WatsonAssistant::new(&config.watson));

    let server = GatewayServer::new(config.server.host.clone(), config.server.port, provider);

    tracing::info!(
        "Gateway starting on http://{}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Press Ctrl+C to stop");

    // Run server (blocks until shutdown)
    server.run().await?;

    Ok(())
}

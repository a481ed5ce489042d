use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("watson_gateway=info".parse()?)
                .add_directive("watson_gateway_core=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Start { port } => {
            cli::commands::start::run(port).await?;
        }
    }

    Ok(())
}

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "watson-gateway")]
#[command(author, version, about = "Watson gateway CLI - forward session and message requests to Watson Assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway server
    Start {
        /// Port to listen on (overrides PORT from the environment)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

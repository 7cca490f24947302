// src/main.rs
use std::process::exit;
use clap::Parser;
use tracing::error;

use fanjoin::cli::{log_subscriber, App, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging before anything else can emit events
    let (subscriber, log_handle) = log_subscriber(args.verbose, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)?;

    let app = match App::new(args) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            exit(1);
        }
    };
    app.apply_log_level(&log_handle)?;

    if let Err(e) = app.run().await {
        error!("Command execution failed: {}", e);
        exit(1);
    }

    Ok(())
}

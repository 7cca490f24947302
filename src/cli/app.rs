use tracing::{info, debug};
use tracing_subscriber::filter::LevelFilter;

use crate::config::Config;
use crate::error::{FanjoinResult, FanjoinError};

use super::commands::{self, Args};
use super::logging::LogHandle;

/// The main application struct
pub struct App {
    args: Args,
    config: Config,
}

impl App {
    /// Load configuration for the parsed arguments
    pub fn new(args: Args) -> FanjoinResult<Self> {
        let config = Config::load(args.config.as_deref())?;
        Ok(Self { args, config })
    }

    /// Switch logging to the configured level unless `--verbose` was given
    pub fn apply_log_level(&self, handle: &LogHandle) -> FanjoinResult<()> {
        if self.args.verbose {
            return Ok(());
        }

        let level = self.config.log_level()?;
        debug!("Switching log level to {}", level);
        handle
            .reload(LevelFilter::from_level(level))
            .map_err(|e| FanjoinError::ConfigError(format!("Failed to apply log level: {}", e)))
    }

    /// Run the application
    pub async fn run(&self) -> FanjoinResult<()> {
        info!("Starting fanjoin v{}", env!("CARGO_PKG_VERSION"));

        match &self.args.command {
            Some(command) => {
                commands::execute_command(command, &self.config, self.args.config.as_deref()).await?;
            }
            None => {
                println!("No command specified. Use --help for available commands.");
            }
        }

        Ok(())
    }
}

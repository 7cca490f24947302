use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};
use tracing::{info, debug};

use crate::config::Config;
use crate::engine::Workflow;
use crate::error::FanjoinResult;
use crate::reporting::{ReportFormat, ReportManager};

#[derive(Parser, Debug)]
#[command(name = "fanjoin")]
#[command(about = "Run independent operations in parallel and merge their results")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, short, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process numbers with every operation in parallel
    Run {
        #[arg(allow_negative_numbers = true, help = "Numbers to process (defaults to workflow.default_input)")]
        inputs: Vec<i64>,

        #[arg(short, long, help = "Report format (text, json)")]
        format: Option<String>,

        #[arg(long, help = "Simulated work per operation in milliseconds")]
        delay_ms: Option<u64>,

        #[arg(short = 'n', long, help = "Maximum concurrent tasks")]
        concurrent: Option<usize>,

        #[arg(short, long, help = "Write the report to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Initialize the configuration
    Init {
        #[arg(short, long, help = "Force overwrite existing configuration")]
        force: bool,
    },

    /// Print the effective configuration
    Config,
}

/// Execute a parsed command against the loaded configuration
pub async fn execute_command(command: &Commands, config: &Config, config_path: Option<&Path>) -> FanjoinResult<()> {
    match command {
        Commands::Run { inputs, format, delay_ms, concurrent, output } => {
            let format = format.as_deref().map(str::parse::<ReportFormat>).transpose()?;
            let inputs = if inputs.is_empty() {
                vec![config.workflow.default_input]
            } else {
                inputs.clone()
            };

            let mut config = config.clone();
            if let Some(delay_ms) = delay_ms {
                config.workflow.delay_ms = *delay_ms;
            }
            if let Some(concurrent) = concurrent {
                config.workflow.max_concurrent_tasks = *concurrent;
            }
            config.validate()?;

            let workflow = Workflow::from_config(&config)?;
            debug!(
                "Workflow {} ready: operations {:?}, max concurrency {}, delay {:?}",
                workflow.name,
                workflow.operation_names(),
                workflow.executor().max_concurrent_tasks(),
                workflow.executor().delay()
            );

            let summaries = workflow.invoke_many(&inputs).await?;

            let reports = ReportManager::new();
            match output {
                Some(path) => {
                    let written = reports.write_report(&summaries, format, path).await?;
                    println!("Report written to {}", written.display());
                }
                None => {
                    let rendered = reports.render(&summaries, format.unwrap_or(ReportFormat::Text))?;
                    print!("{}", rendered);
                }
            }
        }
        Commands::Init { force } => {
            let path = Config::init(config_path, *force)?;
            println!("Configuration initialized at {}", path.display());
        }
        Commands::Config => {
            info!("Printing effective configuration");
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

// src/config/mod.rs
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{info, warn, Level};

pub use schema::{Config, LoggingConfig, WorkflowConfig};

use crate::error::{FanjoinResult, FanjoinError};

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Centralized configuration handling
impl Config {
    /// Load configuration from a file or fall back to the built-in defaults
    pub fn load(config_path: Option<&Path>) -> FanjoinResult<Self> {
        info!("Loading configuration");

        let mut config_builder = ConfigLoader::builder();

        // Default configuration
        config_builder = config_builder.add_source(
            config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml)
        );

        // User-provided configuration
        if let Some(path) = config_path {
            if path.exists() {
                config_builder = config_builder.add_source(config::File::from(path));
                info!("Loading user configuration from: {}", path.display());
            } else {
                warn!("Specified configuration file not found: {}", path.display());
            }
        } else {
            let default_path = Self::get_default_config_path();
            if default_path.exists() {
                config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
                info!("Loading default configuration from: {}", default_path.display());
            } else {
                info!("No existing configuration found, using built-in defaults");
            }
        }

        // Environment variables, e.g. FANJOIN_WORKFLOW__DELAY_MS=500
        config_builder = config_builder.add_source(
            config::Environment::with_prefix("FANJOIN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let config: Config = config_builder
            .build()
            .map_err(|e| FanjoinError::ConfigError(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| FanjoinError::ConfigError(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Reject values the workflow cannot run with
    pub fn validate(&self) -> FanjoinResult<()> {
        if self.workflow.max_concurrent_tasks == 0 {
            return Err(FanjoinError::ConfigError(
                "workflow.max_concurrent_tasks must be at least 1".to_string(),
            ));
        }
        if self.workflow.name.trim().is_empty() {
            return Err(FanjoinError::ConfigError("workflow.name must not be empty".to_string()));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parse the configured log level
    pub fn log_level(&self) -> FanjoinResult<Level> {
        self.logging.level.parse::<Level>().map_err(|_| {
            FanjoinError::ConfigError(format!("Invalid log level: {}", self.logging.level))
        })
    }

    /// Get the default configuration path
    pub fn get_default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fanjoin/config.toml")
    }

    /// Write the default configuration to `path`, or the default location
    pub fn init(path: Option<&Path>, force: bool) -> FanjoinResult<PathBuf> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| FanjoinError::FileError {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
        }

        if config_path.exists() && !force {
            return Err(FanjoinError::ConfigError(
                format!("Configuration already exists at {}. Use --force to overwrite.", config_path.display())
            ));
        }

        Config::default().save(&config_path)?;

        Ok(config_path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> FanjoinResult<()> {
        let config_str = self.to_toml()?;

        std::fs::write(path, config_str)
            .map_err(|e| FanjoinError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write configuration: {}", e),
            })?;

        info!("Configuration saved to {}", path.display());

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> FanjoinResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| FanjoinError::SerializationError(format!("Failed to serialize configuration: {}", e)))
    }
}

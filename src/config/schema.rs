use serde::{Serialize, Deserialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub workflow: WorkflowConfig,
    pub logging: LoggingConfig,
}

/// Workflow settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowConfig {
    pub name: String,
    pub default_input: i64,
    /// Simulated work per operation, in milliseconds
    pub delay_ms: u64,
    pub max_concurrent_tasks: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workflow: WorkflowConfig {
                name: "process_number".to_string(),
                default_input: 5,
                delay_ms: 2000,
                max_concurrent_tasks: 3,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

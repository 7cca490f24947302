pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod reporting;

// Re-export main types for easier access
pub use cli::App;
pub use config::Config;
pub use engine::{
    Operation,
    OperationResult,
    OperationValue,
    ParallelExecutor,
    SummaryResult,
    Workflow
};
pub use error::{FanjoinError, FanjoinResult};
pub use reporting::{ReportFormat, ReportManager};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FanjoinError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate operation: {0}")]
    DuplicateOperation(String),

    #[error("Arithmetic overflow: {operation} on input {input}")]
    ArithmeticOverflow {
        operation: String,
        input: i64,
    },

    #[error("Task execution failed: {task_id} - {message}")]
    TaskExecutionError {
        task_id: String,
        message: String,
    },

    #[error("Incomplete results: expected {expected}, received {received}")]
    IncompleteResults {
        expected: usize,
        received: usize,
    },

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<anyhow::Error> for FanjoinError {
    fn from(error: anyhow::Error) -> Self {
        FanjoinError::UnexpectedError(error.to_string())
    }
}

pub type FanjoinResult<T> = std::result::Result<T, FanjoinError>;

// src/engine/task.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{FanjoinResult, FanjoinError};
use super::operation::OperationResult;

/// Result of task execution
#[derive(Debug, Clone, Serialize)]
pub struct TaskResult {
    pub task_id: String,
    pub operation: OperationResult,
    pub status: TaskStatus,
    pub execution_time: Duration,
}

/// Status of a task
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TaskStatus {
    /// Waiting for a concurrency permit
    Pending,
    Running,
    Completed,
    Failed,
}

impl TaskStatus {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => TaskStatus::Pending,
            1 => TaskStatus::Running,
            2 => TaskStatus::Completed,
            _ => TaskStatus::Failed,
        }
    }
}

/// Status shared between a spawned task and its handle
#[derive(Debug, Clone)]
pub(crate) struct SharedStatus(Arc<AtomicU8>);

impl SharedStatus {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicU8::new(TaskStatus::Pending as u8)))
    }

    pub(crate) fn set(&self, status: TaskStatus) {
        self.0.store(status as u8, Ordering::Release);
    }

    fn get(&self) -> TaskStatus {
        TaskStatus::from_u8(self.0.load(Ordering::Acquire))
    }
}

/// Deferred result of a submitted task
///
/// Returned immediately by [`ParallelExecutor::submit`](super::ParallelExecutor::submit);
/// [`TaskHandle::result`] waits for the task to finish.
pub struct TaskHandle {
    task_id: String,
    status: SharedStatus,
    inner: JoinHandle<FanjoinResult<TaskResult>>,
}

impl TaskHandle {
    pub(crate) fn new(
        task_id: String,
        status: SharedStatus,
        inner: JoinHandle<FanjoinResult<TaskResult>>,
    ) -> Self {
        Self { task_id, status, inner }
    }

    /// Get the task ID
    pub fn id(&self) -> &str {
        &self.task_id
    }

    /// Current status, without waiting for the task
    pub fn status(&self) -> TaskStatus {
        match self.status.get() {
            // A task that ended without recording an outcome panicked or was aborted
            TaskStatus::Pending | TaskStatus::Running if self.inner.is_finished() => TaskStatus::Failed,
            status => status,
        }
    }

    /// Wait for the task and return its result
    pub async fn result(self) -> FanjoinResult<TaskResult> {
        debug!("Waiting on task {} ({:?})", self.task_id, self.status());

        match self.inner.await {
            Ok(result) => result,
            Err(e) => Err(FanjoinError::TaskExecutionError {
                task_id: self.task_id,
                message: if e.is_panic() {
                    "task panicked".to_string()
                } else {
                    format!("task did not complete: {}", e)
                },
            }),
        }
    }
}

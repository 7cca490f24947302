// src/engine/parallel.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{info, debug, error};

use crate::error::{FanjoinResult, FanjoinError};
use super::operation::Operation;
use super::task::{SharedStatus, TaskHandle, TaskResult, TaskStatus};

/// Executor for running operations in parallel
pub struct ParallelExecutor {
    max_concurrent_tasks: usize,
    semaphore: Arc<Semaphore>,
    delay: Duration,
    next_task: AtomicU64,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(max_concurrent_tasks: usize, delay: Duration) -> FanjoinResult<Self> {
        if max_concurrent_tasks == 0 {
            return Err(FanjoinError::InvalidInput(
                "max_concurrent_tasks must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            max_concurrent_tasks,
            semaphore: Arc::new(Semaphore::new(max_concurrent_tasks)),
            delay,
            next_task: AtomicU64::new(0),
        })
    }

    pub fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent_tasks
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawn an operation and return a handle to its eventual result
    pub fn submit(&self, operation: Arc<dyn Operation>, num: i64) -> TaskHandle {
        let seq = self.next_task.fetch_add(1, Ordering::Relaxed);
        let task_id = format!("{}-{}", operation.name(), seq);
        let semaphore = self.semaphore.clone();
        let delay = self.delay;

        debug!("Submitting task {} for input {}", task_id, num);

        let id = task_id.clone();
        let status = SharedStatus::new();
        let task_status = status.clone();
        let inner = tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.map_err(|e| {
                task_status.set(TaskStatus::Failed);
                FanjoinError::TaskExecutionError {
                    task_id: id.clone(),
                    message: format!("Failed to acquire permit: {}", e),
                }
            })?;
            task_status.set(TaskStatus::Running);

            let start_time = tokio::time::Instant::now();
            let operation_result = match operation.execute(num, delay).await {
                Ok(result) => result,
                Err(e) => {
                    task_status.set(TaskStatus::Failed);
                    return Err(e);
                }
            };
            let execution_time = start_time.elapsed();
            task_status.set(TaskStatus::Completed);

            debug!("Task {} completed in {:?}", id, execution_time);

            Ok::<_, FanjoinError>(TaskResult {
                task_id: id,
                operation: operation_result,
                status: TaskStatus::Completed,
                execution_time,
            })
        });

        TaskHandle::new(task_id, status, inner)
    }

    /// Submit every operation, then wait for all of them
    ///
    /// Results come back in submission order. The first failed task fails the
    /// whole batch, but only after every task has been joined.
    pub async fn execute_all(
        &self,
        operations: &[Arc<dyn Operation>],
        num: i64,
    ) -> FanjoinResult<Vec<TaskResult>> {
        if operations.is_empty() {
            info!("No operations to execute");
            return Ok(Vec::new());
        }

        info!(
            "Executing {} operations with max concurrency {}",
            operations.len(),
            self.max_concurrent_tasks
        );

        let handles: Vec<TaskHandle> = operations
            .iter()
            .map(|op| self.submit(op.clone(), num))
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        let mut first_error = None;

        for handle in handles {
            match handle.result().await {
                Ok(result) => results.push(result),
                Err(e) => {
                    error!("Task execution failed: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(results),
        }
    }
}

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use tracing::{info, debug};

use crate::config::Config;
use crate::error::{FanjoinResult, FanjoinError};
use super::operation::{default_operations, Operation, OperationResult, OperationValue};
use super::parallel::ParallelExecutor;

/// Merged result of one workflow invocation
///
/// `operations` keeps registration order and serializes as a name -> result map.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub input: i64,
    pub processing_time: String,
    #[serde(serialize_with = "serialize_operations")]
    pub operations: Vec<OperationResult>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SummaryResult {
    /// Look up one operation's result by name
    pub fn get(&self, operation: &str) -> Option<OperationValue> {
        self.operations
            .iter()
            .find(|r| r.operation == operation)
            .map(|r| r.result)
    }
}

fn serialize_operations<S: Serializer>(operations: &[OperationResult], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(operations.len()))?;
    for op in operations {
        map.serialize_entry(&op.operation, &op.result)?;
    }
    map.end()
}

/// Entry point that fans operations out over one input and joins the results
pub struct Workflow {
    pub name: String,
    operations: Vec<Arc<dyn Operation>>,
    executor: ParallelExecutor,
}

impl Workflow {
    /// Create a new workflow
    pub fn new(
        name: String,
        operations: Vec<Arc<dyn Operation>>,
        executor: ParallelExecutor,
    ) -> FanjoinResult<Self> {
        if operations.is_empty() {
            return Err(FanjoinError::InvalidInput(format!(
                "Workflow {} has no operations",
                name
            )));
        }

        {
            let mut seen = HashSet::new();
            for op in &operations {
                if !seen.insert(op.name()) {
                    return Err(FanjoinError::DuplicateOperation(op.name().to_string()));
                }
            }
        }

        Ok(Self {
            name,
            operations,
            executor,
        })
    }

    /// Build the default workflow from configuration
    pub fn from_config(config: &Config) -> FanjoinResult<Self> {
        let executor = ParallelExecutor::new(
            config.workflow.max_concurrent_tasks,
            Duration::from_millis(config.workflow.delay_ms),
        )?;

        Self::new(config.workflow.name.clone(), default_operations(), executor)
    }

    pub fn executor(&self) -> &ParallelExecutor {
        &self.executor
    }

    /// Names of the registered operations, in registration order
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.name()).collect()
    }

    /// Run every operation on `num` and merge their results
    pub async fn invoke(&self, num: i64) -> FanjoinResult<SummaryResult> {
        info!("Starting workflow {} on number: {}", self.name, num);
        let start_time = tokio::time::Instant::now();

        let task_results = self.executor.execute_all(&self.operations, num).await?;

        let elapsed = start_time.elapsed();

        if task_results.len() != self.operations.len() {
            return Err(FanjoinError::IncompleteResults {
                expected: self.operations.len(),
                received: task_results.len(),
            });
        }

        let operations: Vec<OperationResult> = task_results
            .into_iter()
            .map(|task| {
                debug!("Merging result of task {}", task.task_id);
                task.operation
            })
            .collect();

        info!(
            "All operations completed in {:.2} seconds!",
            elapsed.as_secs_f64()
        );

        Ok(SummaryResult {
            input: num,
            processing_time: format_processing_time(elapsed),
            operations,
            elapsed,
        })
    }

    /// Invoke the workflow once per input, one input after another
    pub async fn invoke_many(&self, inputs: &[i64]) -> FanjoinResult<Vec<SummaryResult>> {
        let mut summaries = Vec::with_capacity(inputs.len());
        for &num in inputs {
            summaries.push(self.invoke(num).await?);
        }
        Ok(summaries)
    }
}

fn format_processing_time(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}

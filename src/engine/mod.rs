mod operation;
mod parallel;
mod task;
mod workflow;

pub use operation::{
    add_ten, multiply_by_two, divide_by_self, default_operations,
    AddTen, MultiplyByTwo, DivideBySelf, Operation, OperationResult, OperationValue, UNDEFINED,
};
pub use parallel::ParallelExecutor;
pub use task::{TaskHandle, TaskResult, TaskStatus};
pub use workflow::{Workflow, SummaryResult};

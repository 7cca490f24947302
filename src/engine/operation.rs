// src/engine/operation.rs
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Serializer};
use tracing::{info, debug};

use crate::error::{FanjoinResult, FanjoinError};

/// Sentinel written in place of a number when an operation has no defined result
pub const UNDEFINED: &str = "undefined";

/// Value produced by an operation: either a number or the "undefined" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationValue {
    Number(i64),
    Undefined,
}

impl fmt::Display for OperationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationValue::Number(n) => write!(f, "{}", n),
            OperationValue::Undefined => f.write_str(UNDEFINED),
        }
    }
}

impl Serialize for OperationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OperationValue::Number(n) => serializer.serialize_i64(*n),
            OperationValue::Undefined => serializer.serialize_str(UNDEFINED),
        }
    }
}

impl From<i64> for OperationValue {
    fn from(n: i64) -> Self {
        OperationValue::Number(n)
    }
}

/// Output of a single operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub operation: String,
    pub result: OperationValue,
}

/// An independent unit of work applied to the shared input
#[async_trait]
pub trait Operation: Send + Sync {
    /// Name used as the key in the merged summary
    fn name(&self) -> &str;

    /// Compute the result for `num`
    fn apply(&self, num: i64) -> FanjoinResult<OperationValue>;

    /// Wait out the simulated work, then compute
    async fn execute(&self, num: i64, delay: Duration) -> FanjoinResult<OperationResult> {
        info!("Starting {} operation on {}", self.name(), num);
        tokio::time::sleep(delay).await;

        let result = self.apply(num)?;
        info!("{} complete: {} -> {}", self.name(), num, result);

        Ok(OperationResult {
            operation: self.name().to_string(),
            result,
        })
    }
}

/// Add 10 to the input
pub fn add_ten(num: i64) -> FanjoinResult<OperationValue> {
    num.checked_add(10)
        .map(OperationValue::Number)
        .ok_or_else(|| FanjoinError::ArithmeticOverflow {
            operation: AddTen::NAME.to_string(),
            input: num,
        })
}

/// Multiply the input by 2
pub fn multiply_by_two(num: i64) -> FanjoinResult<OperationValue> {
    num.checked_mul(2)
        .map(OperationValue::Number)
        .ok_or_else(|| FanjoinError::ArithmeticOverflow {
            operation: MultiplyByTwo::NAME.to_string(),
            input: num,
        })
}

/// Divide the input by itself; zero yields the sentinel instead of failing
pub fn divide_by_self(num: i64) -> FanjoinResult<OperationValue> {
    if num == 0 {
        debug!("Division by zero for input {}, returning sentinel", num);
        return Ok(OperationValue::Undefined);
    }
    Ok(OperationValue::Number(num / num))
}

pub struct AddTen;

impl AddTen {
    pub const NAME: &'static str = "add";
}

#[async_trait]
impl Operation for AddTen {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, num: i64) -> FanjoinResult<OperationValue> {
        add_ten(num)
    }
}

pub struct MultiplyByTwo;

impl MultiplyByTwo {
    pub const NAME: &'static str = "multiply";
}

#[async_trait]
impl Operation for MultiplyByTwo {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, num: i64) -> FanjoinResult<OperationValue> {
        multiply_by_two(num)
    }
}

pub struct DivideBySelf;

impl DivideBySelf {
    pub const NAME: &'static str = "divide";
}

#[async_trait]
impl Operation for DivideBySelf {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn apply(&self, num: i64) -> FanjoinResult<OperationValue> {
        divide_by_self(num)
    }
}

/// The built-in operations, in declaration order
pub fn default_operations() -> Vec<Arc<dyn Operation>> {
    vec![
        Arc::new(AddTen),
        Arc::new(MultiplyByTwo),
        Arc::new(DivideBySelf),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ten() {
        for n in [-7, 1, 5, 1000] {
            assert_eq!(add_ten(n).unwrap(), OperationValue::Number(n + 10));
        }
    }

    #[test]
    fn test_multiply_by_two() {
        for n in [-3, 0, 5, 21] {
            assert_eq!(multiply_by_two(n).unwrap(), OperationValue::Number(n * 2));
        }
    }

    #[test]
    fn test_divide_by_self() {
        for n in [-9, 1, 5, i64::MAX] {
            assert_eq!(divide_by_self(n).unwrap(), OperationValue::Number(1));
        }
        assert_eq!(divide_by_self(0).unwrap(), OperationValue::Undefined);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = add_ten(i64::MAX).unwrap_err();
        assert!(matches!(err, FanjoinError::ArithmeticOverflow { ref operation, .. } if operation == "add"));
        assert!(multiply_by_two(i64::MIN).is_err());
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(OperationValue::Number(15).to_string(), "15");
        assert_eq!(OperationValue::Undefined.to_string(), "undefined");
        assert_eq!(serde_json::to_string(&OperationValue::Number(-2)).unwrap(), "-2");
        assert_eq!(serde_json::to_string(&OperationValue::Undefined).unwrap(), "\"undefined\"");
    }

    #[test]
    fn test_default_operation_names() {
        let names: Vec<String> = default_operations().iter().map(|op| op.name().to_string()).collect();
        assert_eq!(names, vec!["add", "multiply", "divide"]);
    }

    #[tokio::test]
    async fn test_execute_waits_and_tags_result() {
        let delay = Duration::from_millis(20);
        let start = std::time::Instant::now();
        let result = DivideBySelf.execute(0, delay).await.unwrap();

        assert!(start.elapsed() >= delay);
        assert_eq!(result, OperationResult {
            operation: "divide".to_string(),
            result: OperationValue::Undefined,
        });
    }
}

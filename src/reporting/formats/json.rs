use async_trait::async_trait;

use crate::engine::SummaryResult;
use crate::error::{FanjoinResult, FanjoinError};
use crate::reporting::format::{ReportFormat, ReportGenerator};

/// JSON report generator
///
/// A single summary renders as an object, several as an array.
#[derive(Default)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    /// Create a new JSON report generator
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportGenerator for JsonReportGenerator {
    fn render(&self, summaries: &[SummaryResult]) -> FanjoinResult<String> {
        let json = match summaries {
            [single] => serde_json::to_string_pretty(single),
            many => serde_json::to_string_pretty(many),
        };
        json.map_err(|e| FanjoinError::SerializationError(format!("Failed to serialize report: {}", e)))
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::JSON
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::{OperationResult, OperationValue};

    fn summary(input: i64) -> SummaryResult {
        SummaryResult {
            input,
            processing_time: "2.00 seconds".to_string(),
            operations: vec![OperationResult {
                operation: "divide".to_string(),
                result: OperationValue::Undefined,
            }],
            elapsed: Duration::from_secs(2),
        }
    }

    #[test]
    fn test_single_summary_is_an_object() {
        let json = JsonReportGenerator::new().render(&[summary(0)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["input"], 0);
        assert_eq!(value["operations"]["divide"], "undefined");
    }

    #[test]
    fn test_many_summaries_are_an_array() {
        let json = JsonReportGenerator::new().render(&[summary(1), summary(2)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["input"], 2);
    }
}

use std::fmt::Write;
use async_trait::async_trait;

use crate::engine::SummaryResult;
use crate::error::FanjoinResult;
use crate::reporting::format::{ReportFormat, ReportGenerator};

/// Plain text report generator
#[derive(Default)]
pub struct TextReportGenerator;

impl TextReportGenerator {
    /// Create a new text report generator
    pub fn new() -> Self {
        Self
    }

    fn render_summary(&self, out: &mut String, summary: &SummaryResult) {
        // Writing into a String cannot fail
        let _ = writeln!(out, "Final Results:");
        let _ = writeln!(out, "Input number: {}", summary.input);
        let _ = writeln!(out, "Processing time: {}", summary.processing_time);
        let _ = writeln!(out, "Results:");
        for op in &summary.operations {
            let _ = writeln!(out, "  {}: {}", op.operation, op.result);
        }
    }
}

#[async_trait]
impl ReportGenerator for TextReportGenerator {
    fn render(&self, summaries: &[SummaryResult]) -> FanjoinResult<String> {
        let mut out = String::new();
        for (i, summary) in summaries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_summary(&mut out, summary);
        }
        Ok(out)
    }

    fn supported_format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::{OperationResult, OperationValue};

    #[test]
    fn test_render_zero_input() {
        let summary = SummaryResult {
            input: 0,
            processing_time: "2.01 seconds".to_string(),
            operations: vec![
                OperationResult { operation: "add".to_string(), result: OperationValue::Number(10) },
                OperationResult { operation: "multiply".to_string(), result: OperationValue::Number(0) },
                OperationResult { operation: "divide".to_string(), result: OperationValue::Undefined },
            ],
            elapsed: Duration::from_millis(2010),
        };

        let text = TextReportGenerator::new().render(&[summary]).unwrap();

        assert_eq!(
            text,
            "Final Results:\n\
             Input number: 0\n\
             Processing time: 2.01 seconds\n\
             Results:\n  \
             add: 10\n  \
             multiply: 0\n  \
             divide: undefined\n"
        );
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(TextReportGenerator::new().render(&[]).unwrap(), "");
    }
}

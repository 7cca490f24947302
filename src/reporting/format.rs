use std::path::Path;
use std::str::FromStr;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};

use crate::engine::SummaryResult;
use crate::error::{FanjoinResult, FanjoinError};

/// Report format enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Text,
    JSON,
}

impl FromStr for ReportFormat {
    type Err = FanjoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::JSON),
            other => Err(FanjoinError::InvalidInput(format!("Unknown report format: {}", other))),
        }
    }
}

/// Report generator trait
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Render summaries in this generator's format
    fn render(&self, summaries: &[SummaryResult]) -> FanjoinResult<String>;

    /// Get the supported format
    fn supported_format(&self) -> ReportFormat;

    /// Render summaries and write them to `output_path`
    async fn generate(&self, summaries: &[SummaryResult], output_path: &Path) -> FanjoinResult<()> {
        let content = self.render(summaries)?;
        tokio::fs::write(output_path, content).await
            .map_err(|e| FanjoinError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write report: {}", e),
            })
    }
}

/// Convert report format to file extension
pub fn format_to_extension(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Text => "txt",
        ReportFormat::JSON => "json",
    }
}

/// Convert file extension to report format
pub fn extension_to_format(extension: &str) -> Option<ReportFormat> {
    match extension.to_lowercase().as_str() {
        "txt" | "text" => Some(ReportFormat::Text),
        "json" => Some(ReportFormat::JSON),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::JSON);
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("html".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_extensions() {
        assert_eq!(format_to_extension(ReportFormat::JSON), "json");
        assert_eq!(extension_to_format("TXT"), Some(ReportFormat::Text));
        assert_eq!(extension_to_format("md"), None);
    }
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, debug};

use crate::engine::SummaryResult;
use crate::error::{FanjoinResult, FanjoinError};
use super::format::{ReportFormat, ReportGenerator, extension_to_format, format_to_extension};
use super::formats::{JsonReportGenerator, TextReportGenerator};

/// Report generation manager
pub struct ReportManager {
    generators: HashMap<ReportFormat, Box<dyn ReportGenerator>>,
}

impl Default for ReportManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportManager {
    /// Create a new report manager with the built-in generators
    pub fn new() -> Self {
        let mut manager = Self {
            generators: HashMap::new(),
        };
        manager.register_generator(Box::new(TextReportGenerator::new()));
        manager.register_generator(Box::new(JsonReportGenerator::new()));
        manager
    }

    /// Register a new report generator
    pub fn register_generator(&mut self, generator: Box<dyn ReportGenerator>) {
        let format = generator.supported_format();
        debug!("Registering report generator for format: {:?}", format);
        self.generators.insert(format, generator);
    }

    fn generator(&self, format: ReportFormat) -> FanjoinResult<&dyn ReportGenerator> {
        self.generators
            .get(&format)
            .map(|g| g.as_ref())
            .ok_or_else(|| FanjoinError::InvalidInput(format!("No generator found for format {:?}", format)))
    }

    /// Render summaries in the given format
    pub fn render(&self, summaries: &[SummaryResult], format: ReportFormat) -> FanjoinResult<String> {
        self.generator(format)?.render(summaries)
    }

    /// Write summaries to a file and return the path written
    ///
    /// Without an explicit format the file extension decides, falling back to text.
    /// A path without an extension gets the one matching the format.
    pub async fn write_report(
        &self,
        summaries: &[SummaryResult],
        format: Option<ReportFormat>,
        output_path: &Path,
    ) -> FanjoinResult<PathBuf> {
        let extension = output_path.extension().and_then(|ext| ext.to_str());
        let format = format
            .or_else(|| extension.and_then(extension_to_format))
            .unwrap_or(ReportFormat::Text);
        let output_path = match extension {
            Some(_) => output_path.to_path_buf(),
            None => output_path.with_extension(format_to_extension(format)),
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await
                .map_err(|e| FanjoinError::FileError {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
        }

        self.generator(format)?.generate(summaries, &output_path).await?;
        info!("Generated {:?} report: {}", format, output_path.display());

        Ok(output_path)
    }
}

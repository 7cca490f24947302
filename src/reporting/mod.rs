mod format;
mod generator;
pub mod formats;

pub use format::{ReportFormat, ReportGenerator, format_to_extension, extension_to_format};
pub use generator::ReportManager;

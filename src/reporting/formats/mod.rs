pub mod json;
pub mod text;

pub use json::JsonReportGenerator;
pub use text::TextReportGenerator;

//! cardvision-export: JSON/CSV export of statement records and the processing summary.

pub mod csv_export;
pub mod format;
pub mod json;
pub mod summary;

pub use csv_export::to_csv;
pub use format::{ExportError, ExportFormat, default_file_name, render, write_export};
pub use json::{from_json, to_json};
pub use summary::ProcessingSummary;

//! Export formats, file naming and writing.

use cardvision_core::StatementRecord;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

use crate::{csv_export, json};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Buffer(#[from] std::io::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format '{other}' (expected json or csv)")),
        }
    }
}

/// `cardvision_analysis_20250916_142501.json`
pub fn default_file_name(format: ExportFormat, at: NaiveDateTime) -> String {
    format!(
        "cardvision_analysis_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

pub fn render(format: ExportFormat, records: &[StatementRecord]) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => json::to_json(records),
        ExportFormat::Csv => csv_export::to_csv(records),
    }
}

/// Render `records` and write them to `path`, replacing any existing file.
pub fn write_export(
    format: ExportFormat,
    records: &[StatementRecord],
    path: &Path,
) -> Result<(), ExportError> {
    let body = render(format, records)?;
    fs::write(path, body).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), %format, records = records.len(), "export written");
    Ok(())
}

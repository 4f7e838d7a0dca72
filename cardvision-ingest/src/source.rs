//! Statement sources: PDF (or pre-extracted text) on disk to raw text, then to records.

use cardvision_core::StatementRecord;
use std::fs;
use std::panic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::extract::Extractor;

/// Why a file produced no record. Reported per file; never aborts a batch.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a PDF document", path.display())]
    NotPdf { path: PathBuf },

    #[error("extracting text from {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("no text could be extracted from {}", path.display())]
    NoText { path: PathBuf },
}

/// A successfully read statement: the extracted record plus the text it came from.
#[derive(Debug, Clone)]
pub struct ParsedStatement {
    pub record: StatementRecord,
    pub raw_text: String,
}

/// Result for one input file, kept in input order.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<ParsedStatement, IngestError>,
}

/// Raw text of a statement.
///
/// `.txt` files are taken as already-extracted text; everything else must be a PDF.
pub fn load_text(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    let text = if is_text {
        String::from_utf8_lossy(&bytes).into_owned()
    } else {
        pdf_text(path, &bytes)?
    };

    if text.trim().is_empty() {
        return Err(IngestError::NoText {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

fn pdf_text(path: &Path, bytes: &[u8]) -> Result<String, IngestError> {
    // The header may follow a few bytes of junk, but must sit in the first KiB.
    if !bytes.windows(4).take(1024).any(|w| w == b"%PDF") {
        return Err(IngestError::NotPdf {
            path: path.to_path_buf(),
        });
    }

    // pdf-extract panics on some malformed documents.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(IngestError::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        Err(_) => Err(IngestError::Pdf {
            path: path.to_path_buf(),
            message: "PDF decoder panicked".to_string(),
        }),
    }
}

/// Read one file and extract its record. The record's `file_name` is set from the path.
pub fn parse_file(extractor: &Extractor, path: &Path) -> Result<ParsedStatement, IngestError> {
    let raw_text = load_text(path)?;
    let mut record = extractor.parse(&raw_text);
    if let Some(name) = path.file_name() {
        record = record.with_file_name(name.to_string_lossy());
    }

    info!(
        file = %path.display(),
        bank = record.bank.code(),
        card_found = record.card_last4.is_some(),
        transactions = record.transaction_count,
        "statement parsed"
    );
    Ok(ParsedStatement { record, raw_text })
}

/// Parse files one at a time, in order. Unreadable files are reported in their
/// slot and do not stop the rest.
pub fn parse_files<P: AsRef<Path>>(extractor: &Extractor, paths: &[P]) -> Vec<FileOutcome> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref().to_path_buf();
            let result = parse_file(extractor, &path);
            if let Err(e) = &result {
                warn!(error = %e, "skipping unreadable statement");
            }
            FileOutcome { path, result }
        })
        .collect()
}

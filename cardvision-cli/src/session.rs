//! Session state: every processed file and what the dashboard is showing.
//!
//! Built once from the input files and passed explicitly to the report,
//! export and dashboard code.

use anyhow::{Result, bail};
use cardvision_core::StatementRecord;
use cardvision_export::{ExportFormat, ProcessingSummary, default_file_name, write_export};
use cardvision_ingest::{Extractor, FileOutcome, IngestError, ParsedStatement, parse_files};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub struct Session {
    outcomes: Vec<FileOutcome>,
    /// Index into the successfully parsed statements.
    pub selected: usize,
    pub show_raw_text: bool,
    pub raw_preview_chars: usize,
}

impl Session {
    pub fn process<P: AsRef<Path>>(extractor: &Extractor, files: &[P]) -> Self {
        Self::from_outcomes(parse_files(extractor, files))
    }

    pub fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        Self {
            outcomes,
            selected: 0,
            show_raw_text: false,
            raw_preview_chars: 2000,
        }
    }

    /// Parsed statements in input order.
    pub fn parsed(&self) -> impl Iterator<Item = &ParsedStatement> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &IngestError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    pub fn records(&self) -> Vec<StatementRecord> {
        self.parsed().map(|p| p.record.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.parsed().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> ProcessingSummary {
        ProcessingSummary::new(&self.records(), self.failures().count())
    }

    pub fn selected_statement(&self) -> Option<&ParsedStatement> {
        self.parsed().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_raw_text(&mut self) {
        self.show_raw_text = !self.show_raw_text;
    }

    /// Raw text of the selected statement, cut at `raw_preview_chars` characters.
    pub fn raw_preview(&self) -> Option<String> {
        let text = &self.selected_statement()?.raw_text;
        if text.chars().count() <= self.raw_preview_chars {
            return Some(text.clone());
        }
        let mut cut: String = text.chars().take(self.raw_preview_chars).collect();
        cut.push_str("...");
        Some(cut)
    }

    /// Write all records to `out`, or to a timestamped file in `out_dir`.
    pub fn export(
        &self,
        format: ExportFormat,
        out: Option<&Path>,
        out_dir: &Path,
        now: NaiveDateTime,
    ) -> Result<PathBuf> {
        let records = self.records();
        if records.is_empty() {
            bail!("no statements could be read; nothing to export");
        }
        let path = match out {
            Some(p) => p.to_path_buf(),
            None => out_dir.join(default_file_name(format, now)),
        };
        write_export(format, &records, &path)?;
        Ok(path)
    }
}

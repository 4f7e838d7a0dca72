//! JSON export: a pretty-printed array of records with camelCase fields,
//! ISO-8601 dates and plain decimal amounts.

use cardvision_core::StatementRecord;

use crate::format::ExportError;

pub fn to_json(records: &[StatementRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn from_json(s: &str) -> Result<Vec<StatementRecord>, ExportError> {
    Ok(serde_json::from_str(s)?)
}

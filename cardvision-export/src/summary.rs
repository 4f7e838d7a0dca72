//! Processing summary shown under the results table.

use cardvision_core::{BankId, StatementRecord};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    pub documents_processed: usize,
    pub failed_documents: usize,
    /// Distinct issuers among processed documents, `Unknown` included.
    pub unique_institutions: usize,
    /// Documents where the card number was located.
    pub successful_extractions: usize,
    /// `successful_extractions` as a whole percentage of `documents_processed`.
    pub success_rate: u32,
}

impl ProcessingSummary {
    pub fn new(records: &[StatementRecord], failed_documents: usize) -> Self {
        let issuers: HashSet<BankId> = records.iter().map(|r| r.bank).collect();
        let successful = records.iter().filter(|r| r.card_last4.is_some()).count();
        let success_rate = if records.is_empty() {
            0
        } else {
            (successful * 100 / records.len()) as u32
        };

        Self {
            documents_processed: records.len(),
            failed_documents,
            unique_institutions: issuers.len(),
            successful_extractions: successful,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_card(bank: BankId, card: Option<&str>) -> StatementRecord {
        let mut r = StatementRecord::new(bank);
        r.card_last4 = card.map(str::to_string);
        r
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            with_card(BankId::Axis, Some("1234")),
            with_card(BankId::Axis, None),
            with_card(BankId::Sbi, Some("5634")),
        ];
        let s = ProcessingSummary::new(&records, 1);
        assert_eq!(s.documents_processed, 3);
        assert_eq!(s.failed_documents, 1);
        assert_eq!(s.unique_institutions, 2);
        assert_eq!(s.successful_extractions, 2);
        assert_eq!(s.success_rate, 66);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(ProcessingSummary::new(&[], 2).success_rate, 0);
    }
}

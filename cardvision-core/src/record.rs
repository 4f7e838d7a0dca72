//! Normalized output of the field extractor, one record per statement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bank::BankId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxnKind {
    Debit,
    Credit,
}

/// A single statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive number means charge/spend; negative means credit/refund.
    pub amount: f64,
    pub kind: TxnKind,
}

impl Transaction {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: f64, kind: TxnKind) -> Self {
        let amount = match kind {
            TxnKind::Credit => -amount.abs(),
            TxnKind::Debit => amount,
        };
        Self {
            date,
            description: description.into(),
            amount,
            kind,
        }
    }
}

/// Everything extracted from one statement.
///
/// Only `bank` is guaranteed; every other field is `None` (or empty) when no
/// pattern located it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRecord {
    /// Source file name, attached once the record is tied to an upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub bank: BankId,
    #[serde(default)]
    pub card_last4: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub statement_date: Option<NaiveDate>,
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    #[serde(default)]
    pub total_due: Option<f64>,
    #[serde(default)]
    pub minimum_due: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Number of transaction lines found, including those not kept in `transactions`.
    #[serde(default)]
    pub transaction_count: usize,
    /// Sample of the first transaction lines, in document order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl StatementRecord {
    pub fn new(bank: BankId) -> Self {
        Self {
            bank,
            ..Default::default()
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// True when nothing beyond the bank was located.
    pub fn is_bank_only(&self) -> bool {
        self.card_last4.is_none()
            && self.customer_name.is_none()
            && self.customer_id.is_none()
            && self.statement_date.is_none()
            && self.period_start.is_none()
            && self.period_end.is_none()
            && self.total_due.is_none()
            && self.minimum_due.is_none()
            && self.due_date.is_none()
            && self.transactions.is_empty()
    }

    /// Human-readable billing period: "01/08/2025 to 31/08/2025" or "Upto 31/08/2025".
    pub fn period_label(&self) -> Option<String> {
        match (self.period_start, self.period_end) {
            (Some(start), Some(end)) => Some(format!(
                "{} to {}",
                start.format("%d/%m/%Y"),
                end.format("%d/%m/%Y")
            )),
            (None, Some(end)) => Some(format!("Upto {}", end.format("%d/%m/%Y"))),
            (Some(start), None) => Some(format!("From {}", start.format("%d/%m/%Y"))),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatementRecord {
        let mut r = StatementRecord::new(BankId::Hdfc).with_file_name("aug.pdf");
        r.card_last4 = Some("4821".to_string());
        r.period_start = NaiveDate::from_ymd_opt(2025, 7, 16);
        r.period_end = NaiveDate::from_ymd_opt(2025, 8, 15);
        r.total_due = Some(12450.0);
        r.due_date = NaiveDate::from_ymd_opt(2025, 9, 4);
        r.transaction_count = 2;
        r.transactions = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
                "SWIGGY BANGALORE",
                450.0,
                TxnKind::Debit,
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
                "PAYMENT RECEIVED",
                5000.0,
                TxnKind::Credit,
            ),
        ];
        r
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["bank"], "HDFC");
        assert_eq!(v["cardLast4"], "4821");
        assert_eq!(v["periodStart"], "2025-07-16");
        assert_eq!(v["dueDate"], "2025-09-04");
        assert_eq!(v["totalDue"], 12450.0);
        assert_eq!(v["transactions"][1]["kind"], "CREDIT");
        assert_eq!(v["transactions"][1]["amount"], -5000.0);
    }

    #[test]
    fn test_json_round_trip() {
        let r = sample();
        let json = serde_json::to_string(&r).unwrap();
        let back: StatementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_bank_only_record() {
        let r = StatementRecord::new(BankId::Unknown);
        assert!(r.is_bank_only());
        assert_eq!(r.period_label(), None);
        assert!(!sample().is_bank_only());
        assert_eq!(sample().period_label().unwrap(), "16/07/2025 to 15/08/2025");
    }
}

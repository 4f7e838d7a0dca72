//! Flat CSV export: one row per statement, one column per top-level field.
//!
//! The transaction sample goes into a single `transactions` column as
//! `date|description|amount` triples joined by `; `.

use cardvision_core::{StatementRecord, Transaction};
use chrono::NaiveDate;
use serde::Serialize;

use crate::format::ExportError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    file_name: Option<&'a str>,
    bank: &'static str,
    card_last4: Option<&'a str>,
    customer_name: Option<&'a str>,
    customer_id: Option<&'a str>,
    statement_date: Option<NaiveDate>,
    period_start: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
    total_due: Option<f64>,
    minimum_due: Option<f64>,
    due_date: Option<NaiveDate>,
    transaction_count: usize,
    transactions: String,
}

impl<'a> From<&'a StatementRecord> for CsvRow<'a> {
    fn from(r: &'a StatementRecord) -> Self {
        Self {
            file_name: r.file_name.as_deref(),
            bank: r.bank.code(),
            card_last4: r.card_last4.as_deref(),
            customer_name: r.customer_name.as_deref(),
            customer_id: r.customer_id.as_deref(),
            statement_date: r.statement_date,
            period_start: r.period_start,
            period_end: r.period_end,
            total_due: r.total_due,
            minimum_due: r.minimum_due,
            due_date: r.due_date,
            transaction_count: r.transaction_count,
            transactions: sub_list(&r.transactions),
        }
    }
}

fn sub_list(txns: &[Transaction]) -> String {
    txns.iter()
        .map(|t| {
            let desc = t.description.replace(['|', ';'], " ");
            format!("{}|{}|{:.2}", t.date, desc, t.amount)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn to_csv(records: &[StatementRecord]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        // serde only emits the header alongside the first row
        wtr.write_record([
            "fileName",
            "bank",
            "cardLast4",
            "customerName",
            "customerId",
            "statementDate",
            "periodStart",
            "periodEnd",
            "totalDue",
            "minimumDue",
            "dueDate",
            "transactionCount",
            "transactions",
        ])?;
    }
    for r in records {
        wtr.serialize(CsvRow::from(r))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardvision_core::{BankId, TxnKind};

    fn record() -> StatementRecord {
        let mut r = StatementRecord::new(BankId::Hdfc).with_file_name("aug.pdf");
        r.card_last4 = Some("4821".into());
        r.total_due = Some(8210.5);
        r.due_date = NaiveDate::from_ymd_opt(2025, 9, 4);
        r.transaction_count = 2;
        r.transactions = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 7, 18).unwrap(),
                "SWIGGY | BANGALORE",
                450.0,
                TxnKind::Debit,
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 7, 21).unwrap(),
                "NETBANKING PAYMENT",
                5000.0,
                TxnKind::Credit,
            ),
        ];
        r
    }

    #[test]
    fn test_one_row_per_record_with_header() {
        let out = to_csv(&[record(), StatementRecord::new(BankId::Unknown)]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("fileName,bank,cardLast4,"));
        assert!(lines[0].ends_with(",transactionCount,transactions"));
        assert!(lines[1].starts_with("aug.pdf,HDFC,4821,,,,,,8210.5,,2025-09-04,2,"));
        assert!(lines[2].starts_with(",Unknown,"));
    }

    #[test]
    fn test_transactions_sub_list() {
        let out = to_csv(&[record()]).unwrap();
        assert!(out.contains("2025-07-18|SWIGGY   BANGALORE|450.00; 2025-07-21|NETBANKING PAYMENT|-5000.00"));
    }

    #[test]
    fn test_empty_export_still_has_header() {
        let out = to_csv(&[]).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("fileName,bank"));
    }
}

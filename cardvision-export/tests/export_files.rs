use cardvision_core::{BankId, StatementRecord, Transaction, TxnKind};
use cardvision_export::{ExportFormat, ProcessingSummary, default_file_name, from_json, write_export};
use chrono::NaiveDate;
use std::fs;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn records() -> Vec<StatementRecord> {
    let mut icici = StatementRecord::new(BankId::Icici).with_file_name("icici_aug.pdf");
    icici.card_last4 = Some("9012".to_string());
    icici.period_start = Some(d(2025, 7, 16));
    icici.period_end = Some(d(2025, 8, 15));
    icici.total_due = Some(23_415.75);
    icici.due_date = Some(d(2025, 9, 2));
    icici.transactions = vec![
        Transaction::new(d(2025, 7, 20), "FLIPKART; BANGALORE", 2_499.0, TxnKind::Debit),
        Transaction::new(d(2025, 7, 28), "PAYMENT RECEIVED", 10_000.0, TxnKind::Credit),
    ];
    icici.transaction_count = 14;

    let unknown = StatementRecord::new(BankId::Unknown).with_file_name("scan.pdf");
    vec![icici, unknown]
}

#[test]
fn test_json_file_reads_back_equal() {
    let dir = tempfile::tempdir().unwrap();
    let at = d(2025, 9, 16).and_hms_opt(8, 0, 5).unwrap();
    let path = dir.path().join(default_file_name(ExportFormat::Json, at));
    write_export(ExportFormat::Json, &records(), &path).unwrap();

    assert!(path.ends_with("cardvision_analysis_20250916_080005.json"));
    let back = from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, records());
}

#[test]
fn test_csv_file_has_one_row_per_statement() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_export(ExportFormat::Csv, &records(), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "fileName");
    assert_eq!(&headers[1], "bank");

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "ICICI");
    assert_eq!(&rows[1][1], "Unknown");

    let txn_col = headers.iter().position(|h| h == "transactions").unwrap();
    assert_eq!(
        &rows[0][txn_col],
        "2025-07-20|FLIPKART  BANGALORE|2499.00; 2025-07-28|PAYMENT RECEIVED|-10000.00"
    );
    assert_eq!(&rows[1][txn_col], "");
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "stale").unwrap();
    write_export(ExportFormat::Json, &records()[1..], &path).unwrap();
    assert_eq!(from_json(&fs::read_to_string(&path).unwrap()).unwrap().len(), 1);
}

#[test]
fn test_summary_for_exported_batch() {
    let s = ProcessingSummary::new(&records(), 2);
    assert_eq!(s.documents_processed, 2);
    assert_eq!(s.failed_documents, 2);
    assert_eq!(s.unique_institutions, 2);
    assert_eq!(s.successful_extractions, 1);
    assert_eq!(s.success_rate, 50);
}

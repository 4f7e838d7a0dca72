//! Plain-text rendering for `cardvision parse` and the dashboard detail pane.

use cardvision_core::{StatementRecord, TxnKind};
use cardvision_export::ProcessingSummary;
use chrono::NaiveDate;
use std::fmt::Write;

use crate::session::Session;

/// Rupee amount with Indian digit grouping: `INR 1,23,456.70`.
/// Negative amounts are credits and carry a ` Cr` suffix.
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if int_part.len() <= 3 {
        int_part.to_string()
    } else {
        let (head, last3) = int_part.split_at(int_part.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (h, t) = rest.split_at(rest.len() - 2);
            parts.push(t);
            rest = h;
        }
        parts.push(rest);
        parts.reverse();
        format!("{},{last3}", parts.join(","))
    };

    let suffix = if amount < 0.0 { " Cr" } else { "" };
    format!("INR {grouped}.{frac}{suffix}")
}

pub fn format_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn or_dash(v: Option<&str>) -> &str {
    v.unwrap_or("-")
}

/// Labelled fields of one record, in display order.
pub fn detail_lines(r: &StatementRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Issuer", r.bank.display_name().to_string()),
        (
            "Card",
            r.card_last4
                .as_deref()
                .map(|c| format!("XXXX {c}"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Customer", or_dash(r.customer_name.as_deref()).to_string()),
        ("Customer ID", or_dash(r.customer_id.as_deref()).to_string()),
        ("Statement date", format_date(r.statement_date)),
        ("Period", r.period_label().unwrap_or_else(|| "-".to_string())),
        ("Total due", r.total_due.map(format_inr).unwrap_or_else(|| "-".to_string())),
        ("Minimum due", r.minimum_due.map(format_inr).unwrap_or_else(|| "-".to_string())),
        ("Due date", format_date(r.due_date)),
        ("Transactions", r.transaction_count.to_string()),
    ]
}

pub fn transaction_lines(r: &StatementRecord) -> Vec<String> {
    r.transactions
        .iter()
        .map(|t| {
            let kind = match t.kind {
                TxnKind::Debit => "DR",
                TxnKind::Credit => "CR",
            };
            format!(
                "{}  {kind}  {:<32}  {:>18}",
                t.date.format("%d/%m/%Y"),
                t.description,
                format_inr(t.amount)
            )
        })
        .collect()
}

pub fn summary_line(s: &ProcessingSummary) -> String {
    format!(
        "{} processed, {} failed, {} issuers, {} with card number ({}%)",
        s.documents_processed,
        s.failed_documents,
        s.unique_institutions,
        s.successful_extractions,
        s.success_rate
    )
}

/// Full text report for the session, one block per statement. Failures are
/// left to the caller.
pub fn render_report(session: &Session, show_raw: bool) -> String {
    let mut out = String::new();
    for p in session.parsed() {
        let r = &p.record;
        let _ = writeln!(out, "== {} ==", or_dash(r.file_name.as_deref()));
        for (label, value) in detail_lines(r) {
            let _ = writeln!(out, "  {label:<15} {value}");
        }
        if !r.transactions.is_empty() {
            let _ = writeln!(out, "  Recent transactions:");
            for line in transaction_lines(r) {
                let _ = writeln!(out, "    {line}");
            }
        }
        if show_raw {
            let _ = writeln!(out, "  --- raw text ---");
            for line in p.raw_text.lines() {
                let _ = writeln!(out, "  | {line}");
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", summary_line(&session.summary()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardvision_core::{BankId, Transaction};
    use cardvision_ingest::{FileOutcome, ParsedStatement};
    use std::path::PathBuf;

    #[test]
    fn test_format_inr_groups_lakhs() {
        assert_eq!(format_inr(0.0), "INR 0.00");
        assert_eq!(format_inr(450.0), "INR 450.00");
        assert_eq!(format_inr(12450.0), "INR 12,450.00");
        assert_eq!(format_inr(123456.7), "INR 1,23,456.70");
        assert_eq!(format_inr(12345678.9), "INR 1,23,45,678.90");
    }

    #[test]
    fn test_format_inr_credit_suffix() {
        assert_eq!(format_inr(-499.0), "INR 499.00 Cr");
    }

    #[test]
    fn test_detail_lines_fill_missing_with_dash() {
        let r = StatementRecord::new(BankId::Unknown);
        let lines = detail_lines(&r);
        assert_eq!(lines[0], ("Issuer", "Unknown Issuer".to_string()));
        assert!(lines[1..9].iter().all(|(_, v)| v == "-"));
        assert_eq!(lines[9], ("Transactions", "0".to_string()));
    }

    #[test]
    fn test_report_lists_statements_then_summary() {
        let mut r = StatementRecord::new(BankId::Axis).with_file_name("axis.pdf");
        r.card_last4 = Some("1234".to_string());
        r.total_due = Some(12450.0);
        r.transactions = vec![Transaction::new(
            NaiveDate::from_ymd_opt(2025, 8, 14).unwrap(),
            "REFUND",
            499.0,
            TxnKind::Credit,
        )];
        r.transaction_count = 1;

        let session = Session::from_outcomes(vec![FileOutcome {
            path: PathBuf::from("axis.pdf"),
            result: Ok(ParsedStatement {
                record: r,
                raw_text: "Axis Bank".to_string(),
            }),
        }]);

        let text = render_report(&session, true);
        assert!(text.starts_with("== axis.pdf =="));
        assert!(text.contains("Axis Bank"));
        assert!(text.contains("XXXX 1234"));
        assert!(text.contains("INR 12,450.00"));
        assert!(text.contains("14/08/2025  CR  REFUND"));
        assert!(text.contains("INR 499.00 Cr"));
        assert!(text.contains("| Axis Bank"));
        assert!(text.ends_with("1 processed, 0 failed, 1 issuers, 1 with card number (100%)\n"));
    }
}

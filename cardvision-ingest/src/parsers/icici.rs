//! ICICI Bank credit card statements.
//!
//! Expected text after PDF-to-text:
//!   4315XXXXXXXX9012
//!   Statement period : July 16, 2025 to August 15, 2025
//!   Due Date : September 4, 2025
//!   Minimum Amount due  ` 330.00
//!   16/07/2025  11045873925  AMAZON PAY INDIA   12   1,299.00
//!   20/07/2025  11045991204  INFINITY PAYMENT        3,000.00 CR

use cardvision_core::BankId;

use crate::rules::{BankRules, Field, FieldSpec, Normalizer};

pub const RULES: BankRules = BankRules {
    bank: BankId::Icici,
    signatures: &["icici bank", "icici card"],
    fields: &[
        FieldSpec {
            field: Field::CardLast4,
            patterns: &[r"\b\d{4}X{8}(\d{4})\b", r"\b\d{4}\s+XXXX\s+XXXX\s+(\d{4})\b"],
            normalizer: Normalizer::Last4,
        },
        FieldSpec {
            field: Field::Period,
            patterns: &[
                r"Statement\s+period\s*:?\s*([A-Za-z]+\s+\d{1,2},\s*\d{4})\s+to\s+([A-Za-z]+\s+\d{1,2},\s*\d{4})",
            ],
            normalizer: Normalizer::Period,
        },
        FieldSpec {
            field: Field::DueDate,
            patterns: &[r"Due\s+Date\s*:?\s*([A-Za-z]+\s+\d{1,2},\s*\d{4})"],
            normalizer: Normalizer::Date,
        },
        FieldSpec {
            field: Field::TotalDue,
            patterns: &[r"Total\s+Amount\s+due\s*:?\s*(?:rs\.?|₹|`)?\s*([\d,]+\.\d{2})"],
            normalizer: Normalizer::Amount,
        },
        FieldSpec {
            field: Field::MinimumDue,
            patterns: &[r"Minimum\s+Amount\s+due\s*:?\s*(?:rs\.?|₹|`)?\s*([\d,]+\.\d{2})"],
            normalizer: Normalizer::Amount,
        },
    ],
    transactions: &[
        r"^\s*(?P<date>\d{2}/\d{2}/\d{4})\s+\d{8,12}\s+(?P<desc>.+?)\s+(?:-?\d+\s+)?(?P<amt>[\d,]+\.\d{2})\s*(?P<cr>cr)?\s*$",
    ],
};

#[cfg(test)]
mod tests {
    use crate::extract::Extractor;
    use cardvision_core::{BankId, TxnKind};
    use chrono::NaiveDate;

    const TEXT: &str = r#"
ICICI Bank Credit Card Statement
Customer Name: ARJUN MEHTA
4315XXXXXXXX9012
Statement period : July 16, 2025 to August 15, 2025
Due Date : September 4, 2025
Total Amount due  ` 6,540.00
Minimum Amount due  ` 330.00
Date        SerNo.       Transaction Details   Reward Points   Amount (in`)
16/07/2025  11045873925  AMAZON PAY INDIA   12   1,299.00
20/07/2025  11045991204  INFINITY PAYMENT        3,000.00 CR
"#;

    #[test]
    fn test_parses_icici_statement() {
        let ex = Extractor::new().unwrap();
        let r = ex.parse(TEXT);
        assert_eq!(r.bank, BankId::Icici);
        assert_eq!(r.card_last4.as_deref(), Some("9012"));
        assert_eq!(r.customer_name.as_deref(), Some("ARJUN MEHTA"));
        assert_eq!(r.period_start, NaiveDate::from_ymd_opt(2025, 7, 16));
        assert_eq!(r.period_end, NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(r.due_date, NaiveDate::from_ymd_opt(2025, 9, 4));
        assert_eq!(r.total_due, Some(6540.0));
        assert_eq!(r.minimum_due, Some(330.0));
        assert_eq!(r.statement_date, None);
        assert_eq!(r.customer_id, None);
        assert_eq!(r.transaction_count, 2);
        assert_eq!(r.transactions[0].description, "AMAZON PAY INDIA");
        assert_eq!(r.transactions[0].amount, 1299.0);
        assert_eq!(r.transactions[1].kind, TxnKind::Credit);
        assert_eq!(r.transactions[1].amount, -3000.0);
    }

    #[test]
    fn test_minimum_due_with_backtick_rupee_sign() {
        let ex = Extractor::new().unwrap();
        let text = "ICICI Bank\nTotal Amount due  ` 6,540.00\nMinimum Amount due  ` 330.00\n";
        let r = ex.parse(text);
        assert_eq!(r.total_due, Some(6540.0));
        assert_eq!(r.minimum_due, Some(330.0));
    }
}

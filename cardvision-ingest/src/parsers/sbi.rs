//! SBI Card statements.
//!
//! Expected text after PDF-to-text:
//!   Credit Card Number  XXXX XXXX XXXX 5634
//!   for Statement Period: 16 Jul 25 to 15 Aug 25
//!   Total Amount Due ( ₹ )  9,875.40
//!   18 Jul 25   FLIPKART INTERNET   2,499.00 D
//!   22 Jul 25   PAYMENT RECEIVED    4,000.00 C

use cardvision_core::BankId;

use crate::rules::{BankRules, Field, FieldSpec, Normalizer};

pub const RULES: BankRules = BankRules {
    bank: BankId::Sbi,
    signatures: &["sbi card", "sbi prime"],
    fields: &[
        FieldSpec {
            field: Field::CardLast4,
            patterns: &[r"Credit\s+Card\s+Number[:\s]*(?:[X*]{4}[\s-]*){3}(\d{4})\b"],
            normalizer: Normalizer::Last4,
        },
        FieldSpec {
            field: Field::Period,
            patterns: &[
                r"Statement\s+Period[:\s]*(\d{1,2}\s+[A-Za-z]{3}\s+\d{2,4})\s+to\s+(\d{1,2}\s+[A-Za-z]{3}\s+\d{2,4})",
            ],
            normalizer: Normalizer::Period,
        },
        FieldSpec {
            field: Field::StatementDate,
            patterns: &[r"Statement\s+Date[:\s]*(\d{1,2}\s+[A-Za-z]{3}\s+\d{2,4})"],
            normalizer: Normalizer::Date,
        },
        FieldSpec {
            field: Field::DueDate,
            patterns: &[r"Payment\s+Due\s+Date[:\s]*(\d{1,2}\s+[A-Za-z]{3}\s+\d{2,4})"],
            normalizer: Normalizer::Date,
        },
        FieldSpec {
            field: Field::TotalDue,
            patterns: &[r"Total\s+Amount\s+Due\s*\(\s*(?:₹|rs\.?|inr)\s*\)\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
        FieldSpec {
            field: Field::MinimumDue,
            patterns: &[r"Minimum\s+Amount\s+Due\s*\(\s*(?:₹|rs\.?|inr)\s*\)\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
    ],
    transactions: &[
        r"^\s*(?P<date>\d{1,2}\s+[A-Za-z]{3}\s+\d{2,4})\s+(?P<desc>.+?)\s+(?P<amt>[\d,]+\.\d{2})\s+(?:(?P<cr>c)|d)\s*$",
    ],
};

#[cfg(test)]
mod tests {
    use crate::extract::Extractor;
    use cardvision_core::{BankId, TxnKind};
    use chrono::NaiveDate;

    const TEXT: &str = r#"
SBI Card  SimplyCLICK
Credit Card Number  XXXX XXXX XXXX 5634
Statement Date: 15 Aug 25
for Statement Period: 16 Jul 25 to 15 Aug 25
Payment Due Date: 04 Sep 25
Total Amount Due ( ₹ )  9,875.40
Minimum Amount Due ( ₹ )  500.00
TRANSACTIONS FOR SBI CARD
18 Jul 25   FLIPKART INTERNET   2,499.00 D
22 Jul 25   PAYMENT RECEIVED    4,000.00 C
"#;

    #[test]
    fn test_parses_sbi_statement() {
        let ex = Extractor::new().unwrap();
        let r = ex.parse(TEXT);
        assert_eq!(r.bank, BankId::Sbi);
        assert_eq!(r.card_last4.as_deref(), Some("5634"));
        assert_eq!(r.statement_date, NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(r.period_start, NaiveDate::from_ymd_opt(2025, 7, 16));
        assert_eq!(r.period_end, NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(r.due_date, NaiveDate::from_ymd_opt(2025, 9, 4));
        assert_eq!(r.total_due, Some(9875.4));
        assert_eq!(r.minimum_due, Some(500.0));
        assert_eq!(r.customer_name, None);
        assert_eq!(r.customer_id, None);
        assert_eq!(r.transaction_count, 2);
        assert_eq!(r.transactions[0].description, "FLIPKART INTERNET");
        assert_eq!(r.transactions[1].kind, TxnKind::Credit);
        assert_eq!(r.transactions[1].amount, -4000.0);
    }
}

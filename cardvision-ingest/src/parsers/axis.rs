//! Axis Bank credit card statements.
//!
//! Expected text after PDF-to-text:
//!   Card No: 534680******1234
//!   Statement Generation Date  16/08/2025
//!   Statement Period  17/07/2025 - 15/08/2025
//!   Total Payment Due  ₹12,450.00 Dr     Minimum Payment Due  ₹620.00 Dr
//!   18/07/2025   ZOMATO GURGAON   FOOD   450.00 Dr

use cardvision_core::BankId;

use crate::rules::{BankRules, Field, FieldSpec, Normalizer};

pub const RULES: BankRules = BankRules {
    bank: BankId::Axis,
    signatures: &["axis bank", "axis ace"],
    fields: &[
        FieldSpec {
            field: Field::CardLast4,
            patterns: &[r"Card\s+No[:.\s]*\d{6}\*+(\d{4})"],
            normalizer: Normalizer::Last4,
        },
        FieldSpec {
            field: Field::StatementDate,
            patterns: &[r"Statement\s+Generation\s+Date[:\s]*(\d{2}/\d{2}/\d{4})"],
            normalizer: Normalizer::Date,
        },
        FieldSpec {
            field: Field::TotalDue,
            patterns: &[r"Total\s+Payment\s+Due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
        FieldSpec {
            field: Field::MinimumDue,
            patterns: &[r"Minimum\s+Payment\s+Due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
    ],
    transactions: &[
        r"^\s*(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?:rs\.?|₹)?\s*(?P<amt>[\d,]+\.\d{2})\s+(?:(?P<cr>cr)|dr)\s*$",
    ],
};

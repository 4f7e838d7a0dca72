//! HDFC Bank credit card statements.
//!
//! Expected text after PDF-to-text:
//!   Card No: 4893 77XX XXXX 4821
//!   Billing Period  16 Jul, 2025 - 15 Aug, 2025
//!   Total Dues  ₹ 8,210.50     Minimum Amount Due  ₹ 410.00
//!   18/07/2025 20:14:32  SWIGGY BANGALORE   450.00
//!   21/07/2025 09:02:11  NETBANKING PAYMENT  5,000.00 Cr

use cardvision_core::BankId;

use crate::rules::{BankRules, Field, FieldSpec, Normalizer};

pub const RULES: BankRules = BankRules {
    bank: BankId::Hdfc,
    signatures: &["hdfc bank", "hdfc regalia"],
    fields: &[
        FieldSpec {
            field: Field::CardLast4,
            patterns: &[r"Card\s+No[:\s]*\d{4}\s*\d{2}XX\s*XXXX\s*(\d{4})"],
            normalizer: Normalizer::Last4,
        },
        FieldSpec {
            field: Field::Period,
            patterns: &[
                r"Billing\s+Period[:\s]*(\d{1,2}\s+[A-Za-z]{3},?\s+\d{4})\s*-\s*(\d{1,2}\s+[A-Za-z]{3},?\s+\d{4})",
            ],
            normalizer: Normalizer::Period,
        },
        FieldSpec {
            field: Field::TotalDue,
            patterns: &[r"Total\s+Dues[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
        FieldSpec {
            field: Field::MinimumDue,
            patterns: &[r"Minimum\s+(?:Amount\s+)?Due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
    ],
    transactions: &[
        r"^\s*(?P<date>\d{2}/\d{2}/\d{4})\s+\d{2}:\d{2}(?::\d{2})?\s+(?P<desc>.+?)\s+(?P<amt>[\d,]+\.\d{2})\s*(?P<cr>cr)?\s*$",
    ],
};

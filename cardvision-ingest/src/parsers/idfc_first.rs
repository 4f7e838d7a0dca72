//! IDFC FIRST Bank credit card statements.
//!
//! The rupee sign is often extracted as a lone `r` from the embedded font:
//!   Card Number  4456 **** **** 7890
//!   Total Amount Due  r 15,300.00
//!   Payment Due Date  05 Sep 2025
//!   19/07/2025  MAKEMYTRIP INDIA  r 7,840.00
//!   24/07/2025  REFUND MAKEMYTRIP r 1,200.00 CR

use cardvision_core::BankId;

use crate::rules::{BankRules, Field, FieldSpec, Normalizer};

pub const RULES: BankRules = BankRules {
    bank: BankId::IdfcFirst,
    signatures: &["idfc first", "idfc bank"],
    fields: &[
        FieldSpec {
            field: Field::CardLast4,
            patterns: &[r"Card\s+Number[:\s]*\d{4}\s*\*{4}\s*\*{4}\s*(\d{4})"],
            normalizer: Normalizer::Last4,
        },
        FieldSpec {
            field: Field::TotalDue,
            patterns: &[r"Total\s+Amount\s+Due[:\s]*(?:r|₹)\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
        FieldSpec {
            field: Field::MinimumDue,
            patterns: &[r"Minimum\s+Amount\s+Due[:\s]*(?:r|₹)\s*([\d,]+(?:\.\d{1,2})?)"],
            normalizer: Normalizer::Amount,
        },
    ],
    transactions: &[
        r"^\s*(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?:r|₹)\s*(?P<amt>[\d,]+\.\d{2})\s*(?:(?P<cr>cr)|dr)?\s*$",
    ],
};

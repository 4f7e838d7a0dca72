//! Shared fallback patterns, tried after a bank's own entries.
//!
//! All patterns are compiled case-insensitively. Typical lines:
//!   Card Number XXXX XXXX XXXX 4821
//!   Statement Period 16 Jul 2025 - 15 Aug 2025
//!   Total Amount Due: ₹12,450.00
//!   Due Date: 15/09/2025
//!   12-Aug-2025  DEBIT  AMAZON PAY  1,299.00

use crate::rules::{Field, FieldSpec, Normalizer};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::CardLast4,
        patterns: &[
            r"Card\s+[A-Za-z\s]+\(XXXX-XXXX-XXXX-(\d{4})\)",
            r"XXXX-XXXX-XXXX-(\d{4})",
            r"card\s*ending\s*with\s*\d*(\d{4})",
            r"xxxx\s*xxxx\s*xxxx\s*(\d{4})",
            r"xx\s*(\d{4})\b",
            r"card.*?xx.*?(\d{4})",
        ],
        normalizer: Normalizer::Last4,
    },
    FieldSpec {
        field: Field::StatementDate,
        patterns: &[
            r"Statement\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
            r"Statement\s+Date[:\s]+(\d{2}-[A-Za-z]{3}-\d{4})",
            r"statement\s*date[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})",
        ],
        normalizer: Normalizer::Date,
    },
    FieldSpec {
        field: Field::Period,
        patterns: &[
            r"Statement\s+Period[:\s]+(\d{2}\s+[A-Za-z]{3}\s+\d{4})\s*-\s*(\d{2}\s+[A-Za-z]{3}\s+\d{4})",
            r"Statement\s+Period[:\s]+(\d{2}-[A-Za-z]{3}-\d{4})\s*to\s*(\d{2}-[A-Za-z]{3}-\d{4})",
            r"date\s*range[:\s]*(?:upto\s*)?(\d{1,2}\s+[A-Za-z]{3},?\s+\d{4})",
            r"statement\s*(?:period|date|cycle)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})\s*(?:to|-)\s*(\d{2}[/-]\d{2}[/-]\d{4})",
            r"billing\s*(?:period|cycle)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})\s*(?:to|-)\s*(\d{2}[/-]\d{2}[/-]\d{4})",
            r"from\s*(\d{2}[/-]\d{2}[/-]\d{4})\s*to\s*(\d{2}[/-]\d{2}[/-]\d{4})",
        ],
        normalizer: Normalizer::Period,
    },
    FieldSpec {
        field: Field::TotalDue,
        patterns: &[
            r"Total\s+Amount\s+Due\s+INR\s+([\d,]+\.?\d*)",
            r"Total\s+Amount\s+Due\s+(?:Rs\.?|₹)?\s*([\d,]+\.?\d*)",
            r"total\s*(?:amount\s*)?due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            r"(?m)^\s*amount\s*due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
            r"payment\s*due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.\d{2})",
            r"outstanding\s*(?:amount|balance)[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
        ],
        normalizer: Normalizer::Amount,
    },
    FieldSpec {
        field: Field::MinimumDue,
        patterns: &[
            r"Minimum\s+Amount\s+Due\s+INR\s+([\d,]+\.?\d*)",
            r"Minimum\s+Amount\s+Due\s+(?:Rs\.?|₹)?\s*([\d,]+\.?\d*)",
            r"minimum\s*(?:amount\s*)?due[:\s]*(?:rs\.?|₹|inr)?\s*([\d,]+\.?\d*)",
        ],
        normalizer: Normalizer::Amount,
    },
    FieldSpec {
        field: Field::DueDate,
        patterns: &[
            r"Payment\s+Due\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
            r"Payment\s+Due\s+Date[:\s]+(\d{2}-[A-Za-z]{3}-\d{4})",
            r"due\s*(?:date|by)[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})",
            r"pay\s*by[:\s]*(\d{2}[/-]\d{2}[/-]\d{4})",
        ],
        normalizer: Normalizer::Date,
    },
    FieldSpec {
        field: Field::CustomerName,
        patterns: &[
            r"(?m)\b(?:Customer\s+Name|Name)[: \t]+([A-Z][A-Za-z \t]+?)[ \t]*(?:Customer|Card|$)",
        ],
        normalizer: Normalizer::Text,
    },
    FieldSpec {
        field: Field::CustomerId,
        patterns: &[r"(?:Customer\s+ID|Account\s+Number)[:\s]+(\d+)"],
        normalizer: Normalizer::Digits,
    },
];

pub const TRANSACTIONS: &[&str] = &[
    r"^\s*(?P<date>\d{2}-[A-Za-z]{3}-\d{4})\s+(?P<kind>DEBIT|CREDIT)\s+(?P<desc>.+?)\s+(?:rs\.?|₹|inr)?\s*(?P<amt>[\d,]+(?:\.\d{1,2})?)\s*$",
    r"^\s*(?P<date>\d{2}[/-]\d{2}[/-]\d{4})\s+(?P<desc>.+?)\s+(?:rs\.?|₹|inr)?\s*(?P<amt>[\d,]+\.\d{2})\s*(?:(?P<cr>cr)|dr)?\s*$",
    r"^\s*(?P<date>\d{1,2}\s+[A-Za-z]{3}\s+\d{4})\s+(?P<desc>.+?)\s+(?:rs\.?|₹|inr)?\s*(?P<amt>[\d,]+\.\d{2})\s*(?:(?P<cr>cr)|dr)?\s*$",
];

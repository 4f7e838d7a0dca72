//! Rule tables: per-bank extraction rules expressed as data.
//!
//! Each bank contributes a [`BankRules`] value; the extractor walks it generically.
//! Bank-specific entries are tried before the shared fallbacks in
//! [`crate::parsers::common`].

use cardvision_core::BankId;

use crate::parsers::{axis, common, hdfc, icici, idfc_first, sbi};

/// Statement fields located by pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CardLast4,
    StatementDate,
    Period,
    TotalDue,
    MinimumDue,
    DueDate,
    CustomerName,
    CustomerId,
}

/// How the captured text of a pattern becomes a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Four digits after a masked card number.
    Last4,
    /// A single date in capture group 1.
    Date,
    /// Start/end dates in groups 1 and 2, or only an end date in group 1.
    Period,
    /// Currency string in group 1.
    Amount,
    /// Free text in group 1, whitespace collapsed.
    Text,
    /// Digits in group 1.
    Digits,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::CardLast4,
        Field::StatementDate,
        Field::Period,
        Field::TotalDue,
        Field::MinimumDue,
        Field::DueDate,
        Field::CustomerName,
        Field::CustomerId,
    ];
}

/// One rule: a field, its ordered patterns (first successful match wins), and
/// the normalizer applied to the captures.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub patterns: &'static [&'static str],
    pub normalizer: Normalizer,
}

/// Everything the extractor knows about one issuer.
///
/// Transaction patterns are line-level and must define the named groups
/// `date`, `desc` and `amt`; `kind` (DEBIT/CREDIT) and `cr` (credit marker)
/// are optional.
#[derive(Debug, Clone, Copy)]
pub struct BankRules {
    pub bank: BankId,
    /// Lowercase substrings identifying the issuer.
    pub signatures: &'static [&'static str],
    pub fields: &'static [FieldSpec],
    pub transactions: &'static [&'static str],
}

/// Supported issuers in detection priority order.
pub fn supported() -> [&'static BankRules; 5] {
    [
        &axis::RULES,
        &hdfc::RULES,
        &icici::RULES,
        &sbi::RULES,
        &idfc_first::RULES,
    ]
}

/// Rules for a bank, `None` for `Unknown`.
pub fn for_bank(bank: BankId) -> Option<&'static BankRules> {
    supported().into_iter().find(|r| r.bank == bank)
}

/// Field specs in evaluation order for `bank`: its own entries, then the shared fallbacks.
pub fn field_specs(bank: BankId) -> Vec<FieldSpec> {
    let own = for_bank(bank).map(|r| r.fields).unwrap_or(&[]);
    own.iter().chain(common::FIELDS.iter()).copied().collect()
}

/// Transaction patterns in evaluation order for `bank`.
pub fn transaction_patterns(bank: BankId) -> Vec<&'static str> {
    let own = for_bank(bank).map(|r| r.transactions).unwrap_or(&[]);
    own.iter().chain(common::TRANSACTIONS.iter()).copied().collect()
}

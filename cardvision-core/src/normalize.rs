//! Normalizers turning captured statement text into typed values.
//!
//! Indian statements print dates day-first and amounts with rupee markers:
//!   Payment Due Date   15/09/2025
//!   Statement Date     25 Aug 2025
//!   Total Amount Due   ₹12,450.00
//!   Opening balance    1,200.00 Cr

use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%d %b, %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

const CURRENCY_PREFIXES: &[&str] = &["₹", "inr", "rs.", "rs"];

/// Parse a statement date. Numeric dates are day-first; month names are
/// case-insensitive and may lead ("August 16, 2025").
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&s, fmt).ok())
}

/// Parse a currency string like "₹12,450.00", "INR 1,234" or "500.00 Cr".
///
/// A trailing `Cr` marks a credit and yields a negative amount; `Dr` is accepted
/// and ignored.
pub fn parse_amount(s: &str) -> Option<f64> {
    let mut t = s.trim();
    let mut credit = false;

    let lower = t.to_ascii_lowercase();
    if lower.ends_with("cr") {
        credit = true;
        t = t[..t.len() - 2].trim_end();
    } else if lower.ends_with("dr") {
        t = t[..t.len() - 2].trim_end();
    }

    let mut stripped = true;
    while stripped {
        stripped = false;
        let lower = t.to_ascii_lowercase();
        for prefix in CURRENCY_PREFIXES {
            if lower.starts_with(prefix) {
                t = t[prefix.len()..].trim_start();
                stripped = true;
                break;
            }
        }
    }

    let cleaned: String = t
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return None;
    }

    let amount: f64 = cleaned.parse().ok()?;
    Some(if credit { -amount.abs() } else { amount })
}

/// Exactly four digits, as printed after a masked card number.
pub fn card_last4(s: &str) -> Option<String> {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.len() == 4).then_some(digits)
}

/// Trim and collapse internal whitespace; `None` when nothing is left.
pub fn clean_text(s: &str) -> Option<String> {
    let joined = s.split_whitespace().collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// A run of ASCII digits (customer ids, account numbers).
pub fn digits(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty() && t.chars().all(|c| c.is_ascii_digit())).then(|| t.to_string())
}

//! Bank detection by signature substrings.

use cardvision_core::BankId;
use tracing::debug;

use crate::rules;

/// Identify the issuer of a statement.
///
/// Banks are checked in a fixed priority order and the first one with any
/// signature present wins. Text carrying two banks' signatures resolves to the
/// higher-priority bank.
pub fn detect(text: &str) -> BankId {
    let lower = text.to_lowercase();
    for rules in rules::supported() {
        if let Some(signature) = rules.signatures.iter().find(|s| lower.contains(**s)) {
            debug!(bank = rules.bank.code(), signature, "issuer detected");
            return rules.bank;
        }
    }
    debug!("no issuer signature found");
    BankId::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_supported_bank() {
        let cases = [
            ("Thank you for banking with Axis Bank", BankId::Axis),
            ("AXIS ACE credit card", BankId::Axis),
            ("HDFC Bank Credit Cards Division", BankId::Hdfc),
            ("Your HDFC Regalia statement", BankId::Hdfc),
            ("ICICI Bank Limited", BankId::Icici),
            ("icici card statement", BankId::Icici),
            ("SBI Card & Payment Services", BankId::Sbi),
            ("SBI PRIME", BankId::Sbi),
            ("IDFC FIRST Bank", BankId::IdfcFirst),
            ("IDFC Bank Ltd", BankId::IdfcFirst),
        ];
        for (text, bank) in cases {
            assert_eq!(detect(text), bank, "{text}");
        }
    }

    #[test]
    fn test_unknown_when_no_signature() {
        assert_eq!(detect("Kotak Mahindra Bank credit card statement"), BankId::Unknown);
        assert_eq!(detect(""), BankId::Unknown);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        let text = "Payment to HDFC Bank from your Axis Bank account";
        assert_eq!(detect(text), BankId::Axis);
    }
}

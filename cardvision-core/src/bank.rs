//! Card issuers the extractor knows how to read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuing bank of a statement. `Unknown` when no signature matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankId {
    Axis,
    #[serde(rename = "HDFC")]
    Hdfc,
    #[serde(rename = "ICICI")]
    Icici,
    #[serde(rename = "SBI")]
    Sbi,
    #[serde(rename = "IDFCFirst")]
    IdfcFirst,
    #[default]
    Unknown,
}

impl BankId {
    /// Supported issuers in detection priority order.
    pub const SUPPORTED: [BankId; 5] = [
        BankId::Axis,
        BankId::Hdfc,
        BankId::Icici,
        BankId::Sbi,
        BankId::IdfcFirst,
    ];

    /// Short identifier, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            BankId::Axis => "Axis",
            BankId::Hdfc => "HDFC",
            BankId::Icici => "ICICI",
            BankId::Sbi => "SBI",
            BankId::IdfcFirst => "IDFCFirst",
            BankId::Unknown => "Unknown",
        }
    }

    /// Name shown in the dashboard and CLI tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            BankId::Axis => "Axis Bank",
            BankId::Hdfc => "HDFC Bank",
            BankId::Icici => "ICICI Bank",
            BankId::Sbi => "SBI Card",
            BankId::IdfcFirst => "IDFC FIRST Bank",
            BankId::Unknown => "Unknown Issuer",
        }
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

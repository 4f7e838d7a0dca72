//! cardvision-core: statement data model and value normalizers shared by the
//! ingest, export and CLI crates.

pub mod bank;
pub mod normalize;
pub mod record;

pub use bank::BankId;
pub use record::{StatementRecord, Transaction, TxnKind};

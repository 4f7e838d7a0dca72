//! Per-bank rule tables plus the shared fallbacks.

pub mod axis;
pub mod common;
pub mod hdfc;
pub mod icici;
pub mod idfc_first;
pub mod sbi;

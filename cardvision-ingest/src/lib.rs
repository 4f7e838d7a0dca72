//! cardvision-ingest: statement text loading, bank detection and rule-driven
//! field extraction.

pub mod detect;
pub mod extract;
pub mod parsers;
pub mod rules;
pub mod source;

pub use detect::detect;
pub use extract::{DEFAULT_SAMPLE_SIZE, Extractor};
pub use rules::{BankRules, Field, FieldSpec, Normalizer};
pub use source::{FileOutcome, IngestError, ParsedStatement, load_text, parse_file, parse_files};

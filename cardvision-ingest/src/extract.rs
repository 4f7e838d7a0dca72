//! Generic field extractor driven by the rule tables in [`crate::rules`].

use anyhow::{Context, Result};
use cardvision_core::normalize::{card_last4, clean_text, digits, parse_amount, parse_date};
use cardvision_core::{BankId, StatementRecord, Transaction, TxnKind};
use chrono::NaiveDate;
use regex::{Captures, Regex, RegexBuilder};
use std::collections::HashMap;
use tracing::debug;

use crate::detect::detect;
use crate::rules::{self, Field, Normalizer};

/// Transactions kept per record unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Compiled rules for one bank: per field, every (pattern, normalizer) pair in
/// evaluation order.
struct CompiledTable {
    fields: Vec<(Field, Vec<(Regex, Normalizer)>)>,
    transactions: Vec<Regex>,
}

impl CompiledTable {
    fn for_bank(bank: BankId) -> Result<Self> {
        let specs = rules::field_specs(bank);

        let mut fields = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let mut compiled = Vec::new();
            for spec in specs.iter().filter(|s| s.field == field) {
                for pattern in spec.patterns {
                    compiled.push((compile(pattern)?, spec.normalizer));
                }
            }
            fields.push((field, compiled));
        }

        let transactions = rules::transaction_patterns(bank)
            .into_iter()
            .map(compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            fields,
            transactions,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("compiling pattern {pattern}"))
}

/// A normalized capture, before it is stored on the record.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Text(String),
    Date(NaiveDate),
    Amount(f64),
    Period {
        start: Option<NaiveDate>,
        end: NaiveDate,
    },
}

fn normalize(normalizer: Normalizer, caps: &Captures) -> Option<Value> {
    let first = caps.get(1)?.as_str();
    match normalizer {
        Normalizer::Last4 => card_last4(first).map(Value::Text),
        Normalizer::Text => clean_text(first).map(Value::Text),
        Normalizer::Digits => digits(first).map(Value::Text),
        Normalizer::Date => parse_date(first).map(Value::Date),
        Normalizer::Amount => parse_amount(first).map(Value::Amount),
        Normalizer::Period => match caps.get(2) {
            Some(second) => {
                let start = parse_date(first)?;
                let end = parse_date(second.as_str())?;
                (start <= end).then_some(Value::Period {
                    start: Some(start),
                    end,
                })
            }
            // "date range upto 15 Aug, 2025": only the closing date is printed
            None => Some(Value::Period {
                start: None,
                end: parse_date(first)?,
            }),
        },
    }
}

fn assign(record: &mut StatementRecord, field: Field, value: Value) -> bool {
    match (field, value) {
        (Field::CardLast4, Value::Text(s)) => record.card_last4 = Some(s),
        (Field::CustomerName, Value::Text(s)) => record.customer_name = Some(s),
        (Field::CustomerId, Value::Text(s)) => record.customer_id = Some(s),
        (Field::StatementDate, Value::Date(d)) => record.statement_date = Some(d),
        (Field::DueDate, Value::Date(d)) => record.due_date = Some(d),
        (Field::TotalDue, Value::Amount(a)) => record.total_due = Some(a),
        (Field::MinimumDue, Value::Amount(a)) => record.minimum_due = Some(a),
        (Field::Period, Value::Period { start, end }) => {
            record.period_start = start;
            record.period_end = Some(end);
        }
        _ => return false,
    }
    true
}

fn transaction_from(caps: &Captures) -> Option<Transaction> {
    let date = parse_date(caps.name("date")?.as_str())?;
    let description = clean_text(caps.name("desc")?.as_str())?;
    let amount = parse_amount(caps.name("amt")?.as_str())?;

    let credit = caps.name("cr").is_some()
        || caps
            .name("kind")
            .is_some_and(|k| k.as_str().eq_ignore_ascii_case("credit"));
    let kind = if credit { TxnKind::Credit } else { TxnKind::Debit };

    Some(Transaction::new(date, description, amount.abs(), kind))
}

/// Reusable extractor holding compiled rule tables for every bank.
pub struct Extractor {
    tables: HashMap<BankId, CompiledTable>,
    sample_size: usize,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        let mut tables = HashMap::new();
        for bank in BankId::SUPPORTED.into_iter().chain([BankId::Unknown]) {
            tables.insert(bank, CompiledTable::for_bank(bank)?);
        }
        Ok(Self {
            tables,
            sample_size: DEFAULT_SAMPLE_SIZE,
        })
    }

    /// Cap on transactions kept per record. Counting is unaffected.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Detect the issuer, then extract with its rules.
    pub fn parse(&self, text: &str) -> StatementRecord {
        self.extract(text, detect(text))
    }

    /// Apply `bank`'s rules to `text`.
    ///
    /// Never fails: each field takes the first pattern that both matches and
    /// normalizes, and stays `None` when none does.
    pub fn extract(&self, text: &str, bank: BankId) -> StatementRecord {
        let mut record = StatementRecord::new(bank);
        let Some(table) = self.tables.get(&bank) else {
            return record;
        };

        for (field, patterns) in &table.fields {
            for (re, normalizer) in patterns {
                let Some(value) = re.captures(text).and_then(|caps| normalize(*normalizer, &caps))
                else {
                    continue;
                };
                debug!(?field, pattern = re.as_str(), ?value, "field matched");
                if assign(&mut record, *field, value) {
                    break;
                }
            }
        }

        self.extract_transactions(text, table, &mut record);
        record
    }

    /// Line-level scan. The first pattern yielding any row is used for the
    /// whole document; rows stay in document order.
    fn extract_transactions(&self, text: &str, table: &CompiledTable, record: &mut StatementRecord) {
        for re in &table.transactions {
            let mut rows: Vec<Transaction> = text
                .lines()
                .filter_map(|line| re.captures(line))
                .filter_map(|caps| transaction_from(&caps))
                .collect();
            if rows.is_empty() {
                continue;
            }

            debug!(pattern = re.as_str(), rows = rows.len(), "transaction rows matched");
            record.transaction_count = rows.len();
            rows.truncate(self.sample_size);
            record.transactions = rows;
            return;
        }
    }
}

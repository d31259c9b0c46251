//! Transaction-line extraction.
//!
//! A layout says where rows may appear and what a row looks like. Row
//! patterns use named groups `date`, `desc`, `amount` and an optional
//! `marker` that flags the direction of the line.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use super::rules::cascade::compile;
use super::rules::normalize::normalize_amount;
use crate::models::statement::{Transaction, TransactionType};

/// Pattern for one transaction row.
#[derive(Debug, Clone)]
pub struct TransactionRow {
    pattern: Regex,
    credit_markers: &'static [&'static str],
}

impl TransactionRow {
    /// `credit_markers` lists the marker tokens that mean Credit, compared
    /// case-insensitively. Any other marker, or none, means Debit.
    pub fn new(pattern: &str, credit_markers: &'static [&'static str]) -> Self {
        Self {
            pattern: compile(pattern),
            credit_markers,
        }
    }

    /// Parse a single line, if it is a row.
    pub fn parse_line(&self, line: &str) -> Option<Transaction> {
        self.pattern
            .captures(line)
            .and_then(|caps| self.from_captures(&caps))
    }

    /// All rows in `text`, in order of appearance.
    pub fn scan(&self, text: &str) -> Vec<Transaction> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| self.from_captures(&caps))
            .collect()
    }

    fn from_captures(&self, caps: &Captures<'_>) -> Option<Transaction> {
        let date = caps.name("date")?.as_str().trim();
        let description = caps
            .name("desc")?
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let amount = normalize_amount(caps.name("amount")?.as_str())?;

        if description.is_empty() {
            return None;
        }

        let kind = match caps.name("marker") {
            Some(marker) if self.is_credit(marker.as_str()) => TransactionType::Credit,
            _ => TransactionType::Debit,
        };

        trace!("Transaction row: {} {} {} {}", date, description, amount, kind);
        Some(Transaction {
            date: date.to_string(),
            description,
            amount,
            kind,
        })
    }

    fn is_credit(&self, marker: &str) -> bool {
        let marker = marker.trim();
        self.credit_markers
            .iter()
            .any(|credit| credit.eq_ignore_ascii_case(marker))
    }
}

/// Where transaction rows live in a provider's statement.
#[derive(Debug, Clone)]
pub enum TransactionLayout {
    /// The layout carries no transaction lines.
    None,
    /// Rows only count inside a section opened by a `start` line and closed
    /// by an `end` line. A repeated header re-opens the section.
    Sectioned {
        start: Regex,
        end: Option<Regex>,
        row: TransactionRow,
    },
    /// Rows are matched anywhere in the text.
    WholeText(TransactionRow),
}

impl TransactionLayout {
    pub fn sectioned(start: &str, end: Option<&str>, row: TransactionRow) -> Self {
        TransactionLayout::Sectioned {
            start: compile(start),
            end: end.map(compile),
            row,
        }
    }

    pub fn whole_text(row: TransactionRow) -> Self {
        TransactionLayout::WholeText(row)
    }

    pub fn extract(&self, text: &str) -> Vec<Transaction> {
        let transactions = match self {
            TransactionLayout::None => Vec::new(),
            TransactionLayout::WholeText(row) => row.scan(text),
            TransactionLayout::Sectioned { start, end, row } => {
                scan_sections(text, start, end.as_ref(), row)
            }
        };
        debug!("Extracted {} transactions", transactions.len());
        transactions
    }
}

fn scan_sections(
    text: &str,
    start: &Regex,
    end: Option<&Regex>,
    row: &TransactionRow,
) -> Vec<Transaction> {
    let mut in_section = false;
    let mut transactions = Vec::new();

    for line in text.lines().map(str::trim) {
        if start.is_match(line) {
            in_section = true;
            continue;
        }
        if end.is_some_and(|end| end.is_match(line)) {
            in_section = false;
            continue;
        }
        if in_section {
            transactions.extend(row.parse_line(line));
        }
    }

    transactions
}

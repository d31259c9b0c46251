//! Rendering of parse results as JSON, CSV or a plain-text summary.

use stmtx_core::{ParseResult, ParsedStatement};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON result document
    Json,
    /// CSV, one record of fields
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used for batch outputs.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Render the result document. Failures are always rendered as JSON.
pub fn render(result: &ParseResult, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match (result, format) {
        (ParseResult::Success(statement), OutputFormat::Csv) => format_csv(statement),
        (ParseResult::Success(statement), OutputFormat::Text) => Ok(format_text(statement)),
        _ => format_json(result, pretty),
    }
}

pub fn format_json(result: &ParseResult, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.to_json()?)
    }
}

fn format_csv(statement: &ParsedStatement) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let entries = statement.data.fields.entries();

    let mut header = vec!["provider"];
    header.extend(entries.iter().map(|(name, _)| *name));
    header.extend(["confidence", "transactions"]);
    wtr.write_record(&header)?;

    let confidence = statement.confidence.to_string();
    let transactions = statement.data.transactions.len().to_string();
    let mut record = vec![statement.provider.as_str()];
    record.extend(entries.iter().map(|(_, value)| value.as_str()));
    record.extend([confidence.as_str(), transactions.as_str()]);
    wtr.write_record(&record)?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(statement: &ParsedStatement) -> String {
    let fields = &statement.data.fields;
    let mut output = String::new();

    output.push_str(&format!("Provider: {}\n", statement.provider));
    output.push_str(&format!("Cardholder: {}\n", fields.cardholder_name));
    output.push_str(&format!("Card: {}\n", fields.card_number));
    output.push('\n');

    output.push_str("Statement:\n");
    output.push_str(&format!("  Date:        {}\n", fields.statement_date));
    output.push_str(&format!("  Due:         {}\n", fields.payment_due_date));
    output.push_str(&format!("  Total due:   {}\n", fields.total_amount_due));
    output.push_str(&format!("  Minimum due: {}\n", fields.minimum_amount_due));
    output.push_str(&format!("  Limit:       {}\n", fields.credit_limit));

    if !statement.data.transactions.is_empty() {
        output.push_str("\nTransactions:\n");
        for txn in &statement.data.transactions {
            output.push_str(&format!(
                "  {:<12} {:<40} {:>14} {}\n",
                txn.date, txn.description, txn.amount, txn.kind
            ));
        }
    }

    output
}

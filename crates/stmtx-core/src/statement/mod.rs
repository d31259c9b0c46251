//! Statement field extraction.
//!
//! Text flows through provider detection, the matching provider profile's
//! field cascades and transaction layout, and finally the confidence score.

pub mod confidence;
pub mod detect;
mod parser;
pub mod providers;
pub mod rules;
pub mod transactions;

pub use confidence::score;
pub use detect::detect;
pub use parser::StatementParser;
pub use providers::{ExtractorRegistry, FieldTable, ProviderProfile};
pub use transactions::{TransactionLayout, TransactionRow};

use crate::models::statement::{ExtractedFields, ProviderTag, StatementData, Transaction};

/// Extraction capability for one statement layout.
pub trait StatementExtractor: Send + Sync {
    /// Layout this extractor handles.
    fn provider(&self) -> ProviderTag;

    /// Extract the scalar fields. Misses are reported as `Not Found`.
    fn extract_fields(&self, text: &str) -> ExtractedFields;

    /// Extract transaction lines in order of appearance.
    fn extract_transactions(&self, text: &str) -> Vec<Transaction>;

    fn extract(&self, text: &str) -> StatementData {
        StatementData {
            fields: self.extract_fields(text),
            transactions: self.extract_transactions(text),
        }
    }
}

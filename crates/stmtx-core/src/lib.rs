//! Core library for credit-card statement field extraction.
//!
//! This crate provides:
//! - Provider detection for HDFC, ICICI, Axis, Kotak and SBI statement layouts
//! - Declarative per-provider pattern cascades with a generic fallback
//! - Transaction-line extraction and a completeness score
//! - Text acquisition from plain-text and PDF files

pub mod error;
pub mod models;
pub mod source;
pub mod statement;

pub use error::{Result, SourceError, StmtxError};
pub use models::config::{InputConfig, OutputConfig, StmtxConfig};
pub use models::statement::{
    ExtractedFields, FieldValue, ParseResult, ParsedStatement, ProviderTag, StatementData,
    Transaction, TransactionType, NOT_FOUND,
};
pub use source::{PlainTextSource, TextSource};
#[cfg(feature = "pdf")]
pub use source::PdfTextSource;
pub use statement::{ExtractorRegistry, StatementExtractor, StatementParser};

//! Parsing orchestrator: detection, extraction, scoring and result assembly.

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::confidence;
use super::detect;
use super::providers::ExtractorRegistry;
use crate::error::SourceError;
use crate::models::statement::{ParseResult, ParsedStatement, ProviderTag};
use crate::source::TextSource;

/// Entry point of the engine. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct StatementParser {
    registry: Arc<ExtractorRegistry>,
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser {
    /// Parser backed by the built-in provider profiles.
    pub fn new() -> Self {
        Self::with_registry(ExtractorRegistry::shared())
    }

    pub fn with_registry(registry: Arc<ExtractorRegistry>) -> Self {
        Self { registry }
    }

    /// Detect the provider without extracting anything.
    pub fn detect(&self, text: &str) -> ProviderTag {
        detect::detect(text)
    }

    /// Parse linearized statement text. Never fails: every problem becomes
    /// a [`ParseResult::Failure`].
    pub fn parse(&self, text: &str) -> ParseResult {
        if text.trim().is_empty() {
            warn!("Empty statement text");
            return ParseResult::failure(SourceError::Empty.to_string());
        }

        let text = normalize_line_endings(text);
        match panic::catch_unwind(AssertUnwindSafe(|| self.parse_text(&text))) {
            Ok(statement) => ParseResult::Success(statement),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("Parsing panicked: {}", message);
                ParseResult::failure(format!("Parsing error: {}", message))
            }
        }
    }

    /// Acquire text from `source`, then parse it.
    pub fn parse_source(&self, source: &dyn TextSource) -> ParseResult {
        match source.extract_text() {
            Ok(text) => self.parse(&text),
            Err(SourceError::Empty) => ParseResult::failure(SourceError::Empty.to_string()),
            Err(e) => {
                warn!("Text acquisition failed: {}", e);
                ParseResult::failure(format!("Failed to read PDF: {}", e))
            }
        }
    }

    fn parse_text(&self, text: &str) -> ParsedStatement {
        let start = Instant::now();

        let provider = self.detect(text);
        let extractor = self.registry.get(provider);
        if extractor.provider() != provider {
            debug!("No profile for {}, using {}", provider, extractor.provider());
        }

        let data = extractor.extract(text);
        let confidence = confidence::score(&data.fields);

        debug!("Missing fields: {:?}", data.fields.missing());
        info!(
            "Parsed {} statement in {}ms: confidence {}%, {} transactions",
            provider,
            start.elapsed().as_millis(),
            confidence,
            data.transactions.len()
        );

        ParsedStatement {
            provider,
            data,
            confidence,
        }
    }
}

/// Row and label patterns anchor on `\n`; CRLF and bare CR exports are
/// rewritten to LF first.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

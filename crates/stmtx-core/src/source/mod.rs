//! Text acquisition: turning an input document into linearized text.

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "pdf")]
pub use pdf::PdfTextSource;

use std::path::Path;

use tracing::debug;

use crate::error::SourceError;
use crate::models::config::InputConfig;

/// Result type for text acquisition.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Anything that can produce the linearized text of one statement.
pub trait TextSource {
    /// Extract the document text. Text that is empty after trimming is an
    /// error, not an empty string.
    fn extract_text(&self) -> Result<String>;
}

/// Already-linearized text, e.g. a `.txt` export.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    text: String,
}

impl PlainTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode bytes as UTF-8, replacing invalid sequences.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(data))
    }
}

impl TextSource for PlainTextSource {
    fn extract_text(&self) -> Result<String> {
        if self.text.trim().is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(self.text.clone())
    }
}

/// Validate `path` against `config` and open a source for it.
///
/// The file is read in place; nothing is copied or left behind.
pub fn open(path: &Path, config: &InputConfig) -> Result<Box<dyn TextSource>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !config.allows_extension(&extension) {
        return Err(SourceError::UnsupportedFormat(if extension.is_empty() {
            path.display().to_string()
        } else {
            extension
        }));
    }

    let size = std::fs::metadata(path)?.len();
    if size > config.max_file_size {
        return Err(SourceError::TooLarge {
            size,
            limit: config.max_file_size,
        });
    }

    let data = std::fs::read(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());

    match extension.as_str() {
        #[cfg(feature = "pdf")]
        "pdf" => Ok(Box::new(PdfTextSource::from_bytes(data)?)),
        #[cfg(not(feature = "pdf"))]
        "pdf" => Err(SourceError::UnsupportedFormat(
            "pdf (built without the `pdf` feature)".to_string(),
        )),
        _ => Ok(Box::new(PlainTextSource::from_bytes(&data))),
    }
}

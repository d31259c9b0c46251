//! PDF text linearization via `pdf-extract`.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use super::{Result, TextSource};
use crate::error::SourceError;

const PDF_MAGIC: &[u8] = b"%PDF";

/// A PDF document held in memory.
#[derive(Debug, Clone)]
pub struct PdfTextSource {
    data: Vec<u8>,
}

impl PdfTextSource {
    /// Wrap raw PDF bytes. Only the header is checked here; the body is
    /// parsed lazily by [`TextSource::extract_text`].
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if !data.starts_with(PDF_MAGIC) {
            return Err(SourceError::Pdf("not a PDF document".to_string()));
        }
        Ok(Self { data })
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self) -> Result<String> {
        trace!("Linearizing {} bytes of PDF", self.data.len());
        // pdf-extract panics on some malformed documents
        let text = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&self.data)
        }))
        .map_err(|_| SourceError::Pdf("malformed PDF document".to_string()))?
        .map_err(|e| SourceError::Pdf(e.to_string()))?;

        if text.trim().is_empty() {
            debug!("PDF has no text layer");
            return Err(SourceError::Empty);
        }
        debug!("Extracted {} characters of text", text.len());
        Ok(text)
    }
}

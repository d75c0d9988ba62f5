//! Plain-text extraction from PDF resumes.
//!
//! A document's text is the concatenation of every page's extracted text in
//! page order, with nothing inserted between pages. Documents without a text
//! layer (scanned images) produce an empty string; no OCR is attempted.

mod backend;
pub mod batch;

pub use backend::{LopdfBackend, PdfBackend};
pub use batch::{BatchExtractor, BatchPolicy};

use std::fs;
use std::path::Path;

use crate::detect::detect_format_from_bytes;
use crate::error::Result;

/// Extracts plain text from PDF bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor {
    _private: (),
}

impl TextExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Extract the text of an in-memory PDF.
    ///
    /// Fails when the data has no PDF header, cannot be parsed, or any page
    /// fails to extract.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        detect_format_from_bytes(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        log::debug!(
            "loaded PDF {} with {} pages",
            backend.version(),
            backend.page_count()
        );
        self.extract_with(&backend)
    }

    /// Extract the text of a PDF file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let data = fs::read(path)?;
        self.extract_bytes(&data)
    }

    /// Concatenate the text of every page served by `backend`.
    ///
    /// The first page failure aborts extraction of the whole document.
    pub fn extract_with<B: PdfBackend + ?Sized>(&self, backend: &B) -> Result<String> {
        let mut text = String::new();
        for page in backend.page_numbers() {
            text.push_str(&backend.page_text(page)?);
        }
        Ok(text)
    }
}
